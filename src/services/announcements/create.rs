use tracing::info;

use super::AnnouncementService;
use crate::errors::{ClassroomError, Result};
use crate::models::announcements::{
    entities::Announcement, requests::CreateAnnouncementRequest,
};
use crate::utils::validate::require_non_blank;

pub async fn create_announcement(
    service: &AnnouncementService,
    request: CreateAnnouncementRequest,
) -> Result<Announcement> {
    require_non_blank(&request.user_id, "User ID")?;
    require_non_blank(&request.class_id, "Class ID")?;
    require_non_blank(&request.title, "Title")?;
    require_non_blank(&request.description, "Description")?;

    let storage = service.storage();
    if storage.get_class_by_id(&request.class_id).await?.is_none() {
        return Err(ClassroomError::not_found("Class not found."));
    }

    let announcement = storage
        .create_announcement(Announcement {
            id: service.ctx.ids.next_id(),
            class_id: request.class_id,
            title: request.title,
            description: request.description,
            created_at: service.ctx.clock.now(),
            created_by: request.user_id,
        })
        .await?;

    info!(
        "Announcement {} posted to class {} by {}",
        announcement.id, announcement.class_id, announcement.created_by
    );
    Ok(announcement)
}
