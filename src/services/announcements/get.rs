use super::AnnouncementService;
use crate::errors::{ClassroomError, Result};
use crate::models::announcements::entities::Announcement;
use crate::utils::validate::require_non_blank;

pub async fn list_announcements(
    service: &AnnouncementService,
    class_id: &str,
) -> Result<Vec<Announcement>> {
    require_non_blank(class_id, "Class ID")?;
    service.storage().list_announcements_by_class(class_id).await
}

pub async fn get_announcement(
    service: &AnnouncementService,
    announcement_id: &str,
) -> Result<Announcement> {
    service
        .storage()
        .get_announcement_by_id(announcement_id)
        .await?
        .ok_or_else(|| ClassroomError::not_found("Announcement not found."))
}
