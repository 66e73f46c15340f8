use tracing::{info, warn};

use super::AnnouncementService;
use crate::errors::{ClassroomError, Result};
use crate::services::policy;

pub async fn delete_announcement(
    service: &AnnouncementService,
    announcement_id: &str,
    requester_id: &str,
) -> Result<()> {
    let announcement = service.get_announcement(announcement_id).await?;

    if let Err(e) = policy::owns_announcement(requester_id, &announcement).authorize() {
        warn!(
            "User {} tried to delete announcement {} posted by {}",
            requester_id, announcement_id, announcement.created_by
        );
        return Err(e);
    }

    if !service.storage().delete_announcement(announcement_id).await? {
        return Err(ClassroomError::not_found("Announcement not found."));
    }

    info!("Announcement {} deleted by {}", announcement_id, requester_id);
    Ok(())
}
