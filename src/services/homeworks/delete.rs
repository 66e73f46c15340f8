use tracing::{info, warn};

use super::HomeworkService;
use crate::errors::{ClassroomError, Result};
use crate::services::policy;

pub async fn delete_homework(
    service: &HomeworkService,
    homework_id: &str,
    requester_id: &str,
) -> Result<()> {
    let storage = service.storage();

    let homework = storage
        .get_homework_by_id(homework_id)
        .await?
        .ok_or_else(|| ClassroomError::not_found("Homework not found."))?;

    if let Err(e) = policy::owns_homework(requester_id, &homework).authorize() {
        warn!(
            "User {} tried to delete homework {} owned by {}",
            requester_id, homework_id, homework.created_by
        );
        return Err(e);
    }

    if !storage.delete_homework(homework_id).await? {
        return Err(ClassroomError::not_found("Homework not found."));
    }

    info!("Homework {} deleted by {}", homework_id, requester_id);
    Ok(())
}
