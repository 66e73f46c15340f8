use super::HomeworkService;
use crate::errors::{ClassroomError, Result};
use crate::models::homeworks::entities::Homework;
use crate::utils::validate::require_non_blank;

pub async fn list_homework_by_class(
    service: &HomeworkService,
    class_id: &str,
) -> Result<Vec<Homework>> {
    require_non_blank(class_id, "Class ID")?;
    service.storage().list_homework_by_class(class_id).await
}

pub async fn get_homework(service: &HomeworkService, homework_id: &str) -> Result<Homework> {
    require_non_blank(homework_id, "Homework ID")?;
    service
        .storage()
        .get_homework_by_id(homework_id)
        .await?
        .ok_or_else(|| ClassroomError::not_found("Homework not found."))
}
