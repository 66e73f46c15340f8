use super::SubmissionService;
use crate::errors::Result;
use crate::models::submissions::entities::HomeworkSubmission;
use crate::utils::validate::require_non_blank;

pub async fn list_submissions_by_class(
    service: &SubmissionService,
    class_id: &str,
) -> Result<Vec<HomeworkSubmission>> {
    require_non_blank(class_id, "Class ID")?;
    service.storage().list_submissions_by_class(class_id).await
}

pub async fn list_submissions_by_class_and_user(
    service: &SubmissionService,
    class_id: &str,
    user_id: &str,
) -> Result<Vec<HomeworkSubmission>> {
    require_non_blank(class_id, "Class ID")?;
    require_non_blank(user_id, "User ID")?;
    service
        .storage()
        .list_submissions_by_class_and_user(class_id, user_id)
        .await
}
