use tracing::info;

use super::SubmissionService;
use crate::errors::{ClassroomError, Result};
use crate::models::submissions::entities::{HomeworkSubmission, SubmissionStatus};
use crate::models::submissions::requests::SubmitHomeworkRequest;

pub async fn update_submission(
    service: &SubmissionService,
    submission: SubmitHomeworkRequest,
) -> Result<HomeworkSubmission> {
    service
        .check_submission(&submission, "Cannot reupload homework after the due date.")
        .await?;

    let storage = service.storage();
    let existing = storage
        .get_submission(&submission.homework_id, &submission.user_id)
        .await?
        .filter(|s| s.class_id == submission.class_id)
        .ok_or_else(|| {
            ClassroomError::validation(
                "No submission found to update. Please submit the homework first.",
            )
        })?;

    // 新快照沿用原 ID
    let updated = storage
        .update_submission(HomeworkSubmission {
            drive_link: submission.drive_link,
            submitted_on: service.ctx.clock.now(),
            status: SubmissionStatus::Submitted,
            ..existing
        })
        .await?;

    info!(
        "User {} re-uploaded homework {} (submission {})",
        updated.user_id, updated.homework_id, updated.id
    );
    Ok(updated)
}
