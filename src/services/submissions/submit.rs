use tracing::{info, warn};

use super::SubmissionService;
use crate::errors::{ClassroomError, Result};
use crate::models::submissions::entities::{HomeworkSubmission, SubmissionStatus};
use crate::models::submissions::requests::SubmitHomeworkRequest;

const ALREADY_SUBMITTED: &str =
    "You have already submitted this homework. Use reupload to update your submission.";

pub async fn submit_homework(
    service: &SubmissionService,
    submission: SubmitHomeworkRequest,
) -> Result<HomeworkSubmission> {
    service
        .check_submission(&submission, "Cannot submit homework after the due date.")
        .await?;

    let storage = service.storage();
    if storage
        .get_submission(&submission.homework_id, &submission.user_id)
        .await?
        .is_some()
    {
        return Err(ClassroomError::validation(ALREADY_SUBMITTED));
    }

    let record = HomeworkSubmission {
        id: service.ctx.ids.next_id(),
        homework_id: submission.homework_id,
        class_id: submission.class_id,
        user_id: submission.user_id,
        drive_link: submission.drive_link,
        submitted_on: service.ctx.clock.now(),
        status: SubmissionStatus::Submitted,
    };

    match storage.create_submission(record).await {
        Ok(created) => {
            info!(
                "User {} submitted homework {} in class {}",
                created.user_id, created.homework_id, created.class_id
            );
            Ok(created)
        }
        Err(e) if e.is_duplicate() => {
            warn!("Concurrent submission rejected by unique index: {}", e);
            Err(ClassroomError::validation(ALREADY_SUBMITTED))
        }
        Err(e) => Err(e),
    }
}
