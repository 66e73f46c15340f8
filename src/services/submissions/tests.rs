use chrono::Duration;

use crate::models::homeworks::{entities::Homework, requests::CreateHomeworkRequest};
use crate::models::submissions::entities::SubmissionStatus;
use crate::models::submissions::requests::SubmitHomeworkRequest;
use crate::services::test_support::{TestEnv, start_time};
use crate::services::{HomeworkService, SubmissionService};

async fn setup(env: &TestEnv) -> Homework {
    env.teacher("t1").await;
    env.student("s1", Some(1)).await;
    env.class("t1", "c1", "ABCD1234").await;
    HomeworkService::new(env.ctx.clone())
        .create_homework(CreateHomeworkRequest {
            class_id: "c1".to_string(),
            title: "Trees".to_string(),
            description: "AVL rotations".to_string(),
            due_date: Some((start_time() + Duration::hours(2)).into()),
            created_by: "t1".to_string(),
        })
        .await
        .unwrap()
}

fn submission(homework_id: &str, class_id: &str, link: &str) -> SubmitHomeworkRequest {
    SubmitHomeworkRequest {
        homework_id: homework_id.to_string(),
        class_id: class_id.to_string(),
        user_id: "s1".to_string(),
        drive_link: link.to_string(),
    }
}

#[tokio::test]
async fn test_submit_once_then_reupload() {
    let env = TestEnv::new();
    let homework = setup(&env).await;
    let service = SubmissionService::new(env.ctx.clone());

    let first = service
        .submit_homework(submission(&homework.id, "c1", "https://drive/a"))
        .await
        .unwrap();
    assert_eq!(first.status, SubmissionStatus::Submitted);
    assert_eq!(first.submitted_on, start_time());

    let err = service
        .submit_homework(submission(&homework.id, "c1", "https://drive/b"))
        .await
        .unwrap_err();
    assert_eq!(
        err.message(),
        "You have already submitted this homework. Use reupload to update your submission."
    );

    env.clock.advance(Duration::minutes(30));
    let updated = service
        .update_submission(submission(&homework.id, "c1", "https://drive/b"))
        .await
        .unwrap();
    assert_eq!(updated.id, first.id);
    assert_eq!(updated.drive_link, "https://drive/b");
    assert_eq!(updated.submitted_on, start_time() + Duration::minutes(30));

    let listed = service
        .list_submissions_by_class_and_user("c1", "s1")
        .await
        .unwrap();
    assert_eq!(listed, vec![updated]);
}

#[tokio::test]
async fn test_cutoff_is_exclusive() {
    let env = TestEnv::new();
    let homework = setup(&env).await;
    let service = SubmissionService::new(env.ctx.clone());

    env.clock.set(homework.due_date);
    let err = service
        .submit_homework(submission(&homework.id, "c1", "https://drive/a"))
        .await
        .unwrap_err();
    assert_eq!(err.message(), "Cannot submit homework after the due date.");

    let err = service
        .update_submission(submission(&homework.id, "c1", "https://drive/a"))
        .await
        .unwrap_err();
    assert_eq!(err.message(), "Cannot reupload homework after the due date.");
    assert!(service.list_submissions_by_class("c1").await.unwrap().is_empty());
}

#[tokio::test]
async fn test_submission_validations() {
    let env = TestEnv::new();
    let homework = setup(&env).await;
    let service = SubmissionService::new(env.ctx.clone());

    let err = service
        .submit_homework(submission(&homework.id, "other", "https://drive/a"))
        .await
        .unwrap_err();
    assert_eq!(err.message(), "Class ID does not match the homework's class.");

    let err = service
        .submit_homework(submission("missing", "c1", "https://drive/a"))
        .await
        .unwrap_err();
    assert_eq!(err.error_type(), "Resource Not Found");

    let err = service
        .submit_homework(submission(&homework.id, "c1", ""))
        .await
        .unwrap_err();
    assert_eq!(err.message(), "Google Drive link is required.");

    let err = service
        .update_submission(submission(&homework.id, "c1", "https://drive/a"))
        .await
        .unwrap_err();
    assert_eq!(
        err.message(),
        "No submission found to update. Please submit the homework first."
    );
}
