use chrono::Duration;

use crate::models::homeworks::requests::{CreateHomeworkRequest, DueDateInput};
use crate::services::HomeworkService;
use crate::services::test_support::{TestEnv, start_time};

fn homework_request(class_id: &str, due_in: Duration) -> CreateHomeworkRequest {
    CreateHomeworkRequest {
        class_id: class_id.to_string(),
        title: "Linked lists".to_string(),
        description: "Implement a doubly linked list".to_string(),
        due_date: Some((start_time() + due_in).into()),
        created_by: "t1".to_string(),
    }
}

#[tokio::test]
async fn test_create_and_fetch_homework() {
    let env = TestEnv::new();
    env.teacher("t1").await;
    env.class("t1", "c1", "ABCD1234").await;
    let service = HomeworkService::new(env.ctx.clone());

    let created = service
        .create_homework(homework_request("c1", Duration::days(3)))
        .await
        .unwrap();
    assert_eq!(created.assigned_date, start_time());

    let fetched = service.get_homework(&created.id).await.unwrap();
    assert_eq!(fetched, created);

    let listed = service.list_homework_by_class("c1").await.unwrap();
    assert_eq!(listed, vec![created]);
}

#[tokio::test]
async fn test_due_date_must_be_in_the_future() {
    let env = TestEnv::new();
    env.teacher("t1").await;
    env.class("t1", "c1", "ABCD1234").await;
    let service = HomeworkService::new(env.ctx.clone());

    for due_in in [Duration::zero(), Duration::hours(-1)] {
        let err = service
            .create_homework(homework_request("c1", due_in))
            .await
            .unwrap_err();
        assert_eq!(err.message(), "Due date must be in the future.");
    }

    let err = service
        .create_homework(homework_request("missing", Duration::days(1)))
        .await
        .unwrap_err();
    assert_eq!(err.message(), "Class not found.");

    let mut blank = homework_request("c1", Duration::days(1));
    blank.title = "  ".to_string();
    let err = service.create_homework(blank).await.unwrap_err();
    assert_eq!(err.error_type(), "Validation Error");
}

#[tokio::test]
async fn test_only_creator_deletes_homework() {
    let env = TestEnv::new();
    env.teacher("t1").await;
    env.class("t1", "c1", "ABCD1234").await;
    let service = HomeworkService::new(env.ctx.clone());
    let homework = service
        .create_homework(homework_request("c1", Duration::days(1)))
        .await
        .unwrap();

    let err = service.delete_homework(&homework.id, "t2").await.unwrap_err();
    assert_eq!(
        err.message(),
        "You are not authorized to delete this homework."
    );

    service.delete_homework(&homework.id, "t1").await.unwrap();
    let err = service.get_homework(&homework.id).await.unwrap_err();
    assert_eq!(err.message(), "Homework not found.");
}

#[tokio::test]
async fn test_due_date_local_time_and_precision() {
    let env = TestEnv::new();
    env.teacher("t1").await;
    env.class("t1", "c1", "ABCD1234").await;
    let service = HomeworkService::new(env.ctx.clone());

    // 本地 23:59 (+05:30) 即 UTC 18:29
    let local = CreateHomeworkRequest {
        due_date: DueDateInput::parse("2025-03-05T23:59:00"),
        ..homework_request("c1", Duration::zero())
    };
    let created = service.create_homework(local).await.unwrap();
    assert_eq!(
        created.due_date,
        start_time() + Duration::days(4) + Duration::minutes(719)
    );

    // 亚毫秒部分被截断，两种存储返回相同的值
    let precise = homework_request(
        "c1",
        Duration::days(1) + Duration::milliseconds(5) + Duration::microseconds(700),
    );
    let created = service.create_homework(precise).await.unwrap();
    assert_eq!(
        created.due_date,
        start_time() + Duration::days(1) + Duration::milliseconds(5)
    );
    assert_eq!(service.get_homework(&created.id).await.unwrap(), created);
}
