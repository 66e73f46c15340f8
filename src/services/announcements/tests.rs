use chrono::Duration;

use crate::models::announcements::requests::CreateAnnouncementRequest;
use crate::services::AnnouncementService;
use crate::services::test_support::TestEnv;

fn request(title: &str) -> CreateAnnouncementRequest {
    CreateAnnouncementRequest {
        class_id: "c1".to_string(),
        title: title.to_string(),
        description: "Bring your lab manuals".to_string(),
        user_id: "t1".to_string(),
    }
}

#[tokio::test]
async fn test_post_and_list_in_order() {
    let env = TestEnv::new();
    env.teacher("t1").await;
    env.class("t1", "c1", "ABCD1234").await;
    let service = AnnouncementService::new(env.ctx.clone());

    let first = service.create_announcement(request("Lab")).await.unwrap();
    env.clock.advance(Duration::minutes(5));
    let second = service.create_announcement(request("Quiz")).await.unwrap();

    let listed = service.list_announcements("c1").await.unwrap();
    assert_eq!(listed, vec![first.clone(), second]);
    assert_eq!(service.get_announcement(&first.id).await.unwrap(), first);
}

#[tokio::test]
async fn test_announcement_requires_class() {
    let env = TestEnv::new();
    let service = AnnouncementService::new(env.ctx.clone());

    let err = service.create_announcement(request("Lab")).await.unwrap_err();
    assert_eq!(err.message(), "Class not found.");

    let mut blank = request("Lab");
    blank.user_id = String::new();
    let err = service.create_announcement(blank).await.unwrap_err();
    assert_eq!(err.message(), "User ID is required.");
}

#[tokio::test]
async fn test_only_creator_deletes_announcement() {
    let env = TestEnv::new();
    env.teacher("t1").await;
    env.class("t1", "c1", "ABCD1234").await;
    let service = AnnouncementService::new(env.ctx.clone());
    let posted = service.create_announcement(request("Lab")).await.unwrap();

    let err = service
        .delete_announcement(&posted.id, "s1")
        .await
        .unwrap_err();
    assert_eq!(err.error_type(), "Authorization Error");

    service.delete_announcement(&posted.id, "t1").await.unwrap();
    let err = service.get_announcement(&posted.id).await.unwrap_err();
    assert_eq!(err.message(), "Announcement not found.");
}
