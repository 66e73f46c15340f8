use crate::services::ClassMemberService;
use crate::services::test_support::TestEnv;
use crate::storage::Storage;

#[tokio::test]
async fn test_join_class_by_code() {
    let env = TestEnv::new();
    env.teacher("t1").await;
    env.student("s1", Some(3)).await;
    env.class("t1", "c1", "ABCD1234").await;
    let service = ClassMemberService::new(env.ctx.clone());

    let class = service.join_class("ABCD1234", "s1").await.unwrap();
    assert_eq!(class.class_id, "c1");
    assert!(env.storage.get_class_member("c1", "s1").await.unwrap().is_some());

    let err = service.join_class("ABCD1234", "s1").await.unwrap_err();
    assert_eq!(err.message(), "You are already a member of this class.");

    let err = service.join_class("ZZZZ0000", "s1").await.unwrap_err();
    assert_eq!(err.error_type(), "Resource Not Found");
}

#[tokio::test]
async fn test_creator_cannot_join_or_leave() {
    let env = TestEnv::new();
    env.teacher("t1").await;
    env.class("t1", "c1", "ABCD1234").await;
    let service = ClassMemberService::new(env.ctx.clone());

    let err = service.join_class("ABCD1234", "t1").await.unwrap_err();
    assert_eq!(
        err.message(),
        "You are the creator of this class and cannot join it."
    );
    assert!(env.storage.list_class_members("c1").await.unwrap().is_empty());

    let err = service.leave_class("c1", "t1").await.unwrap_err();
    assert_eq!(
        err.message(),
        "You are the creator of this class and cannot leave it. Use delete instead."
    );
}

#[tokio::test]
async fn test_leave_class() {
    let env = TestEnv::new();
    env.teacher("t1").await;
    env.student("s1", None).await;
    env.class("t1", "c1", "ABCD1234").await;
    let service = ClassMemberService::new(env.ctx.clone());

    let err = service.leave_class("c1", "s1").await.unwrap_err();
    assert_eq!(err.message(), "You are not a member of this class.");

    service.join_class("ABCD1234", "s1").await.unwrap();
    service.leave_class("c1", "s1").await.unwrap();
    assert!(env.storage.get_class_member("c1", "s1").await.unwrap().is_none());

    let err = service.leave_class("missing", "s1").await.unwrap_err();
    assert_eq!(err.message(), "Class not found.");
}

#[tokio::test]
async fn test_list_students_sorted_by_roll_number() {
    let env = TestEnv::new();
    env.teacher("t1").await;
    env.teacher("t2").await;
    env.student("s1", None).await;
    env.student("s2", Some(12)).await;
    env.student("s3", Some(4)).await;
    env.class("t1", "c1", "ABCD1234").await;
    let service = ClassMemberService::new(env.ctx.clone());

    for user in ["s1", "s2", "s3", "t2"] {
        service.join_class("ABCD1234", user).await.unwrap();
    }

    let ids: Vec<String> = service
        .list_students("c1")
        .await
        .unwrap()
        .into_iter()
        .map(|u| u.id)
        .collect();
    assert_eq!(ids, vec!["s3", "s2", "s1"]);
}
