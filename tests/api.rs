use std::sync::Arc;

use actix_web::http::StatusCode;
use actix_web::{App, test, web};
use async_trait::async_trait;
use chrono::{DateTime, FixedOffset, TimeZone, Utc};
use serde_json::{Value, json};

use classroom_backend::errors::{ClassroomError, Result};
use classroom_backend::models::users::entities::{User, UserRole};
use classroom_backend::routes;
use classroom_backend::services::ServiceContext;
use classroom_backend::services::context::{FixedClock, SequentialIds};
use classroom_backend::storage::Storage;
use classroom_backend::storage::memory_storage::MemoryStorage;
use classroom_backend::utils::google_token::{GoogleIdentity, GoogleTokenVerifier};

/// 只接受 "valid-<email>" 形式的令牌
struct FakeGoogle;

#[async_trait]
impl GoogleTokenVerifier for FakeGoogle {
    async fn verify(&self, id_token: &str) -> Result<GoogleIdentity> {
        id_token
            .strip_prefix("valid-")
            .map(|email| GoogleIdentity {
                email: email.to_string(),
                name: "Google User".to_string(),
            })
            .ok_or_else(|| ClassroomError::authentication("Invalid Google token."))
    }
}

// 2025-03-01 12:00 (+05:30)
fn now() -> DateTime<Utc> {
    Utc.with_ymd_and_hms(2025, 3, 1, 6, 30, 0).unwrap()
}

fn context() -> (ServiceContext, Arc<MemoryStorage>) {
    let storage = Arc::new(MemoryStorage::new());
    let clock = Arc::new(FixedClock::new(
        now(),
        FixedOffset::east_opt(330 * 60).unwrap(),
    ));
    let ctx = ServiceContext::new(
        storage.clone(),
        clock,
        Arc::new(SequentialIds::new("id")),
        Arc::new(FakeGoogle),
    );
    (ctx, storage)
}

async fn seed_user(storage: &MemoryStorage, id: &str, role: UserRole, roll_number: Option<i32>) {
    storage
        .create_user(User {
            id: id.to_string(),
            email: format!("{id}@school.edu"),
            password_hash: None,
            name: id.to_string(),
            role,
            section: None,
            roll_number,
        })
        .await
        .unwrap();
}

macro_rules! init_app {
    ($ctx:expr) => {
        test::init_service(
            App::new()
                .app_data(web::Data::new($ctx.clone()))
                .configure(routes::configure_api),
        )
        .await
    };
}

fn class_body(class_id: &str, code: &str, owner: &str) -> Value {
    json!({
        "classId": class_id,
        "classCode": code,
        "subjectCode": "CS101",
        "section": "A",
        "subject": "Data Structures",
        "teacherName": "Prof. Rao",
        "userId": owner,
    })
}

#[actix_web::test]
async fn test_class_lifecycle() {
    let (ctx, storage) = context();
    seed_user(&storage, "t1", UserRole::Teacher, None).await;
    seed_user(&storage, "s1", UserRole::Student, Some(1)).await;
    let app = init_app!(ctx);

    let req = test::TestRequest::post()
        .uri("/api/classes")
        .set_json(class_body("c1", "ABCD1234", "t1"))
        .to_request();
    let resp = test::call_service(&app, req).await;
    assert_eq!(resp.status(), StatusCode::OK);
    let body: Value = test::read_body_json(resp).await;
    assert_eq!(body["code"], 0);
    assert_eq!(body["data"]["classCode"], "ABCD1234");

    let req = test::TestRequest::post()
        .uri("/api/classes")
        .set_json(class_body("c2", "ABCD1234", "t1"))
        .to_request();
    let resp = test::call_service(&app, req).await;
    assert_eq!(resp.status(), StatusCode::BAD_REQUEST);
    let body: Value = test::read_body_json(resp).await;
    assert_eq!(body["message"], "Class with this code already exists.");

    // 学生不能创建班级
    let req = test::TestRequest::post()
        .uri("/api/classes")
        .insert_header(("userId", "s1"))
        .set_json(class_body("c3", "ZZZZ9999", "s1"))
        .to_request();
    assert_eq!(
        test::call_service(&app, req).await.status(),
        StatusCode::FORBIDDEN
    );

    let req = test::TestRequest::post()
        .uri("/api/classes/join")
        .insert_header(("x-forwarded-for", "10.0.1.1"))
        .set_json(json!({"classCode": "ABCD1234", "userId": "s1"}))
        .to_request();
    assert_eq!(test::call_service(&app, req).await.status(), StatusCode::OK);

    let req = test::TestRequest::get()
        .uri("/api/classes?userId=s1&type=joined")
        .to_request();
    let body: Value = test::call_and_read_body_json(&app, req).await;
    assert_eq!(body["data"].as_array().unwrap().len(), 1);

    let req = test::TestRequest::get()
        .uri("/api/attendance/c1/students")
        .to_request();
    let body: Value = test::call_and_read_body_json(&app, req).await;
    assert_eq!(body["data"][0]["id"], "s1");
    assert!(body["data"][0].get("passwordHash").is_none());

    let req = test::TestRequest::delete().uri("/api/classes/c1").to_request();
    assert_eq!(
        test::call_service(&app, req).await.status(),
        StatusCode::UNAUTHORIZED
    );

    let req = test::TestRequest::delete()
        .uri("/api/classes/c1?userId=s1")
        .to_request();
    assert_eq!(
        test::call_service(&app, req).await.status(),
        StatusCode::FORBIDDEN
    );

    let req = test::TestRequest::delete()
        .uri("/api/classes/c1?userId=t1")
        .to_request();
    assert_eq!(test::call_service(&app, req).await.status(), StatusCode::OK);

    let req = test::TestRequest::get().uri("/api/classes/c1").to_request();
    assert_eq!(
        test::call_service(&app, req).await.status(),
        StatusCode::NOT_FOUND
    );
    assert!(storage.list_class_members("c1").await.unwrap().is_empty());
}

#[actix_web::test]
async fn test_homework_and_submissions() {
    let (ctx, storage) = context();
    seed_user(&storage, "t1", UserRole::Teacher, None).await;
    seed_user(&storage, "s1", UserRole::Student, Some(1)).await;
    let app = init_app!(ctx);

    let req = test::TestRequest::post()
        .uri("/api/classes")
        .set_json(class_body("c1", "ABCD1234", "t1"))
        .to_request();
    assert_eq!(test::call_service(&app, req).await.status(), StatusCode::OK);

    let req = test::TestRequest::post()
        .uri("/api/homework")
        .set_json(json!({
            "classId": "c1",
            "title": "Heaps",
            "description": "Implement a binary heap",
            "dueDate": "2025-02-28T00:00:00Z",
            "createdBy": "t1",
        }))
        .to_request();
    let resp = test::call_service(&app, req).await;
    assert_eq!(resp.status(), StatusCode::BAD_REQUEST);
    let body: Value = test::read_body_json(resp).await;
    assert_eq!(body["message"], "Due date must be in the future.");

    let req = test::TestRequest::post()
        .uri("/api/homework")
        .set_json(json!({
            "classId": "c1",
            "title": "Heaps",
            "description": "Implement a binary heap",
            "dueDate": "2025-03-02T06:30:00Z",
            "createdBy": "t1",
        }))
        .to_request();
    let resp = test::call_service(&app, req).await;
    assert_eq!(resp.status(), StatusCode::CREATED);
    let body: Value = test::read_body_json(resp).await;
    let homework_id = body["data"]["id"].as_str().unwrap().to_string();

    let submission = json!({
        "homeworkId": homework_id,
        "classId": "c1",
        "userId": "s1",
        "driveLink": "https://drive.example/a",
    });
    let req = test::TestRequest::post()
        .uri("/api/homework/submissions")
        .set_json(&submission)
        .to_request();
    let resp = test::call_service(&app, req).await;
    assert_eq!(resp.status(), StatusCode::CREATED);
    let body: Value = test::read_body_json(resp).await;
    assert_eq!(body["data"]["status"], "SUBMITTED");

    let req = test::TestRequest::post()
        .uri("/api/homework/submissions")
        .set_json(&submission)
        .to_request();
    assert_eq!(
        test::call_service(&app, req).await.status(),
        StatusCode::BAD_REQUEST
    );

    let req = test::TestRequest::put()
        .uri(&format!("/api/homework/submissions/{homework_id}/s1"))
        .set_json(json!({"classId": "c1", "driveLink": "https://drive.example/b"}))
        .to_request();
    let body: Value = test::call_and_read_body_json(&app, req).await;
    assert_eq!(body["data"]["driveLink"], "https://drive.example/b");

    let req = test::TestRequest::get()
        .uri("/api/homework/submissions/class/c1/user/s1")
        .to_request();
    let body: Value = test::call_and_read_body_json(&app, req).await;
    assert_eq!(body["data"].as_array().unwrap().len(), 1);

    let delete_uri = format!("/api/homework/{homework_id}");
    let req = test::TestRequest::delete().uri(&delete_uri).to_request();
    assert_eq!(
        test::call_service(&app, req).await.status(),
        StatusCode::UNAUTHORIZED
    );

    let req = test::TestRequest::delete()
        .uri(&delete_uri)
        .insert_header(("userId", "s1"))
        .to_request();
    assert_eq!(
        test::call_service(&app, req).await.status(),
        StatusCode::FORBIDDEN
    );

    let req = test::TestRequest::delete()
        .uri(&delete_uri)
        .insert_header(("userId", "t1"))
        .to_request();
    assert_eq!(
        test::call_service(&app, req).await.status(),
        StatusCode::NO_CONTENT
    );

    let req = test::TestRequest::get().uri(&delete_uri).to_request();
    assert_eq!(
        test::call_service(&app, req).await.status(),
        StatusCode::NOT_FOUND
    );
}

#[actix_web::test]
async fn test_homework_due_date_without_offset() {
    let (ctx, storage) = context();
    seed_user(&storage, "t1", UserRole::Teacher, None).await;
    let app = init_app!(ctx);

    let req = test::TestRequest::post()
        .uri("/api/classes")
        .set_json(class_body("c1", "ABCD1234", "t1"))
        .to_request();
    assert_eq!(test::call_service(&app, req).await.status(), StatusCode::OK);

    // 本地时间按 +05:30 解释
    let req = test::TestRequest::post()
        .uri("/api/homework")
        .set_json(json!({
            "classId": "c1",
            "title": "Graphs",
            "description": "Dijkstra on a grid",
            "dueDate": "2025-03-05T23:59:00",
            "createdBy": "t1",
        }))
        .to_request();
    let resp = test::call_service(&app, req).await;
    assert_eq!(resp.status(), StatusCode::CREATED);
    let body: Value = test::read_body_json(resp).await;
    assert_eq!(body["data"]["dueDate"], "2025-03-05T18:29:00Z");

    let req = test::TestRequest::post()
        .uri("/api/homework")
        .set_json(json!({
            "classId": "c1",
            "title": "Graphs",
            "description": "Dijkstra on a grid",
            "dueDate": "next friday",
            "createdBy": "t1",
        }))
        .to_request();
    assert_eq!(
        test::call_service(&app, req).await.status(),
        StatusCode::BAD_REQUEST
    );
}

#[actix_web::test]
async fn test_attendance_requires_entry_list() {
    let (ctx, _storage) = context();
    let app = init_app!(ctx);

    let req = test::TestRequest::post()
        .uri("/api/attendance")
        .set_json(json!({"classId": "c1", "date": "2025-03-01"}))
        .to_request();
    let resp = test::call_service(&app, req).await;
    assert_eq!(resp.status(), StatusCode::BAD_REQUEST);
    let body: Value = test::read_body_json(resp).await;
    assert_eq!(body["message"], "Attendance list is required.");
}

#[actix_web::test]
async fn test_attendance_endpoints() {
    let (ctx, _storage) = context();
    let app = init_app!(ctx);

    let record = json!({
        "classId": "c1",
        "date": "2025-03-01",
        "attendance": [{"userId": "s1", "present": true}, {"userId": "s2", "present": false}],
    });
    let req = test::TestRequest::post()
        .uri("/api/attendance")
        .set_json(&record)
        .to_request();
    assert_eq!(
        test::call_service(&app, req).await.status(),
        StatusCode::CREATED
    );

    let req = test::TestRequest::post()
        .uri("/api/attendance")
        .set_json(&record)
        .to_request();
    let resp = test::call_service(&app, req).await;
    assert_eq!(resp.status(), StatusCode::BAD_REQUEST);
    let body: Value = test::read_body_json(resp).await;
    assert_eq!(
        body["message"],
        "Attendance already submitted for this class on this date."
    );

    let req = test::TestRequest::get()
        .uri("/api/attendance/class/c1/range?startDate=2025-02-01&endDate=2025-03-01")
        .to_request();
    let body: Value = test::call_and_read_body_json(&app, req).await;
    assert_eq!(body["data"][0]["attendance"][1]["userId"], "s2");

    let req = test::TestRequest::get()
        .uri("/api/attendance/class/c1/date/2025-03-01")
        .to_request();
    let body: Value = test::call_and_read_body_json(&app, req).await;
    assert_eq!(body["data"].as_array().unwrap().len(), 1);
}

#[actix_web::test]
async fn test_announcements() {
    let (ctx, storage) = context();
    seed_user(&storage, "t1", UserRole::Teacher, None).await;
    let app = init_app!(ctx);

    let req = test::TestRequest::post()
        .uri("/api/classes")
        .set_json(class_body("c1", "ABCD1234", "t1"))
        .to_request();
    assert_eq!(test::call_service(&app, req).await.status(), StatusCode::OK);

    let req = test::TestRequest::post()
        .uri("/api/announcements")
        .set_json(json!({
            "classId": "c1",
            "title": "Lab moved",
            "description": "Lab is in room 204 today",
            "userId": "t1",
        }))
        .to_request();
    let resp = test::call_service(&app, req).await;
    assert_eq!(resp.status(), StatusCode::CREATED);
    let body: Value = test::read_body_json(resp).await;
    let id = body["data"]["id"].as_str().unwrap().to_string();

    let req = test::TestRequest::get()
        .uri("/api/announcements/class/c1")
        .to_request();
    let body: Value = test::call_and_read_body_json(&app, req).await;
    assert_eq!(body["data"][0]["title"], "Lab moved");

    let req = test::TestRequest::delete()
        .uri(&format!("/api/announcements/{id}"))
        .insert_header(("userId", "t1"))
        .to_request();
    assert_eq!(
        test::call_service(&app, req).await.status(),
        StatusCode::NO_CONTENT
    );
}

#[actix_web::test]
async fn test_auth_flow() {
    let (ctx, _storage) = context();
    let app = init_app!(ctx);
    let ip = ("x-forwarded-for", "10.0.2.1");

    let req = test::TestRequest::post()
        .uri("/api/auth/signup")
        .insert_header(ip)
        .set_json(json!({
            "email": "asha@school.edu",
            "password": "correct-horse",
            "name": "Asha",
            "role": "student",
            "rollNumber": 4,
        }))
        .to_request();
    let resp = test::call_service(&app, req).await;
    assert_eq!(resp.status(), StatusCode::OK);
    let body: Value = test::read_body_json(resp).await;
    assert_eq!(body["data"]["role"], "STUDENT");
    let user_id = body["data"]["userId"].as_str().unwrap().to_string();

    let req = test::TestRequest::post()
        .uri("/api/auth/login")
        .insert_header(ip)
        .set_json(json!({"email": "asha@school.edu", "password": "wrong-password"}))
        .to_request();
    let resp = test::call_service(&app, req).await;
    assert_eq!(resp.status(), StatusCode::UNAUTHORIZED);
    let body: Value = test::read_body_json(resp).await;
    assert_eq!(body["message"], "Invalid email or password");

    let req = test::TestRequest::post()
        .uri("/api/auth/login")
        .insert_header(ip)
        .set_json(json!({"email": "asha@school.edu", "password": "correct-horse"}))
        .to_request();
    let body: Value = test::call_and_read_body_json(&app, req).await;
    assert!(body["data"]["token"].as_str().is_some());

    let req = test::TestRequest::put()
        .uri(&format!("/api/auth/users/{user_id}"))
        .set_json(json!({"section": "B"}))
        .to_request();
    let body: Value = test::call_and_read_body_json(&app, req).await;
    assert_eq!(body["data"]["section"], "B");
    assert_eq!(body["data"]["rollNumber"], 4);

    let req = test::TestRequest::post()
        .uri("/api/auth/google-signup")
        .insert_header(ip)
        .set_json(json!({"token": "valid-ravi@school.edu", "role": "Teacher"}))
        .to_request();
    let body: Value = test::call_and_read_body_json(&app, req).await;
    assert_eq!(body["data"]["role"], "TEACHER");

    let req = test::TestRequest::post()
        .uri("/api/auth/login")
        .insert_header(ip)
        .set_json(json!({"email": "ravi@school.edu", "password": "anything1"}))
        .to_request();
    let resp = test::call_service(&app, req).await;
    assert_eq!(resp.status(), StatusCode::BAD_REQUEST);
    let body: Value = test::read_body_json(resp).await;
    assert_eq!(
        body["message"],
        "User signed up with Google. Please use Google login."
    );
}

#[actix_web::test]
async fn test_malformed_json_is_bad_request() {
    let (ctx, _storage) = context();
    let app = init_app!(ctx);

    let req = test::TestRequest::post()
        .uri("/api/classes/leave")
        .insert_header(("content-type", "application/json"))
        .set_payload("{not json")
        .to_request();
    let resp = test::call_service(&app, req).await;
    assert_eq!(resp.status(), StatusCode::BAD_REQUEST);
    let body: Value = test::read_body_json(resp).await;
    assert_eq!(body["code"], 1000);
}

#[actix_web::test]
async fn test_password_reset_is_rate_limited() {
    let (ctx, _storage) = context();
    let app = init_app!(ctx);

    let mut statuses = Vec::new();
    for _ in 0..4 {
        let req = test::TestRequest::post()
            .uri("/api/auth/forgot-password")
            .insert_header(("x-forwarded-for", "10.0.3.1"))
            .set_json(json!({"email": "nobody@school.edu"}))
            .to_request();
        statuses.push(test::call_service(&app, req).await.status());
    }
    assert_eq!(
        statuses,
        vec![
            StatusCode::NOT_FOUND,
            StatusCode::NOT_FOUND,
            StatusCode::NOT_FOUND,
            StatusCode::TOO_MANY_REQUESTS
        ]
    );
}
