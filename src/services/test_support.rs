//! 服务层测试夹具：内存存储、固定时钟、递增 ID 与可控的 Google 校验器

use std::sync::Arc;

use async_trait::async_trait;
use chrono::{DateTime, FixedOffset, TimeZone, Utc};
use dashmap::DashMap;

use super::context::{FixedClock, SequentialIds, ServiceContext};
use crate::errors::{ClassroomError, Result};
use crate::models::classes::entities::Class;
use crate::models::classes::requests::CreateClassRequest;
use crate::models::users::entities::{User, UserRole};
use crate::services::ClassService;
use crate::storage::Storage;
use crate::storage::memory_storage::MemoryStorage;
use crate::utils::google_token::{GoogleIdentity, GoogleTokenVerifier};

/// 按 token 返回预设身份
#[derive(Default)]
pub struct StubGoogleVerifier {
    identities: DashMap<String, GoogleIdentity>,
}

impl StubGoogleVerifier {
    pub fn register(&self, token: &str, email: &str, name: &str) {
        self.identities.insert(
            token.to_string(),
            GoogleIdentity {
                email: email.to_string(),
                name: name.to_string(),
            },
        );
    }
}

#[async_trait]
impl GoogleTokenVerifier for StubGoogleVerifier {
    async fn verify(&self, id_token: &str) -> Result<GoogleIdentity> {
        self.identities
            .get(id_token)
            .map(|identity| identity.value().clone())
            .ok_or_else(|| ClassroomError::authentication("Invalid Google token."))
    }
}

pub struct TestEnv {
    pub ctx: ServiceContext,
    pub clock: Arc<FixedClock>,
    pub storage: Arc<MemoryStorage>,
    pub google: Arc<StubGoogleVerifier>,
}

/// 2025-03-01 12:00 (+05:30)
pub fn start_time() -> DateTime<Utc> {
    Utc.with_ymd_and_hms(2025, 3, 1, 6, 30, 0).unwrap()
}

impl TestEnv {
    pub fn new() -> Self {
        let ist = FixedOffset::east_opt(330 * 60).unwrap();
        let clock = Arc::new(FixedClock::new(start_time(), ist));
        let storage = Arc::new(MemoryStorage::new());
        let google = Arc::new(StubGoogleVerifier::default());
        let ctx = ServiceContext::new(
            storage.clone(),
            clock.clone(),
            Arc::new(SequentialIds::new("id")),
            google.clone(),
        );
        Self {
            ctx,
            clock,
            storage,
            google,
        }
    }

    pub async fn user(&self, id: &str, role: UserRole, roll_number: Option<i32>) -> User {
        self.storage
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
            .unwrap()
    }

    pub async fn teacher(&self, id: &str) -> User {
        self.user(id, UserRole::Teacher, None).await
    }

    pub async fn student(&self, id: &str, roll_number: Option<i32>) -> User {
        self.user(id, UserRole::Student, roll_number).await
    }

    pub async fn class(&self, owner: &str, class_id: &str, class_code: &str) -> Class {
        ClassService::new(self.ctx.clone())
            .create_class(owner, class_request(owner, class_id, class_code))
            .await
            .unwrap()
    }
}

pub fn class_request(owner: &str, class_id: &str, class_code: &str) -> CreateClassRequest {
    CreateClassRequest {
        class_id: class_id.to_string(),
        class_code: class_code.to_string(),
        subject_code: "CS101".to_string(),
        section: "A".to_string(),
        subject: "Data Structures".to_string(),
        teacher_name: "Prof. Rao".to_string(),
        user_id: owner.to_string(),
    }
}
