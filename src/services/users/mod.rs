pub mod get;
pub mod update;


use std::sync::Arc;

use crate::errors::Result;
use crate::models::users::{entities::User, requests::UpdateUserRequest};
use crate::services::context::ServiceContext;
use crate::storage::Storage;

pub struct UserService {
    ctx: ServiceContext,
}

impl UserService {
    pub fn new(ctx: ServiceContext) -> Self {
        Self { ctx }
    }

    pub(crate) fn storage(&self) -> &Arc<dyn Storage> {
        &self.ctx.storage
    }

    pub async fn get_user(&self, user_id: &str) -> Result<User> {
        get::get_user(self, user_id).await
    }

    // 只更新请求中出现的字段
    pub async fn update_user(&self, user_id: &str, update: UpdateUserRequest) -> Result<User> {
        update::update_user(self, user_id, update).await
    }
}
