pub mod create;
pub mod delete;
pub mod get;
pub mod list;


use std::sync::Arc;

use crate::errors::Result;
use crate::models::classes::{entities::Class, requests::CreateClassRequest};
use crate::services::context::ServiceContext;
use crate::storage::Storage;

/// 班级生命周期管理
pub struct ClassService {
    ctx: ServiceContext,
}

impl ClassService {
    pub fn new(ctx: ServiceContext) -> Self {
        Self { ctx }
    }

    pub(crate) fn storage(&self) -> &Arc<dyn Storage> {
        &self.ctx.storage
    }

    // 创建班级，actor_id 为发起请求的用户
    pub async fn create_class(&self, actor_id: &str, class_data: CreateClassRequest) -> Result<Class> {
        create::create_class(self, actor_id, class_data).await
    }

    // 根据班级 ID 获取班级，不存在时返回 None
    pub async fn get_class_by_id(&self, class_id: &str) -> Result<Option<Class>> {
        get::get_class_by_id(self, class_id).await
    }

    // 根据邀请码获取班级
    pub async fn get_class_by_code(&self, class_code: &str) -> Result<Option<Class>> {
        get::get_class_by_code(self, class_code).await
    }

    // 获取用户创建或加入的班级列表
    pub async fn list_classes(
        &self,
        user_id: Option<&str>,
        list_type: Option<&str>,
    ) -> Result<Vec<Class>> {
        list::list_classes(self, user_id, list_type).await
    }

    // 删除班级并级联删除成员、考勤、提交
    pub async fn delete_class(&self, class_id: &str, requester_id: &str) -> Result<()> {
        delete::delete_class(self, class_id, requester_id).await
    }
}
