pub mod join;
pub mod leave;
pub mod list;

#[cfg(test)]
mod tests;

use std::sync::Arc;

use crate::errors::Result;
use crate::models::classes::entities::Class;
use crate::models::users::entities::User;
use crate::services::context::ServiceContext;
use crate::storage::Storage;

/// 班级成员管理
pub struct ClassMemberService {
    ctx: ServiceContext,
}

impl ClassMemberService {
    pub fn new(ctx: ServiceContext) -> Self {
        Self { ctx }
    }

    pub(crate) fn storage(&self) -> &Arc<dyn Storage> {
        &self.ctx.storage
    }

    // 通过邀请码加入班级，返回加入的班级
    pub async fn join_class(&self, class_code: &str, user_id: &str) -> Result<Class> {
        join::join_class(self, class_code, user_id).await
    }

    // 退出班级
    pub async fn leave_class(&self, class_id: &str, user_id: &str) -> Result<()> {
        leave::leave_class(self, class_id, user_id).await
    }

    // 班级学生列表，按学号升序
    pub async fn list_students(&self, class_id: &str) -> Result<Vec<User>> {
        list::list_students(self, class_id).await
    }
}
