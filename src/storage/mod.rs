use std::sync::Arc;

use crate::config::AppConfig;
use crate::errors::Result;
use crate::models::{
    announcements::entities::Announcement, attendance::entities::Attendance,
    auth::entities::PasswordResetToken, class_members::entities::ClassMember,
    classes::entities::Class, homeworks::entities::Homework,
    submissions::entities::HomeworkSubmission, users::entities::User,
};

pub mod memory_storage;
pub mod sea_orm_storage;

/// 持久化存储接口
///
/// 唯一键由存储层保证，冲突时返回 [`crate::errors::ClassroomError::Duplicate`]：
/// - `users.email`
/// - `classes.class_id`、`classes.class_code`
/// - `class_members (class_id, user_id)`
/// - `homework_submissions (homework_id, user_id)`
/// - `attendance (class_id, date)`
/// - `password_reset_tokens.token`、`password_reset_tokens.email`
#[async_trait::async_trait]
pub trait Storage: Send + Sync {
    /// 用户管理方法
    // 创建用户
    async fn create_user(&self, user: User) -> Result<User>;
    // 通过ID获取用户信息
    async fn get_user_by_id(&self, id: &str) -> Result<Option<User>>;
    // 通过邮箱获取用户信息
    async fn get_user_by_email(&self, email: &str) -> Result<Option<User>>;
    // 批量获取用户
    async fn list_users_by_ids(&self, ids: &[String]) -> Result<Vec<User>>;
    // 按 ID 写回用户快照
    async fn update_user(&self, user: User) -> Result<User>;

    /// 班级管理方法
    async fn create_class(&self, class: Class) -> Result<Class>;
    async fn get_class_by_id(&self, class_id: &str) -> Result<Option<Class>>;
    async fn get_class_by_code(&self, class_code: &str) -> Result<Option<Class>>;
    // 用户创建的班级
    async fn list_classes_by_owner(&self, user_id: &str) -> Result<Vec<Class>>;
    async fn list_classes_by_ids(&self, class_ids: &[String]) -> Result<Vec<Class>>;
    async fn delete_class(&self, class_id: &str) -> Result<bool>;

    /// 班级成员管理方法
    async fn create_class_member(&self, member: ClassMember) -> Result<ClassMember>;
    async fn get_class_member(&self, class_id: &str, user_id: &str)
    -> Result<Option<ClassMember>>;
    async fn delete_class_member(&self, class_id: &str, user_id: &str) -> Result<bool>;
    async fn list_class_members(&self, class_id: &str) -> Result<Vec<ClassMember>>;
    // 用户加入的所有班级的成员记录
    async fn list_memberships_by_user(&self, user_id: &str) -> Result<Vec<ClassMember>>;
    async fn delete_class_members_by_class(&self, class_id: &str) -> Result<u64>;

    /// 作业管理方法
    async fn create_homework(&self, homework: Homework) -> Result<Homework>;
    async fn get_homework_by_id(&self, id: &str) -> Result<Option<Homework>>;
    async fn list_homework_by_class(&self, class_id: &str) -> Result<Vec<Homework>>;
    async fn delete_homework(&self, id: &str) -> Result<bool>;

    /// 作业提交管理方法
    async fn create_submission(&self, submission: HomeworkSubmission)
    -> Result<HomeworkSubmission>;
    async fn get_submission(
        &self,
        homework_id: &str,
        user_id: &str,
    ) -> Result<Option<HomeworkSubmission>>;
    // 按 ID 写回提交快照
    async fn update_submission(&self, submission: HomeworkSubmission)
    -> Result<HomeworkSubmission>;
    async fn list_submissions_by_class(&self, class_id: &str) -> Result<Vec<HomeworkSubmission>>;
    async fn list_submissions_by_class_and_user(
        &self,
        class_id: &str,
        user_id: &str,
    ) -> Result<Vec<HomeworkSubmission>>;
    async fn delete_submissions_by_class(&self, class_id: &str) -> Result<u64>;

    /// 考勤管理方法
    async fn create_attendance(&self, attendance: Attendance) -> Result<Attendance>;
    async fn list_attendance_by_date(&self, class_id: &str, date: &str)
    -> Result<Vec<Attendance>>;
    // 闭区间，按日期升序
    async fn list_attendance_in_range(
        &self,
        class_id: &str,
        start_date: &str,
        end_date: &str,
    ) -> Result<Vec<Attendance>>;
    async fn delete_attendance_by_class(&self, class_id: &str) -> Result<u64>;

    /// 公告管理方法
    async fn create_announcement(&self, announcement: Announcement) -> Result<Announcement>;
    async fn get_announcement_by_id(&self, id: &str) -> Result<Option<Announcement>>;
    async fn list_announcements_by_class(&self, class_id: &str) -> Result<Vec<Announcement>>;
    async fn delete_announcement(&self, id: &str) -> Result<bool>;

    /// 密码重置令牌
    async fn create_reset_token(&self, token: PasswordResetToken) -> Result<PasswordResetToken>;
    async fn get_reset_token(&self, token: &str) -> Result<Option<PasswordResetToken>>;
    async fn delete_reset_tokens_by_email(&self, email: &str) -> Result<u64>;
    async fn delete_reset_token(&self, token: &str) -> Result<bool>;
}

/// 根据数据库 URL 创建存储后端，`memory://` 使用内存存储
pub async fn create_storage() -> Result<Arc<dyn Storage>> {
    let config = AppConfig::get();
    if config.database.url.starts_with(memory_storage::MEMORY_URL_SCHEME) {
        tracing::warn!("Using in-memory storage, data will be lost on shutdown");
        return Ok(Arc::new(memory_storage::MemoryStorage::new()));
    }

    let storage = sea_orm_storage::SeaOrmStorage::new_async().await?;
    Ok(Arc::new(storage))
}
