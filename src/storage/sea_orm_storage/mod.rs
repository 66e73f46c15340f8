//! SeaORM 存储实现
//!
//! 统一的数据库存储层，支持 SQLite、PostgreSQL 和 MySQL。

mod announcements;
mod attendance;
mod class_members;
mod classes;
mod homework;
mod password_reset_tokens;
mod submissions;
mod users;

use crate::config::AppConfig;
use crate::errors::{ClassroomError, Result};
use migration::{Migrator, MigratorTrait};
use sea_orm::{ConnectOptions, Database, DatabaseConnection, DbErr, SqlErr};
use std::time::Duration;
use tracing::info;

/// SeaORM 存储实现
#[derive(Clone)]
pub struct SeaOrmStorage {
    pub(crate) db: DatabaseConnection,
}

/// 数据库错误转换，唯一键冲突单独归类为 Duplicate
pub(crate) fn db_error(context: &'static str) -> impl Fn(DbErr) -> ClassroomError {
    move |e| match e.sql_err() {
        Some(SqlErr::UniqueConstraintViolation(msg)) => {
            ClassroomError::duplicate(format!("{context}: {msg}"))
        }
        _ => ClassroomError::database_operation(format!("{context}: {e}")),
    }
}

impl SeaOrmStorage {
    /// 创建新的 SeaORM 存储实例
    pub async fn new_async() -> Result<Self> {
        let config = AppConfig::get();
        Self::connect(&config.database.url, config).await
    }

    /// 连接指定 URL 并运行迁移
    pub async fn connect(url: &str, config: &AppConfig) -> Result<Self> {
        let db_url = Self::build_database_url(url)?;

        // 根据数据库类型选择连接方式
        let db = if db_url.starts_with("sqlite:") {
            Self::connect_sqlite(&db_url, config).await?
        } else {
            Self::connect_generic(&db_url, config).await?
        };

        // 运行迁移
        Migrator::up(&db, None)
            .await
            .map_err(|e| ClassroomError::database_operation(format!("数据库迁移失败: {e}")))?;

        info!("SeaORM 存储初始化完成，数据库: {}", db_url);

        Ok(Self { db })
    }

    /// SQLite 专用连接（WAL + pragma 优化）
    async fn connect_sqlite(url: &str, config: &AppConfig) -> Result<DatabaseConnection> {
        use sea_orm::SqlxSqliteConnector;
        use sea_orm::sqlx::sqlite::{
            SqliteConnectOptions, SqliteJournalMode, SqlitePoolOptions, SqliteSynchronous,
        };
        use std::str::FromStr;

        let opt = SqliteConnectOptions::from_str(url)
            .map_err(|e| ClassroomError::database_config(format!("SQLite URL 解析失败: {e}")))?
            .create_if_missing(true)
            .journal_mode(SqliteJournalMode::Wal)
            .synchronous(SqliteSynchronous::Normal)
            .busy_timeout(Duration::from_secs(5))
            .pragma("cache_size", "-64000")
            .pragma("temp_store", "memory");

        let pool = SqlitePoolOptions::new()
            .max_connections(config.database.pool_size)
            .min_connections(1)
            .test_before_acquire(true)
            .acquire_timeout(Duration::from_secs(config.database.timeout))
            .idle_timeout(Duration::from_secs(300))
            .connect_with(opt)
            .await
            .map_err(|e| ClassroomError::database_connection(format!("SQLite 连接失败: {e}")))?;

        Ok(SqlxSqliteConnector::from_sqlx_sqlite_pool(pool))
    }

    /// 通用连接（PostgreSQL、MySQL 等）
    async fn connect_generic(url: &str, config: &AppConfig) -> Result<DatabaseConnection> {
        let mut opt = ConnectOptions::new(url);
        opt.max_connections(config.database.pool_size)
            .min_connections(1)
            .connect_timeout(Duration::from_secs(config.database.timeout))
            .acquire_timeout(Duration::from_secs(config.database.timeout))
            .idle_timeout(Duration::from_secs(600))
            .max_lifetime(Duration::from_secs(1800))
            .sqlx_logging(false);

        Database::connect(opt)
            .await
            .map_err(|e| ClassroomError::database_connection(format!("无法连接到数据库: {e}")))
    }

    /// 从 URL 自动推断数据库类型并构建连接 URL
    fn build_database_url(url: &str) -> Result<String> {
        if url.starts_with("sqlite:") {
            Ok(url.to_string())
        } else if url.ends_with(".db") || url.ends_with(".sqlite") {
            Ok(format!("sqlite://{url}?mode=rwc"))
        } else if url.starts_with("postgres://")
            || url.starts_with("postgresql://")
            || url.starts_with("mysql://")
            || url.starts_with("mariadb://")
        {
            Ok(url.to_string())
        } else {
            Err(ClassroomError::database_config(format!(
                "无法从 URL 推断数据库类型: {url}. 支持: sqlite://, postgres://, mysql://, memory://, 或 .db/.sqlite 文件路径"
            )))
        }
    }
}

// Storage trait 实现
use crate::models::{
    announcements::entities::Announcement, attendance::entities::Attendance,
    auth::entities::PasswordResetToken, class_members::entities::ClassMember,
    classes::entities::Class, homeworks::entities::Homework,
    submissions::entities::HomeworkSubmission, users::entities::User,
};
use crate::storage::Storage;
use async_trait::async_trait;

#[async_trait]
impl Storage for SeaOrmStorage {
    // 用户模块
    async fn create_user(&self, user: User) -> Result<User> {
        self.create_user_impl(user).await
    }

    async fn get_user_by_id(&self, id: &str) -> Result<Option<User>> {
        self.get_user_by_id_impl(id).await
    }

    async fn get_user_by_email(&self, email: &str) -> Result<Option<User>> {
        self.get_user_by_email_impl(email).await
    }

    async fn list_users_by_ids(&self, ids: &[String]) -> Result<Vec<User>> {
        self.list_users_by_ids_impl(ids).await
    }

    async fn update_user(&self, user: User) -> Result<User> {
        self.update_user_impl(user).await
    }

    // 班级模块
    async fn create_class(&self, class: Class) -> Result<Class> {
        self.create_class_impl(class).await
    }

    async fn get_class_by_id(&self, class_id: &str) -> Result<Option<Class>> {
        self.get_class_by_id_impl(class_id).await
    }

    async fn get_class_by_code(&self, class_code: &str) -> Result<Option<Class>> {
        self.get_class_by_code_impl(class_code).await
    }

    async fn list_classes_by_owner(&self, user_id: &str) -> Result<Vec<Class>> {
        self.list_classes_by_owner_impl(user_id).await
    }

    async fn list_classes_by_ids(&self, class_ids: &[String]) -> Result<Vec<Class>> {
        self.list_classes_by_ids_impl(class_ids).await
    }

    async fn delete_class(&self, class_id: &str) -> Result<bool> {
        self.delete_class_impl(class_id).await
    }

    // 班级成员模块
    async fn create_class_member(&self, member: ClassMember) -> Result<ClassMember> {
        self.create_class_member_impl(member).await
    }

    async fn get_class_member(
        &self,
        class_id: &str,
        user_id: &str,
    ) -> Result<Option<ClassMember>> {
        self.get_class_member_impl(class_id, user_id).await
    }

    async fn delete_class_member(&self, class_id: &str, user_id: &str) -> Result<bool> {
        self.delete_class_member_impl(class_id, user_id).await
    }

    async fn list_class_members(&self, class_id: &str) -> Result<Vec<ClassMember>> {
        self.list_class_members_impl(class_id).await
    }

    async fn list_memberships_by_user(&self, user_id: &str) -> Result<Vec<ClassMember>> {
        self.list_memberships_by_user_impl(user_id).await
    }

    async fn delete_class_members_by_class(&self, class_id: &str) -> Result<u64> {
        self.delete_class_members_by_class_impl(class_id).await
    }

    // 作业模块
    async fn create_homework(&self, homework: Homework) -> Result<Homework> {
        self.create_homework_impl(homework).await
    }

    async fn get_homework_by_id(&self, id: &str) -> Result<Option<Homework>> {
        self.get_homework_by_id_impl(id).await
    }

    async fn list_homework_by_class(&self, class_id: &str) -> Result<Vec<Homework>> {
        self.list_homework_by_class_impl(class_id).await
    }

    async fn delete_homework(&self, id: &str) -> Result<bool> {
        self.delete_homework_impl(id).await
    }

    // 作业提交模块
    async fn create_submission(
        &self,
        submission: HomeworkSubmission,
    ) -> Result<HomeworkSubmission> {
        self.create_submission_impl(submission).await
    }

    async fn get_submission(
        &self,
        homework_id: &str,
        user_id: &str,
    ) -> Result<Option<HomeworkSubmission>> {
        self.get_submission_impl(homework_id, user_id).await
    }

    async fn update_submission(
        &self,
        submission: HomeworkSubmission,
    ) -> Result<HomeworkSubmission> {
        self.update_submission_impl(submission).await
    }

    async fn list_submissions_by_class(&self, class_id: &str) -> Result<Vec<HomeworkSubmission>> {
        self.list_submissions_by_class_impl(class_id).await
    }

    async fn list_submissions_by_class_and_user(
        &self,
        class_id: &str,
        user_id: &str,
    ) -> Result<Vec<HomeworkSubmission>> {
        self.list_submissions_by_class_and_user_impl(class_id, user_id)
            .await
    }

    async fn delete_submissions_by_class(&self, class_id: &str) -> Result<u64> {
        self.delete_submissions_by_class_impl(class_id).await
    }

    // 考勤模块
    async fn create_attendance(&self, attendance: Attendance) -> Result<Attendance> {
        self.create_attendance_impl(attendance).await
    }

    async fn list_attendance_by_date(
        &self,
        class_id: &str,
        date: &str,
    ) -> Result<Vec<Attendance>> {
        self.list_attendance_by_date_impl(class_id, date).await
    }

    async fn list_attendance_in_range(
        &self,
        class_id: &str,
        start_date: &str,
        end_date: &str,
    ) -> Result<Vec<Attendance>> {
        self.list_attendance_in_range_impl(class_id, start_date, end_date)
            .await
    }

    async fn delete_attendance_by_class(&self, class_id: &str) -> Result<u64> {
        self.delete_attendance_by_class_impl(class_id).await
    }

    // 公告模块
    async fn create_announcement(&self, announcement: Announcement) -> Result<Announcement> {
        self.create_announcement_impl(announcement).await
    }

    async fn get_announcement_by_id(&self, id: &str) -> Result<Option<Announcement>> {
        self.get_announcement_by_id_impl(id).await
    }

    async fn list_announcements_by_class(&self, class_id: &str) -> Result<Vec<Announcement>> {
        self.list_announcements_by_class_impl(class_id).await
    }

    async fn delete_announcement(&self, id: &str) -> Result<bool> {
        self.delete_announcement_impl(id).await
    }

    // 密码重置令牌模块
    async fn create_reset_token(&self, token: PasswordResetToken) -> Result<PasswordResetToken> {
        self.create_reset_token_impl(token).await
    }

    async fn get_reset_token(&self, token: &str) -> Result<Option<PasswordResetToken>> {
        self.get_reset_token_impl(token).await
    }

    async fn delete_reset_tokens_by_email(&self, email: &str) -> Result<u64> {
        self.delete_reset_tokens_by_email_impl(email).await
    }

    async fn delete_reset_token(&self, token: &str) -> Result<bool> {
        self.delete_reset_token_impl(token).await
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_build_database_url() {
        assert_eq!(
            SeaOrmStorage::build_database_url("classroom.db").unwrap(),
            "sqlite://classroom.db?mode=rwc"
        );
        assert_eq!(
            SeaOrmStorage::build_database_url("postgres://u:p@localhost/db").unwrap(),
            "postgres://u:p@localhost/db"
        );
        assert!(SeaOrmStorage::build_database_url("ftp://nope").is_err());
    }
}
