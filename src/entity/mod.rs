//! SeaORM 实体定义
//!
//! 这些实体用于数据库操作，与 models 模块中的业务实体分离。
//! Storage 层使用这些实体进行 CRUD 操作，然后转换为 models 中的业务实体。
//! 时间统一以毫秒时间戳存储。

pub mod prelude;

pub mod announcements;
pub mod attendance;
pub mod class_members;
pub mod classes;
pub mod homework;
pub mod homework_submissions;
pub mod password_reset_tokens;
pub mod users;

use chrono::{DateTime, Utc};

/// 毫秒时间戳转 UTC 时间
pub(crate) fn from_millis(millis: i64) -> DateTime<Utc> {
    DateTime::<Utc>::from_timestamp_millis(millis).unwrap_or_default()
}
