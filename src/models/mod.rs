//! 数据模型
//!
//! 业务实体、请求体与响应体，均以 camelCase 序列化。

pub mod announcements;
pub mod attendance;
pub mod auth;
pub mod class_members;
pub mod classes;
pub mod common;
pub mod homeworks;
pub mod submissions;
pub mod users;

pub use common::{ApiResponse, ErrorCode};

/// 程序启动时间
#[derive(Debug, Clone)]
pub struct AppStartTime {
    pub start_datetime: chrono::DateTime<chrono::Utc>,
}
