use serde::{Deserialize, Serialize};
use ts_rs::TS;

/// 响应信封中的业务码
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, TS)]
#[repr(i32)]
#[ts(export, export_to = "api.ts")]
pub enum ErrorCode {
    Success = 0,

    // 通用错误 1xxx
    BadRequest = 1000,
    ValidationFailed = 1001,
    NotFound = 1004,
    Conflict = 1009,
    RateLimitExceeded = 1029,

    // 认证授权 2xxx
    Unauthorized = 2001,
    Forbidden = 2003,

    // 外部服务 3xxx
    ExternalServiceFailed = 3001,

    InternalServerError = 5000,
}

impl std::fmt::Display for ErrorCode {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", *self as i32)
    }
}
