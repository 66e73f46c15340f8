//! 统一错误处理模块
//!
//! 使用宏自动生成错误类型，支持错误代码和类型名称。
//! 业务层只返回 [`ClassroomError`]，HTTP 边界层通过 [`ResponseError`]
//! 将其转换为统一的 `ApiResponse` 信封和状态码。

use std::fmt;

use actix_web::{HttpResponse, ResponseError, http::StatusCode};

use crate::models::{ApiResponse, ErrorCode};

/// 定义错误类型的宏
///
/// 自动生成：
/// - enum 定义
/// - code() 方法 - 返回错误代码
/// - error_type() 方法 - 返回错误类型名称
/// - message() 方法 - 返回错误详情
/// - 便捷构造函数
macro_rules! define_classroom_errors {
    ($(
        $variant:ident($code:literal, $type_name:literal)
    ),* $(,)?) => {
        #[derive(Debug, Clone)]
        pub enum ClassroomError {
            $($variant(String),)*
        }

        impl ClassroomError {
            /// 获取错误代码
            pub fn code(&self) -> &'static str {
                match self {
                    $(ClassroomError::$variant(_) => $code,)*
                }
            }

            /// 获取错误类型名称
            pub fn error_type(&self) -> &'static str {
                match self {
                    $(ClassroomError::$variant(_) => $type_name,)*
                }
            }

            /// 获取错误详情
            pub fn message(&self) -> &str {
                match self {
                    $(ClassroomError::$variant(msg) => msg,)*
                }
            }
        }

        // 生成便捷构造函数
        paste::paste! {
            impl ClassroomError {
                $(
                    pub fn [<$variant:snake>]<T: Into<String>>(msg: T) -> Self {
                        ClassroomError::$variant(msg.into())
                    }
                )*
            }
        }
    };
}

define_classroom_errors! {
    DatabaseConfig("E001", "Database Configuration Error"),
    DatabaseConnection("E002", "Database Connection Error"),
    DatabaseOperation("E003", "Database Operation Error"),
    Duplicate("E004", "Duplicate Key"),
    FileOperation("E005", "File Operation Error"),
    Validation("E006", "Validation Error"),
    NotFound("E007", "Resource Not Found"),
    Serialization("E008", "Serialization Error"),
    DateParse("E009", "Date Parse Error"),
    Authentication("E010", "Authentication Error"),
    Authorization("E011", "Authorization Error"),
    ExternalService("E012", "External Service Error"),
    Internal("E013", "Internal Error"),
}

impl ClassroomError {
    /// 格式化为彩色输出（用于开发环境）
    #[cfg(debug_assertions)]
    pub fn format_colored(&self) -> String {
        format!(
            "\x1b[1;31m[ERROR]\x1b[0m \x1b[33m{}\x1b[0m \x1b[31m{}\x1b[0m\n  {}",
            self.code(),
            self.error_type(),
            self.message()
        )
    }

    /// 格式化为简洁输出
    pub fn format_simple(&self) -> String {
        format!("{}: {}", self.error_type(), self.message())
    }

    /// 是否为存储层唯一键冲突
    pub fn is_duplicate(&self) -> bool {
        matches!(self, ClassroomError::Duplicate(_))
    }

    /// 对应的 API 错误码
    pub fn error_code(&self) -> ErrorCode {
        match self {
            ClassroomError::Validation(_) | ClassroomError::DateParse(_) => {
                ErrorCode::ValidationFailed
            }
            ClassroomError::NotFound(_) => ErrorCode::NotFound,
            ClassroomError::Authentication(_) => ErrorCode::Unauthorized,
            ClassroomError::Authorization(_) => ErrorCode::Forbidden,
            ClassroomError::Duplicate(_) => ErrorCode::Conflict,
            ClassroomError::ExternalService(_) => ErrorCode::ExternalServiceFailed,
            _ => ErrorCode::InternalServerError,
        }
    }

    /// 返回给客户端的消息，内部错误不暴露细节
    pub fn public_message(&self) -> &str {
        match self.error_code() {
            ErrorCode::InternalServerError => "Internal server error",
            _ => self.message(),
        }
    }
}

impl fmt::Display for ClassroomError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.format_simple())
    }
}

impl std::error::Error for ClassroomError {}

impl ResponseError for ClassroomError {
    fn status_code(&self) -> StatusCode {
        match self.error_code() {
            ErrorCode::ValidationFailed => StatusCode::BAD_REQUEST,
            ErrorCode::NotFound => StatusCode::NOT_FOUND,
            ErrorCode::Unauthorized => StatusCode::UNAUTHORIZED,
            ErrorCode::Forbidden => StatusCode::FORBIDDEN,
            ErrorCode::Conflict => StatusCode::CONFLICT,
            ErrorCode::ExternalServiceFailed => StatusCode::BAD_GATEWAY,
            _ => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }

    fn error_response(&self) -> HttpResponse {
        if self.status_code().is_server_error() {
            tracing::error!("{}", self.format_simple());
        }
        HttpResponse::build(self.status_code())
            .json(ApiResponse::error_empty(self.error_code(), self.public_message()))
    }
}

// 为常见的错误类型实现 From trait
impl From<sea_orm::DbErr> for ClassroomError {
    fn from(err: sea_orm::DbErr) -> Self {
        match err.sql_err() {
            Some(sea_orm::SqlErr::UniqueConstraintViolation(msg)) => {
                ClassroomError::Duplicate(msg)
            }
            _ => ClassroomError::DatabaseOperation(err.to_string()),
        }
    }
}

impl From<std::io::Error> for ClassroomError {
    fn from(err: std::io::Error) -> Self {
        ClassroomError::FileOperation(err.to_string())
    }
}

impl From<serde_json::Error> for ClassroomError {
    fn from(err: serde_json::Error) -> Self {
        ClassroomError::Serialization(err.to_string())
    }
}

impl From<chrono::ParseError> for ClassroomError {
    fn from(err: chrono::ParseError) -> Self {
        ClassroomError::DateParse(err.to_string())
    }
}

impl From<reqwest::Error> for ClassroomError {
    fn from(err: reqwest::Error) -> Self {
        ClassroomError::ExternalService(err.to_string())
    }
}

impl From<jsonwebtoken::errors::Error> for ClassroomError {
    fn from(err: jsonwebtoken::errors::Error) -> Self {
        ClassroomError::Internal(format!("JWT error: {err}"))
    }
}

pub type Result<T> = std::result::Result<T, ClassroomError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_codes() {
        assert_eq!(ClassroomError::database_config("test").code(), "E001");
        assert_eq!(ClassroomError::duplicate("test").code(), "E004");
        assert_eq!(ClassroomError::validation("test").code(), "E006");
        assert_eq!(ClassroomError::authentication("test").code(), "E010");
    }

    #[test]
    fn test_error_types() {
        assert_eq!(
            ClassroomError::not_found("test").error_type(),
            "Resource Not Found"
        );
        assert_eq!(
            ClassroomError::validation("test").error_type(),
            "Validation Error"
        );
    }

    #[test]
    fn test_error_message() {
        let err = ClassroomError::validation("Invalid input");
        assert_eq!(err.message(), "Invalid input");
    }

    #[test]
    fn test_format_simple() {
        let err = ClassroomError::validation("Invalid class code");
        let formatted = err.format_simple();
        assert!(formatted.contains("Validation Error"));
        assert!(formatted.contains("Invalid class code"));
    }

    #[test]
    fn test_status_codes() {
        assert_eq!(
            ClassroomError::validation("x").status_code(),
            StatusCode::BAD_REQUEST
        );
        assert_eq!(
            ClassroomError::not_found("x").status_code(),
            StatusCode::NOT_FOUND
        );
        assert_eq!(
            ClassroomError::authentication("x").status_code(),
            StatusCode::UNAUTHORIZED
        );
        assert_eq!(
            ClassroomError::authorization("x").status_code(),
            StatusCode::FORBIDDEN
        );
        assert_eq!(
            ClassroomError::database_operation("x").status_code(),
            StatusCode::INTERNAL_SERVER_ERROR
        );
    }

    #[test]
    fn test_internal_message_hidden() {
        let err = ClassroomError::database_operation("connection reset by peer");
        assert_eq!(err.public_message(), "Internal server error");
        assert!(ClassroomError::duplicate("uq").is_duplicate());
    }
}
