use once_cell::sync::Lazy;
use regex::Regex;

use crate::errors::{ClassroomError, Result};

static EMAIL_RE: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"^[A-Za-z0-9._%+-]+@[A-Za-z0-9.-]+\.[A-Za-z]{2,}$").expect("Invalid email regex")
});

static CLASS_CODE_RE: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"^[A-Z0-9]{8}$").expect("Invalid class code regex"));

pub const MIN_PASSWORD_LENGTH: usize = 8;

pub fn validate_email(email: &str) -> Result<()> {
    if !EMAIL_RE.is_match(email) {
        return Err(ClassroomError::validation("Email format is invalid"));
    }
    Ok(())
}

pub fn validate_password(password: &str) -> Result<()> {
    if password.chars().count() < MIN_PASSWORD_LENGTH {
        return Err(ClassroomError::validation(
            "Password must be at least 8 characters long.",
        ));
    }
    Ok(())
}

/// 邀请码：恰好 8 位大写字母或数字
pub fn validate_class_code(code: &str) -> Result<()> {
    if !CLASS_CODE_RE.is_match(code) {
        return Err(ClassroomError::validation(
            "Class code must be 8 uppercase alphanumeric characters.",
        ));
    }
    Ok(())
}

/// 解析严格的 YYYY-MM-DD 日期
pub fn parse_date(date: &str) -> Result<chrono::NaiveDate> {
    if date.len() != 10 {
        return Err(ClassroomError::validation(
            "Invalid date format. Use YYYY-MM-DD.",
        ));
    }
    chrono::NaiveDate::parse_from_str(date, "%Y-%m-%d")
        .map_err(|_| ClassroomError::validation("Invalid date format. Use YYYY-MM-DD."))
}

/// 必填字符串不能为空白
pub fn require_non_blank(value: &str, field: &str) -> Result<()> {
    if value.trim().is_empty() {
        return Err(ClassroomError::validation(format!("{field} is required.")));
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_class_code_pattern() {
        assert!(validate_class_code("ABCD1234").is_ok());
        assert!(validate_class_code("12345678").is_ok());
        assert!(validate_class_code("abcd1234").is_err());
        assert!(validate_class_code("ABC123").is_err());
        assert!(validate_class_code("ABCD12345").is_err());
        assert!(validate_class_code("ABCD-123").is_err());
        assert!(validate_class_code("").is_err());
    }

    #[test]
    fn test_email() {
        assert!(validate_email("student@school.edu").is_ok());
        assert!(validate_email("no-at-sign.edu").is_err());
        assert!(validate_email("a@b").is_err());
    }

    #[test]
    fn test_password_length() {
        assert!(validate_password("12345678").is_ok());
        let err = validate_password("1234567").unwrap_err();
        assert_eq!(err.message(), "Password must be at least 8 characters long.");
    }

    #[test]
    fn test_parse_date() {
        assert!(parse_date("2025-03-01").is_ok());
        assert!(parse_date("2025-3-1").is_err());
        assert!(parse_date("2025-02-30").is_err());
        assert!(parse_date("01-03-2025").is_err());
    }

    #[test]
    fn test_require_non_blank() {
        assert!(require_non_blank("x", "title").is_ok());
        let err = require_non_blank("   ", "Title").unwrap_err();
        assert_eq!(err.message(), "Title is required.");
    }
}
