use chrono::{DateTime, Utc};

// 密码重置令牌，同一邮箱同时只有一个有效令牌
#[derive(Debug, Clone)]
pub struct PasswordResetToken {
    pub token: String,
    pub email: String,
    pub expiry_date: DateTime<Utc>,
}

impl PasswordResetToken {
    pub fn is_expired(&self, now: DateTime<Utc>) -> bool {
        self.expiry_date <= now
    }
}
