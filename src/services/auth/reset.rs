use tracing::{info, warn};

use super::AuthService;
use crate::errors::{ClassroomError, Result};
use crate::models::auth::{
    entities::PasswordResetToken, requests::ResetPasswordRequest, responses::ResetLinkResponse,
};
use crate::utils::password::hash_password;
use crate::utils::validate::validate_password;

const INVALID_TOKEN: &str = "Invalid or expired token.";

/// 令牌本身不写入日志
pub async fn forgot_password(service: &AuthService, email: &str) -> Result<ResetLinkResponse> {
    let email = email.trim();
    let storage = service.storage();

    let user = storage
        .get_user_by_email(email)
        .await?
        .ok_or_else(|| ClassroomError::not_found("Email not found."))?;
    if user.is_google_only() {
        return Err(ClassroomError::validation(
            "User signed up with Google. Password reset is not applicable.",
        ));
    }

    // 每个邮箱只保留一个有效令牌
    let removed = storage.delete_reset_tokens_by_email(email).await?;
    if removed > 0 {
        info!("Replaced {} pending reset token(s) for user {}", removed, user.id);
    }

    let settings = &service.ctx.auth;
    let reset_token = storage
        .create_reset_token(PasswordResetToken {
            token: service.ctx.ids.next_id(),
            email: user.email.clone(),
            expiry_date: service.ctx.clock.now() + settings.reset_token_ttl,
        })
        .await?;

    info!("Password reset link issued for user {}", user.id);
    Ok(ResetLinkResponse {
        reset_link: format!("{}?token={}", settings.reset_link_base, reset_token.token),
    })
}

pub async fn reset_password(service: &AuthService, request: ResetPasswordRequest) -> Result<()> {
    if request.token.trim().is_empty() {
        return Err(ClassroomError::validation("Token is required."));
    }
    validate_password(&request.new_password)?;

    let storage = service.storage();
    let token = storage
        .get_reset_token(&request.token)
        .await?
        .filter(|t| !t.is_expired(service.ctx.clock.now()))
        .ok_or_else(|| {
            warn!("Rejected an unknown or expired password reset token");
            ClassroomError::validation(INVALID_TOKEN)
        })?;

    let mut user = storage
        .get_user_by_email(&token.email)
        .await?
        .ok_or_else(|| ClassroomError::not_found("User not found."))?;
    user.password_hash = Some(hash_password(&request.new_password, &service.ctx.auth.argon2)?);
    let user = storage.update_user(user).await?;

    storage.delete_reset_token(&token.token).await?;
    info!("Password reset for user {}", user.id);
    Ok(())
}
