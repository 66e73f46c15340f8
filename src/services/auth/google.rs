use tracing::{info, warn};

use super::{AuthService, login_response};
use crate::errors::{ClassroomError, Result};
use crate::models::auth::responses::LoginResponse;
use crate::models::users::entities::{User, UserRole};
use crate::utils::validate::require_non_blank;

pub async fn google_login(service: &AuthService, id_token: &str) -> Result<LoginResponse> {
    require_non_blank(id_token, "Token")?;
    let identity = service.ctx.google.verify(id_token).await?;

    let user = service
        .storage()
        .get_user_by_email(&identity.email)
        .await?
        .ok_or_else(|| ClassroomError::not_found("User not found. Please sign up first."))?;

    info!("User {} logged in with Google", user.id);
    login_response(&user)
}

/// 已有账号直接返回，否则创建无密码账号
pub async fn google_signup(
    service: &AuthService,
    id_token: &str,
    role: Option<&str>,
) -> Result<LoginResponse> {
    let role = match role.map(str::trim) {
        Some(r) if !r.is_empty() => r,
        _ => return Err(ClassroomError::validation("Role is required for signup.")),
    };
    let role: UserRole = role.parse().map_err(|_| {
        ClassroomError::validation("Role must be either 'student' or 'teacher'.")
    })?;
    require_non_blank(id_token, "Token")?;

    let identity = service.ctx.google.verify(id_token).await?;
    let storage = service.storage();

    if let Some(existing) = storage.get_user_by_email(&identity.email).await? {
        info!("Google signup for existing user {}", existing.id);
        return login_response(&existing);
    }

    let user = User {
        id: service.ctx.ids.next_id(),
        email: identity.email.clone(),
        password_hash: None,
        name: identity.name,
        role,
        section: None,
        roll_number: None,
    };

    let user = match storage.create_user(user).await {
        Ok(user) => user,
        // 并发注册时另一请求已创建同一邮箱
        Err(e) if e.is_duplicate() => {
            warn!("Concurrent Google signup: {}", e);
            storage
                .get_user_by_email(&identity.email)
                .await?
                .ok_or_else(|| ClassroomError::internal("User vanished after duplicate insert"))?
        }
        Err(e) => return Err(e),
    };

    info!("User {} signed up with Google as {}", user.id, user.role);
    login_response(&user)
}
