use tracing::info;

use super::UserService;
use crate::errors::Result;
use crate::models::users::{entities::User, requests::UpdateUserRequest};
use crate::utils::password::hash_password;
use crate::utils::validate::{require_non_blank, validate_password};

pub async fn update_user(
    service: &UserService,
    user_id: &str,
    update: UpdateUserRequest,
) -> Result<User> {
    let mut user = service.get_user(user_id).await?;

    if let Some(name) = update.name {
        require_non_blank(&name, "Name")?;
        user.name = name;
    }
    if let Some(section) = update.section {
        user.section = Some(section);
    }
    if let Some(roll_number) = update.roll_number {
        user.roll_number = Some(roll_number);
    }
    // 空字符串视为不修改密码
    if let Some(password) = update.password.filter(|p| !p.is_empty()) {
        validate_password(&password)?;
        user.password_hash = Some(hash_password(&password, &service.ctx.auth.argon2)?);
    }

    let user = service.storage().update_user(user).await?;
    info!("User {} updated their profile", user.id);
    Ok(user)
}
