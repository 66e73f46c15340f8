use tracing::{info, warn};

use super::{AuthService, login_response};
use crate::errors::{ClassroomError, Result};
use crate::models::auth::{requests::LoginRequest, responses::LoginResponse};
use crate::utils::password::verify_password;

const INVALID_CREDENTIALS: &str = "Invalid email or password";

pub async fn login(service: &AuthService, request: LoginRequest) -> Result<LoginResponse> {
    let email = request.email.trim();
    let user = service
        .storage()
        .get_user_by_email(email)
        .await?
        .ok_or_else(|| ClassroomError::authentication(INVALID_CREDENTIALS))?;

    let Some(password_hash) = user.password_hash.as_deref() else {
        return Err(ClassroomError::validation(
            "User signed up with Google. Please use Google login.",
        ));
    };

    if !verify_password(&request.password, password_hash) {
        warn!("Failed login attempt for user {}", user.id);
        return Err(ClassroomError::authentication(INVALID_CREDENTIALS));
    }

    info!("User {} logged in successfully", user.id);
    login_response(&user)
}
