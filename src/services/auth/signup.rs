use tracing::{info, warn};

use super::{AuthService, login_response};
use crate::errors::{ClassroomError, Result};
use crate::models::auth::{requests::SignupRequest, responses::LoginResponse};
use crate::models::users::entities::User;
use crate::utils::password::hash_password;
use crate::utils::validate::{require_non_blank, validate_email, validate_password};

const EMAIL_EXISTS: &str = "Email already exists";

pub async fn signup(service: &AuthService, request: SignupRequest) -> Result<LoginResponse> {
    let email = request.email.trim().to_string();
    validate_email(&email)?;
    validate_password(&request.password)?;
    require_non_blank(&request.name, "Name")?;

    let storage = service.storage();
    if storage.get_user_by_email(&email).await?.is_some() {
        return Err(ClassroomError::validation(EMAIL_EXISTS));
    }

    let user = User {
        id: service.ctx.ids.next_id(),
        email,
        password_hash: Some(hash_password(&request.password, &service.ctx.auth.argon2)?),
        name: request.name,
        role: request.role,
        section: request.section,
        roll_number: request.roll_number,
    };

    let user = match storage.create_user(user).await {
        Ok(user) => user,
        Err(e) if e.is_duplicate() => {
            warn!("Concurrent signup hit the unique email index: {}", e);
            return Err(ClassroomError::validation(EMAIL_EXISTS));
        }
        Err(e) => return Err(e),
    };

    info!("User {} signed up as {}", user.id, user.role);
    login_response(&user)
}
