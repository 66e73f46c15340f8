use super::UserService;
use crate::errors::{ClassroomError, Result};
use crate::models::users::entities::User;

pub async fn get_user(service: &UserService, user_id: &str) -> Result<User> {
    service
        .storage()
        .get_user_by_id(user_id)
        .await?
        .ok_or_else(|| ClassroomError::not_found("User not found."))
}
