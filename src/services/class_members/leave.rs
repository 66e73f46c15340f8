use tracing::info;

use super::ClassMemberService;
use crate::errors::{ClassroomError, Result};
use crate::services::policy;

pub async fn leave_class(service: &ClassMemberService, class_id: &str, user_id: &str) -> Result<()> {
    let storage = service.storage();

    let class = storage
        .get_class_by_id(class_id)
        .await?
        .ok_or_else(|| ClassroomError::not_found("Class not found."))?;

    policy::can_leave_class(user_id, &class).validate()?;

    if !storage.delete_class_member(class_id, user_id).await? {
        return Err(ClassroomError::validation("You are not a member of this class."));
    }

    info!("User {} left class {}", user_id, class_id);
    Ok(())
}
