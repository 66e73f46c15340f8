use tracing::{info, warn};

use super::ClassMemberService;
use crate::errors::{ClassroomError, Result};
use crate::models::class_members::entities::ClassMember;
use crate::models::classes::entities::Class;
use crate::services::policy;
use crate::utils::validate::require_non_blank;

const ALREADY_MEMBER: &str = "You are already a member of this class.";

pub async fn join_class(
    service: &ClassMemberService,
    class_code: &str,
    user_id: &str,
) -> Result<Class> {
    require_non_blank(class_code, "Class code")?;
    require_non_blank(user_id, "User ID")?;

    let storage = service.storage();
    let class = storage
        .get_class_by_code(class_code)
        .await?
        .ok_or_else(|| ClassroomError::not_found("Class not found."))?;

    policy::can_join_class(user_id, &class).validate()?;

    if storage
        .get_class_member(&class.class_id, user_id)
        .await?
        .is_some()
    {
        return Err(ClassroomError::validation(ALREADY_MEMBER));
    }

    let member = ClassMember {
        id: service.ctx.ids.next_id(),
        class_id: class.class_id.clone(),
        user_id: user_id.to_string(),
        joined_at: service.ctx.clock.now(),
    };

    match storage.create_class_member(member).await {
        Ok(_) => {
            info!("User {} joined class {}", user_id, class.class_id);
            Ok(class)
        }
        Err(e) if e.is_duplicate() => {
            warn!(
                "Concurrent join of class {} by user {}: {}",
                class.class_id, user_id, e
            );
            Err(ClassroomError::validation(ALREADY_MEMBER))
        }
        Err(e) => Err(e),
    }
}
