use tracing::{info, warn};

use super::ClassService;
use crate::errors::{ClassroomError, Result};
use crate::models::classes::{entities::Class, requests::CreateClassRequest};
use crate::services::policy;
use crate::utils::validate::{require_non_blank, validate_class_code};

const DUPLICATE_ID: &str = "Class with this ID already exists.";
const DUPLICATE_CODE: &str = "Class with this code already exists.";

pub async fn create_class(
    service: &ClassService,
    actor_id: &str,
    class_data: CreateClassRequest,
) -> Result<Class> {
    let storage = service.storage();

    require_non_blank(&class_data.class_id, "Class ID")?;
    require_non_blank(&class_data.subject_code, "Subject code")?;
    require_non_blank(&class_data.section, "Section")?;
    require_non_blank(&class_data.subject, "Subject")?;
    require_non_blank(&class_data.teacher_name, "Teacher name")?;
    require_non_blank(&class_data.user_id, "User ID")?;

    // 权限校验
    let actor = storage
        .get_user_by_id(actor_id)
        .await?
        .ok_or_else(|| ClassroomError::not_found("User not found."))?;
    if let Err(e) = policy::can_create_class(&actor).authorize() {
        warn!("User {} is not allowed to create a class (role {})", actor_id, actor.role);
        return Err(e);
    }
    if class_data.user_id != actor.id {
        return Err(ClassroomError::authorization(
            "You cannot create a class on behalf of another user.",
        ));
    }

    if storage.get_class_by_id(&class_data.class_id).await?.is_some() {
        return Err(ClassroomError::validation(DUPLICATE_ID));
    }
    validate_class_code(&class_data.class_code)?;
    if storage
        .get_class_by_code(&class_data.class_code)
        .await?
        .is_some()
    {
        return Err(ClassroomError::validation(DUPLICATE_CODE));
    }

    let class = Class {
        class_id: class_data.class_id,
        class_code: class_data.class_code,
        subject_code: class_data.subject_code,
        section: class_data.section,
        subject: class_data.subject,
        teacher_name: class_data.teacher_name,
        user_id: class_data.user_id,
        created_at: service.ctx.clock.now(),
    };

    match storage.create_class(class.clone()).await {
        Ok(created) => {
            info!(
                "Class {} ({}) created by {}",
                created.class_id, created.class_code, created.user_id
            );
            Ok(created)
        }
        // 并发创建时由唯一索引兜底
        Err(e) if e.is_duplicate() => {
            warn!("Class {} hit a unique index on insert: {}", class.class_id, e);
            if storage.get_class_by_id(&class.class_id).await?.is_some() {
                Err(ClassroomError::validation(DUPLICATE_ID))
            } else {
                Err(ClassroomError::validation(DUPLICATE_CODE))
            }
        }
        Err(e) => Err(e),
    }
}
