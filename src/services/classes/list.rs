use tracing::debug;

use super::ClassService;
use crate::errors::{ClassroomError, Result};
use crate::models::classes::entities::{Class, ClassListType};

pub async fn list_classes(
    service: &ClassService,
    user_id: Option<&str>,
    list_type: Option<&str>,
) -> Result<Vec<Class>> {
    let user_id = match user_id.map(str::trim) {
        Some(id) if !id.is_empty() => id,
        _ => return Err(ClassroomError::validation("User ID is required.")),
    };
    let list_type = match list_type {
        Some(t) => t.parse::<ClassListType>().map_err(ClassroomError::validation)?,
        None => ClassListType::default(),
    };

    let storage = service.storage();
    match list_type {
        ClassListType::Created => {
            debug!("Listing classes created by {}", user_id);
            storage.list_classes_by_owner(user_id).await
        }
        ClassListType::Joined => {
            debug!("Listing classes joined by {}", user_id);
            let class_ids: Vec<String> = storage
                .list_memberships_by_user(user_id)
                .await?
                .into_iter()
                .map(|m| m.class_id)
                .collect();
            // 排除自己创建的班级
            let classes = storage.list_classes_by_ids(&class_ids).await?;
            Ok(classes.into_iter().filter(|c| c.user_id != user_id).collect())
        }
    }
}
