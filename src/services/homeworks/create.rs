use chrono::SubsecRound;
use tracing::info;

use super::HomeworkService;
use crate::errors::{ClassroomError, Result};
use crate::models::homeworks::{entities::Homework, requests::CreateHomeworkRequest};
use crate::utils::validate::require_non_blank;

pub async fn create_homework(
    service: &HomeworkService,
    homework_data: CreateHomeworkRequest,
) -> Result<Homework> {
    require_non_blank(&homework_data.class_id, "Class ID")?;
    require_non_blank(&homework_data.title, "Title")?;
    require_non_blank(&homework_data.description, "Description")?;
    require_non_blank(&homework_data.created_by, "Created by")?;
    // 不带偏移的截止时间按业务时区解释，精度统一到毫秒与存储一致
    let due_date = homework_data
        .due_date
        .ok_or_else(|| ClassroomError::validation("Due date is required."))?
        .resolve(service.ctx.clock.offset())
        .trunc_subsecs(3);

    let storage = service.storage();
    if storage
        .get_class_by_id(&homework_data.class_id)
        .await?
        .is_none()
    {
        return Err(ClassroomError::not_found("Class not found."));
    }

    let now = service.ctx.clock.now();
    if due_date <= now {
        return Err(ClassroomError::validation("Due date must be in the future."));
    }

    let homework = storage
        .create_homework(Homework {
            id: service.ctx.ids.next_id(),
            class_id: homework_data.class_id,
            title: homework_data.title,
            description: homework_data.description,
            assigned_date: now,
            due_date,
            created_by: homework_data.created_by,
        })
        .await?;

    info!(
        "Homework {} created in class {} by {}",
        homework.id, homework.class_id, homework.created_by
    );
    Ok(homework)
}
