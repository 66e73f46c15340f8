use tracing::{error, info};

use super::ClassService;
use crate::errors::{ClassroomError, Result};
use crate::services::policy;

/// 级联删除
///
/// 各步骤是独立的存储调用，没有回滚；依赖数据删除失败只记录日志并继续，
/// 删除班级本身失败才返回错误。作业与公告不在级联范围内。
pub async fn delete_class(service: &ClassService, class_id: &str, requester_id: &str) -> Result<()> {
    let storage = service.storage();

    let class = storage
        .get_class_by_id(class_id)
        .await?
        .ok_or_else(|| ClassroomError::not_found("Class not found."))?;

    // 权限校验在级联之前
    policy::owns_class(requester_id, &class).authorize()?;

    match storage.delete_class_members_by_class(class_id).await {
        Ok(n) => info!("Deleted {} member rows of class {}", n, class_id),
        Err(e) => error!("Failed to delete members of class {}: {}", class_id, e),
    }
    match storage.delete_attendance_by_class(class_id).await {
        Ok(n) => info!("Deleted {} attendance rows of class {}", n, class_id),
        Err(e) => error!("Failed to delete attendance of class {}: {}", class_id, e),
    }
    match storage.delete_submissions_by_class(class_id).await {
        Ok(n) => info!("Deleted {} submissions of class {}", n, class_id),
        Err(e) => error!("Failed to delete submissions of class {}: {}", class_id, e),
    }

    if !storage.delete_class(class_id).await? {
        return Err(ClassroomError::not_found("Class not found."));
    }

    info!("Class {} deleted by {}", class_id, requester_id);
    Ok(())
}
