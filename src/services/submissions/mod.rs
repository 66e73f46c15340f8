pub mod list;
pub mod submit;
pub mod update;

#[cfg(test)]
mod tests;

use std::sync::Arc;

use crate::errors::{ClassroomError, Result};
use crate::models::homeworks::entities::Homework;
use crate::models::submissions::{entities::HomeworkSubmission, requests::SubmitHomeworkRequest};
use crate::services::context::ServiceContext;
use crate::storage::Storage;
use crate::utils::validate::require_non_blank;

/// 作业提交管理
pub struct SubmissionService {
    ctx: ServiceContext,
}

impl SubmissionService {
    pub fn new(ctx: ServiceContext) -> Self {
        Self { ctx }
    }

    pub(crate) fn storage(&self) -> &Arc<dyn Storage> {
        &self.ctx.storage
    }

    // 首次提交作业
    pub async fn submit_homework(
        &self,
        submission: SubmitHomeworkRequest,
    ) -> Result<HomeworkSubmission> {
        submit::submit_homework(self, submission).await
    }

    // 重新上传，覆盖已有提交
    pub async fn update_submission(
        &self,
        submission: SubmitHomeworkRequest,
    ) -> Result<HomeworkSubmission> {
        update::update_submission(self, submission).await
    }

    pub async fn list_submissions_by_class(
        &self,
        class_id: &str,
    ) -> Result<Vec<HomeworkSubmission>> {
        list::list_submissions_by_class(self, class_id).await
    }

    pub async fn list_submissions_by_class_and_user(
        &self,
        class_id: &str,
        user_id: &str,
    ) -> Result<Vec<HomeworkSubmission>> {
        list::list_submissions_by_class_and_user(self, class_id, user_id).await
    }

    /// 提交与重新上传共用的校验，返回对应作业
    ///
    /// 截止时间是开区间：`now >= due_date` 即视为逾期。
    pub(crate) async fn check_submission(
        &self,
        submission: &SubmitHomeworkRequest,
        cutoff_message: &'static str,
    ) -> Result<Homework> {
        require_non_blank(&submission.homework_id, "Homework ID")?;
        require_non_blank(&submission.class_id, "Class ID")?;
        require_non_blank(&submission.user_id, "User ID")?;
        require_non_blank(&submission.drive_link, "Google Drive link")?;

        let homework = self
            .storage()
            .get_homework_by_id(&submission.homework_id)
            .await?
            .ok_or_else(|| ClassroomError::not_found("Homework not found."))?;

        if homework.class_id != submission.class_id {
            return Err(ClassroomError::validation(
                "Class ID does not match the homework's class.",
            ));
        }
        if self.ctx.clock.now() >= homework.due_date {
            return Err(ClassroomError::validation(cutoff_message));
        }
        Ok(homework)
    }
}
