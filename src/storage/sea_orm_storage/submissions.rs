//! 作业提交存储操作

use super::{SeaOrmStorage, db_error};
use crate::entity::homework_submissions::{ActiveModel, Column, Entity as Submissions};
use crate::errors::Result;
use crate::models::submissions::entities::HomeworkSubmission;
use sea_orm::{ActiveModelTrait, ColumnTrait, EntityTrait, QueryFilter, QueryOrder, Set};

fn to_active_model(submission: HomeworkSubmission) -> ActiveModel {
    ActiveModel {
        id: Set(submission.id),
        homework_id: Set(submission.homework_id),
        class_id: Set(submission.class_id),
        user_id: Set(submission.user_id),
        drive_link: Set(submission.drive_link),
        submitted_on: Set(submission.submitted_on.timestamp_millis()),
        status: Set(submission.status.to_string()),
    }
}

impl SeaOrmStorage {
    /// 创建提交，(homework_id, user_id) 唯一
    pub async fn create_submission_impl(
        &self,
        submission: HomeworkSubmission,
    ) -> Result<HomeworkSubmission> {
        let result = to_active_model(submission)
            .insert(&self.db)
            .await
            .map_err(db_error("提交作业失败"))?;

        Ok(result.into_submission())
    }

    pub async fn get_submission_impl(
        &self,
        homework_id: &str,
        user_id: &str,
    ) -> Result<Option<HomeworkSubmission>> {
        let result = Submissions::find()
            .filter(Column::HomeworkId.eq(homework_id))
            .filter(Column::UserId.eq(user_id))
            .one(&self.db)
            .await
            .map_err(db_error("查询提交失败"))?;

        Ok(result.map(|m| m.into_submission()))
    }

    /// 按 ID 写回
    pub async fn update_submission_impl(
        &self,
        submission: HomeworkSubmission,
    ) -> Result<HomeworkSubmission> {
        let result = to_active_model(submission)
            .update(&self.db)
            .await
            .map_err(db_error("更新提交失败"))?;

        Ok(result.into_submission())
    }

    pub async fn list_submissions_by_class_impl(
        &self,
        class_id: &str,
    ) -> Result<Vec<HomeworkSubmission>> {
        let result = Submissions::find()
            .filter(Column::ClassId.eq(class_id))
            .order_by_asc(Column::SubmittedOn)
            .all(&self.db)
            .await
            .map_err(db_error("查询提交列表失败"))?;

        Ok(result.into_iter().map(|m| m.into_submission()).collect())
    }

    pub async fn list_submissions_by_class_and_user_impl(
        &self,
        class_id: &str,
        user_id: &str,
    ) -> Result<Vec<HomeworkSubmission>> {
        let result = Submissions::find()
            .filter(Column::ClassId.eq(class_id))
            .filter(Column::UserId.eq(user_id))
            .order_by_asc(Column::SubmittedOn)
            .all(&self.db)
            .await
            .map_err(db_error("查询提交列表失败"))?;

        Ok(result.into_iter().map(|m| m.into_submission()).collect())
    }

    pub async fn delete_submissions_by_class_impl(&self, class_id: &str) -> Result<u64> {
        let result = Submissions::delete_many()
            .filter(Column::ClassId.eq(class_id))
            .exec(&self.db)
            .await
            .map_err(db_error("删除班级提交失败"))?;

        Ok(result.rows_affected)
    }
}
