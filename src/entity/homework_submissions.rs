//! 作业提交实体

use sea_orm::entity::prelude::*;

#[derive(Clone, Debug, PartialEq, DeriveEntityModel)]
#[sea_orm(table_name = "homework_submissions")]
pub struct Model {
    #[sea_orm(primary_key, auto_increment = false)]
    pub id: String,
    pub homework_id: String,
    pub class_id: String,
    pub user_id: String,
    #[sea_orm(column_type = "Text")]
    pub drive_link: String,
    pub submitted_on: i64,
    pub status: String,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {}

impl ActiveModelBehavior for ActiveModel {}

impl Model {
    pub fn into_submission(self) -> crate::models::submissions::entities::HomeworkSubmission {
        use crate::models::submissions::entities::{HomeworkSubmission, SubmissionStatus};

        HomeworkSubmission {
            id: self.id,
            homework_id: self.homework_id,
            class_id: self.class_id,
            user_id: self.user_id,
            drive_link: self.drive_link,
            submitted_on: super::from_millis(self.submitted_on),
            status: self.status.parse().unwrap_or(SubmissionStatus::Submitted),
        }
    }
}
