//! 考勤实体
//!
//! 条目列表以 JSON 文本存储，保持提交顺序。

use sea_orm::entity::prelude::*;

#[derive(Clone, Debug, PartialEq, DeriveEntityModel)]
#[sea_orm(table_name = "attendance")]
pub struct Model {
    #[sea_orm(primary_key, auto_increment = false)]
    pub id: String,
    pub class_id: String,
    pub date: String,
    #[sea_orm(column_type = "Text")]
    pub entries: String,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {}

impl ActiveModelBehavior for ActiveModel {}

impl Model {
    pub fn into_attendance(self) -> crate::errors::Result<crate::models::attendance::entities::Attendance> {
        use crate::models::attendance::entities::Attendance;

        Ok(Attendance {
            attendance: serde_json::from_str(&self.entries)?,
            id: self.id,
            class_id: self.class_id,
            date: self.date,
        })
    }
}
