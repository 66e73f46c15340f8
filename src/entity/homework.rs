//! 作业实体

use sea_orm::entity::prelude::*;

#[derive(Clone, Debug, PartialEq, DeriveEntityModel)]
#[sea_orm(table_name = "homework")]
pub struct Model {
    #[sea_orm(primary_key, auto_increment = false)]
    pub id: String,
    pub class_id: String,
    pub title: String,
    #[sea_orm(column_type = "Text")]
    pub description: String,
    pub assigned_date: i64,
    pub due_date: i64,
    pub created_by: String,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {}

impl ActiveModelBehavior for ActiveModel {}

// 从数据库模型转换为业务模型
impl Model {
    pub fn into_homework(self) -> crate::models::homeworks::entities::Homework {
        use crate::models::homeworks::entities::Homework;

        Homework {
            id: self.id,
            class_id: self.class_id,
            title: self.title,
            description: self.description,
            assigned_date: super::from_millis(self.assigned_date),
            due_date: super::from_millis(self.due_date),
            created_by: self.created_by,
        }
    }
}
