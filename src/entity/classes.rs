//! 班级实体

use sea_orm::entity::prelude::*;

#[derive(Clone, Debug, PartialEq, DeriveEntityModel)]
#[sea_orm(table_name = "classes")]
pub struct Model {
    #[sea_orm(primary_key, auto_increment = false)]
    pub class_id: String,
    #[sea_orm(unique)]
    pub class_code: String,
    pub subject_code: String,
    pub section: String,
    pub subject: String,
    pub teacher_name: String,
    pub user_id: String,
    pub created_at: i64,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {}

impl ActiveModelBehavior for ActiveModel {}

// 从数据库模型转换为业务模型
impl Model {
    pub fn into_class(self) -> crate::models::classes::entities::Class {
        use crate::models::classes::entities::Class;

        Class {
            class_id: self.class_id,
            class_code: self.class_code,
            subject_code: self.subject_code,
            section: self.section,
            subject: self.subject,
            teacher_name: self.teacher_name,
            user_id: self.user_id,
            created_at: super::from_millis(self.created_at),
        }
    }
}
