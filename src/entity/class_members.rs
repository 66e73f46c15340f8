//! 班级成员实体

use sea_orm::entity::prelude::*;

#[derive(Clone, Debug, PartialEq, DeriveEntityModel)]
#[sea_orm(table_name = "class_members")]
pub struct Model {
    #[sea_orm(primary_key, auto_increment = false)]
    pub id: String,
    pub class_id: String,
    pub user_id: String,
    pub joined_at: i64,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {}

impl ActiveModelBehavior for ActiveModel {}

impl Model {
    pub fn into_class_member(self) -> crate::models::class_members::entities::ClassMember {
        use crate::models::class_members::entities::ClassMember;

        ClassMember {
            id: self.id,
            class_id: self.class_id,
            user_id: self.user_id,
            joined_at: super::from_millis(self.joined_at),
        }
    }
}
