//! 班级成员存储操作

use super::{SeaOrmStorage, db_error};
use crate::entity::class_members::{ActiveModel, Column, Entity as ClassMembers};
use crate::errors::Result;
use crate::models::class_members::entities::ClassMember;
use sea_orm::{ActiveModelTrait, ColumnTrait, EntityTrait, QueryFilter, QueryOrder, Set};

impl SeaOrmStorage {
    /// 加入班级，(class_id, user_id) 唯一
    pub async fn create_class_member_impl(&self, member: ClassMember) -> Result<ClassMember> {
        let model = ActiveModel {
            id: Set(member.id),
            class_id: Set(member.class_id),
            user_id: Set(member.user_id),
            joined_at: Set(member.joined_at.timestamp_millis()),
        };

        let result = model
            .insert(&self.db)
            .await
            .map_err(db_error("加入班级失败"))?;

        Ok(result.into_class_member())
    }

    pub async fn get_class_member_impl(
        &self,
        class_id: &str,
        user_id: &str,
    ) -> Result<Option<ClassMember>> {
        let result = ClassMembers::find()
            .filter(Column::ClassId.eq(class_id))
            .filter(Column::UserId.eq(user_id))
            .one(&self.db)
            .await
            .map_err(db_error("查询班级成员失败"))?;

        Ok(result.map(|m| m.into_class_member()))
    }

    pub async fn delete_class_member_impl(&self, class_id: &str, user_id: &str) -> Result<bool> {
        let result = ClassMembers::delete_many()
            .filter(Column::ClassId.eq(class_id))
            .filter(Column::UserId.eq(user_id))
            .exec(&self.db)
            .await
            .map_err(db_error("退出班级失败"))?;

        Ok(result.rows_affected > 0)
    }

    pub async fn list_class_members_impl(&self, class_id: &str) -> Result<Vec<ClassMember>> {
        let result = ClassMembers::find()
            .filter(Column::ClassId.eq(class_id))
            .order_by_asc(Column::JoinedAt)
            .all(&self.db)
            .await
            .map_err(db_error("查询班级成员失败"))?;

        Ok(result.into_iter().map(|m| m.into_class_member()).collect())
    }

    pub async fn list_memberships_by_user_impl(&self, user_id: &str) -> Result<Vec<ClassMember>> {
        let result = ClassMembers::find()
            .filter(Column::UserId.eq(user_id))
            .order_by_asc(Column::JoinedAt)
            .all(&self.db)
            .await
            .map_err(db_error("查询用户班级失败"))?;

        Ok(result.into_iter().map(|m| m.into_class_member()).collect())
    }

    pub async fn delete_class_members_by_class_impl(&self, class_id: &str) -> Result<u64> {
        let result = ClassMembers::delete_many()
            .filter(Column::ClassId.eq(class_id))
            .exec(&self.db)
            .await
            .map_err(db_error("删除班级成员失败"))?;

        Ok(result.rows_affected)
    }
}
