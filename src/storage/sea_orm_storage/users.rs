//! 用户存储操作

use super::{SeaOrmStorage, db_error};
use crate::entity::users::{ActiveModel, Column, Entity as Users};
use crate::errors::Result;
use crate::models::users::entities::User;
use sea_orm::{ActiveModelTrait, ColumnTrait, EntityTrait, QueryFilter, Set};

fn to_active_model(user: User) -> ActiveModel {
    ActiveModel {
        id: Set(user.id),
        email: Set(user.email),
        password_hash: Set(user.password_hash),
        name: Set(user.name),
        role: Set(user.role.to_string()),
        section: Set(user.section),
        roll_number: Set(user.roll_number),
    }
}

impl SeaOrmStorage {
    /// 创建用户
    pub async fn create_user_impl(&self, user: User) -> Result<User> {
        let result = to_active_model(user)
            .insert(&self.db)
            .await
            .map_err(db_error("创建用户失败"))?;

        Ok(result.into_user())
    }

    /// 通过 ID 获取用户
    pub async fn get_user_by_id_impl(&self, id: &str) -> Result<Option<User>> {
        let result = Users::find_by_id(id.to_string())
            .one(&self.db)
            .await
            .map_err(db_error("查询用户失败"))?;

        Ok(result.map(|m| m.into_user()))
    }

    /// 通过邮箱获取用户
    pub async fn get_user_by_email_impl(&self, email: &str) -> Result<Option<User>> {
        let result = Users::find()
            .filter(Column::Email.eq(email))
            .one(&self.db)
            .await
            .map_err(db_error("查询用户失败"))?;

        Ok(result.map(|m| m.into_user()))
    }

    /// 批量获取用户
    pub async fn list_users_by_ids_impl(&self, ids: &[String]) -> Result<Vec<User>> {
        if ids.is_empty() {
            return Ok(Vec::new());
        }

        let result = Users::find()
            .filter(Column::Id.is_in(ids.iter().cloned()))
            .all(&self.db)
            .await
            .map_err(db_error("查询用户列表失败"))?;

        Ok(result.into_iter().map(|m| m.into_user()).collect())
    }

    /// 写回用户
    pub async fn update_user_impl(&self, user: User) -> Result<User> {
        let result = to_active_model(user)
            .update(&self.db)
            .await
            .map_err(db_error("更新用户失败"))?;

        Ok(result.into_user())
    }
}
