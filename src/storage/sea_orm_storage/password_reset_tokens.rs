//! 密码重置令牌存储操作

use super::{SeaOrmStorage, db_error};
use crate::entity::password_reset_tokens::{ActiveModel, Column, Entity as ResetTokens};
use crate::errors::Result;
use crate::models::auth::entities::PasswordResetToken;
use sea_orm::{ActiveModelTrait, ColumnTrait, EntityTrait, QueryFilter, Set};

impl SeaOrmStorage {
    /// 保存令牌，token 与 email 均唯一
    pub async fn create_reset_token_impl(
        &self,
        token: PasswordResetToken,
    ) -> Result<PasswordResetToken> {
        let model = ActiveModel {
            token: Set(token.token),
            email: Set(token.email),
            expiry_date: Set(token.expiry_date.timestamp_millis()),
        };

        let result = model
            .insert(&self.db)
            .await
            .map_err(db_error("保存重置令牌失败"))?;

        Ok(result.into_reset_token())
    }

    pub async fn get_reset_token_impl(&self, token: &str) -> Result<Option<PasswordResetToken>> {
        let result = ResetTokens::find_by_id(token.to_string())
            .one(&self.db)
            .await
            .map_err(db_error("查询重置令牌失败"))?;

        Ok(result.map(|m| m.into_reset_token()))
    }

    pub async fn delete_reset_tokens_by_email_impl(&self, email: &str) -> Result<u64> {
        let result = ResetTokens::delete_many()
            .filter(Column::Email.eq(email))
            .exec(&self.db)
            .await
            .map_err(db_error("删除重置令牌失败"))?;

        Ok(result.rows_affected)
    }

    pub async fn delete_reset_token_impl(&self, token: &str) -> Result<bool> {
        let result = ResetTokens::delete_by_id(token.to_string())
            .exec(&self.db)
            .await
            .map_err(db_error("删除重置令牌失败"))?;

        Ok(result.rows_affected > 0)
    }
}
