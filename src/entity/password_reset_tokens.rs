//! 密码重置令牌实体

use sea_orm::entity::prelude::*;

#[derive(Clone, Debug, PartialEq, DeriveEntityModel)]
#[sea_orm(table_name = "password_reset_tokens")]
pub struct Model {
    #[sea_orm(primary_key, auto_increment = false)]
    pub token: String,
    #[sea_orm(unique)]
    pub email: String,
    pub expiry_date: i64,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {}

impl ActiveModelBehavior for ActiveModel {}

impl Model {
    pub fn into_reset_token(self) -> crate::models::auth::entities::PasswordResetToken {
        use crate::models::auth::entities::PasswordResetToken;

        PasswordResetToken {
            token: self.token,
            email: self.email,
            expiry_date: super::from_millis(self.expiry_date),
        }
    }
}
