pub mod google;
pub mod login;
pub mod reset;
pub mod signup;


use std::sync::Arc;

use crate::errors::Result;
use crate::models::auth::{
    requests::{LoginRequest, ResetPasswordRequest, SignupRequest},
    responses::{LoginResponse, ResetLinkResponse},
};
use crate::models::users::entities::User;
use crate::services::context::ServiceContext;
use crate::storage::Storage;
use crate::utils::jwt::JwtUtils;

/// 注册、登录与密码重置
pub struct AuthService {
    ctx: ServiceContext,
}

impl AuthService {
    pub fn new(ctx: ServiceContext) -> Self {
        Self { ctx }
    }

    pub(crate) fn storage(&self) -> &Arc<dyn Storage> {
        &self.ctx.storage
    }

    pub async fn signup(&self, request: SignupRequest) -> Result<LoginResponse> {
        signup::signup(self, request).await
    }

    pub async fn login(&self, request: LoginRequest) -> Result<LoginResponse> {
        login::login(self, request).await
    }

    pub async fn google_login(&self, id_token: &str) -> Result<LoginResponse> {
        google::google_login(self, id_token).await
    }

    pub async fn google_signup(&self, id_token: &str, role: Option<&str>) -> Result<LoginResponse> {
        google::google_signup(self, id_token, role).await
    }

    // 生成密码重置链接
    pub async fn forgot_password(&self, email: &str) -> Result<ResetLinkResponse> {
        reset::forgot_password(self, email).await
    }

    pub async fn reset_password(&self, request: ResetPasswordRequest) -> Result<()> {
        reset::reset_password(self, request).await
    }
}

/// 为已认证用户签发访问令牌
pub(crate) fn login_response(user: &User) -> Result<LoginResponse> {
    let token = JwtUtils::generate_access_token(&user.id, &user.role.to_string())?;
    Ok(LoginResponse {
        user_id: user.id.clone(),
        role: user.role,
        token,
    })
}
