use serde::Serialize;
use ts_rs::TS;

use crate::models::users::entities::UserRole;

// 登录 / 注册成功后的响应
#[derive(Debug, Serialize, TS)]
#[serde(rename_all = "camelCase")]
#[ts(export, export_to = "auth.ts")]
pub struct LoginResponse {
    pub user_id: String,
    pub role: UserRole,
    pub token: String,
}

#[derive(Debug, Serialize, TS)]
#[serde(rename_all = "camelCase")]
#[ts(export, export_to = "auth.ts")]
pub struct ResetLinkResponse {
    pub reset_link: String,
}
