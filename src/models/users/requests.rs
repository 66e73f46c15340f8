use serde::Deserialize;
use ts_rs::TS;

// 用户资料更新请求，缺省字段保持不变
#[derive(Debug, Default, Deserialize, TS)]
#[serde(rename_all = "camelCase")]
#[ts(export, export_to = "user.ts")]
pub struct UpdateUserRequest {
    pub name: Option<String>,
    pub section: Option<String>,
    pub roll_number: Option<i32>,
    pub password: Option<String>,
}
