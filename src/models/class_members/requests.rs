use serde::Deserialize;
use ts_rs::TS;

// 通过邀请码加入班级
#[derive(Debug, Deserialize, TS)]
#[serde(rename_all = "camelCase")]
#[ts(export, export_to = "class_member.ts")]
pub struct JoinClassRequest {
    pub class_code: String,
    pub user_id: String,
}

// 退出班级
#[derive(Debug, Deserialize, TS)]
#[serde(rename_all = "camelCase")]
#[ts(export, export_to = "class_member.ts")]
pub struct LeaveClassRequest {
    pub class_id: String,
    pub user_id: String,
}
