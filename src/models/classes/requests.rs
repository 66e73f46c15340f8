use serde::Deserialize;
use ts_rs::TS;

// 创建班级请求
#[derive(Debug, Clone, Deserialize, TS)]
#[serde(rename_all = "camelCase")]
#[ts(export, export_to = "class.ts")]
pub struct CreateClassRequest {
    pub class_id: String,
    pub class_code: String,
    pub subject_code: String,
    pub section: String,
    pub subject: String,
    pub teacher_name: String,
    pub user_id: String,
}

// 班级列表查询参数
#[derive(Debug, Deserialize, TS)]
#[serde(rename_all = "camelCase")]
#[ts(export, export_to = "class.ts")]
pub struct ClassListParams {
    pub user_id: Option<String>,
    #[serde(rename = "type")]
    pub list_type: Option<String>,
}

// 删除班级的查询参数
#[derive(Debug, Deserialize, TS)]
#[serde(rename_all = "camelCase")]
#[ts(export, export_to = "class.ts")]
pub struct DeleteClassParams {
    pub user_id: Option<String>,
}
