use serde::{Deserialize, Serialize};
use ts_rs::TS;

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, TS)]
#[serde(rename_all = "camelCase")]
#[ts(export, export_to = "homework.ts")]
pub struct Homework {
    // 唯一 ID
    pub id: String,
    // 关联的班级 ID
    pub class_id: String,
    // 作业标题
    pub title: String,
    // 作业描述
    pub description: String,
    // 布置时间（服务端设置）
    pub assigned_date: chrono::DateTime<chrono::Utc>,
    // 作业截止时间
    pub due_date: chrono::DateTime<chrono::Utc>,
    // 创建者 ID
    pub created_by: String,
}
