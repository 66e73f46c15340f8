use serde::{Deserialize, Serialize};
use ts_rs::TS;

// 成员关系记录，每个 (班级, 用户) 唯一，且不包含班级创建者
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, TS)]
#[serde(rename_all = "camelCase")]
#[ts(export, export_to = "class_member.ts")]
pub struct ClassMember {
    pub id: String,
    pub class_id: String,
    pub user_id: String,
    pub joined_at: chrono::DateTime<chrono::Utc>,
}
