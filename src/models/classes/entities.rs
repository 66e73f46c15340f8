use serde::{Deserialize, Serialize};
use ts_rs::TS;

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, TS)]
#[serde(rename_all = "camelCase")]
#[ts(export, export_to = "class.ts")]
pub struct Class {
    // 班级ID（由调用方提供）
    pub class_id: String,
    // 8 位大写字母数字邀请码
    pub class_code: String,
    pub subject_code: String,
    pub section: String,
    pub subject: String,
    pub teacher_name: String,
    // 创建者（班级所有者）
    pub user_id: String,
    // 创建时间
    pub created_at: chrono::DateTime<chrono::Utc>,
}

// 班级列表类型，缺省为 created
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum ClassListType {
    #[default]
    Created,
    Joined,
}

// 大小写不敏感
impl std::str::FromStr for ClassListType {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        if s.eq_ignore_ascii_case("created") {
            Ok(ClassListType::Created)
        } else if s.eq_ignore_ascii_case("joined") {
            Ok(ClassListType::Joined)
        } else {
            Err("Invalid type parameter. Must be 'created' or 'joined'.".to_string())
        }
    }
}
