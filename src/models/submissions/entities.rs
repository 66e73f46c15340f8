use serde::{Deserialize, Serialize};
use ts_rs::TS;

// 提交状态，目前只有已提交一种
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, TS)]
#[serde(rename_all = "UPPERCASE")]
#[ts(export, export_to = "submission.ts")]
pub enum SubmissionStatus {
    Submitted,
}

impl SubmissionStatus {
    pub const SUBMITTED: &'static str = "SUBMITTED";
}

impl std::fmt::Display for SubmissionStatus {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            SubmissionStatus::Submitted => write!(f, "{}", SubmissionStatus::SUBMITTED),
        }
    }
}

impl std::str::FromStr for SubmissionStatus {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            SubmissionStatus::SUBMITTED => Ok(SubmissionStatus::Submitted),
            _ => Err(format!("Invalid submission status: {s}")),
        }
    }
}

// 作业提交，每个 (作业, 用户) 唯一
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, TS)]
#[serde(rename_all = "camelCase")]
#[ts(export, export_to = "submission.ts")]
pub struct HomeworkSubmission {
    pub id: String,
    pub homework_id: String,
    pub class_id: String,
    pub user_id: String,
    pub drive_link: String,
    pub submitted_on: chrono::DateTime<chrono::Utc>,
    pub status: SubmissionStatus,
}
