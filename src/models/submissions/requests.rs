use serde::Deserialize;
use ts_rs::TS;

// 提交或重新上传作业
#[derive(Debug, Clone, Default, Deserialize, TS)]
#[serde(rename_all = "camelCase")]
#[ts(export, export_to = "submission.ts")]
pub struct SubmitHomeworkRequest {
    #[serde(default)]
    pub homework_id: String,
    #[serde(default)]
    pub class_id: String,
    #[serde(default)]
    pub user_id: String,
    #[serde(default)]
    pub drive_link: String,
}

// PUT /homework/submissions/{homeworkId}/{userId} 的请求体
#[derive(Debug, Clone, Default, Deserialize, TS)]
#[serde(rename_all = "camelCase")]
#[ts(export, export_to = "submission.ts")]
pub struct UpdateSubmissionRequest {
    #[serde(default)]
    pub class_id: String,
    #[serde(default)]
    pub drive_link: String,
}
