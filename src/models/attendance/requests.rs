use serde::Deserialize;
use ts_rs::TS;

use super::entities::AttendanceEntry;

#[derive(Debug, Clone, Default, Deserialize, TS)]
#[serde(rename_all = "camelCase")]
#[ts(export, export_to = "attendance.ts")]
pub struct SubmitAttendanceRequest {
    #[serde(default)]
    pub class_id: String,
    #[serde(default)]
    pub date: String,
    // 缺省与空列表区分开，缺省视为请求不完整
    #[serde(default)]
    pub attendance: Option<Vec<AttendanceEntry>>,
}

// 日期区间查询，两端均包含
#[derive(Debug, Deserialize, TS)]
#[serde(rename_all = "camelCase")]
#[ts(export, export_to = "attendance.ts")]
pub struct AttendanceRangeParams {
    pub start_date: String,
    pub end_date: String,
}
