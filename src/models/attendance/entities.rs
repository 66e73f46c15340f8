use serde::{Deserialize, Serialize};
use ts_rs::TS;

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, TS)]
#[serde(rename_all = "camelCase")]
#[ts(export, export_to = "attendance.ts")]
pub struct AttendanceEntry {
    pub user_id: String,
    pub present: bool,
}

// 某班级某一天的考勤，条目顺序与提交时一致
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, TS)]
#[serde(rename_all = "camelCase")]
#[ts(export, export_to = "attendance.ts")]
pub struct Attendance {
    pub id: String,
    pub class_id: String,
    // YYYY-MM-DD
    pub date: String,
    pub attendance: Vec<AttendanceEntry>,
}
