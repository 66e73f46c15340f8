pub mod query;
pub mod submit;


use std::sync::Arc;

use crate::errors::Result;
use crate::models::attendance::{entities::Attendance, requests::SubmitAttendanceRequest};
use crate::services::context::ServiceContext;
use crate::storage::Storage;

/// 考勤管理：每个班级每天一条记录，只能提交当天
pub struct AttendanceService {
    ctx: ServiceContext,
}

impl AttendanceService {
    pub fn new(ctx: ServiceContext) -> Self {
        Self { ctx }
    }

    pub(crate) fn storage(&self) -> &Arc<dyn Storage> {
        &self.ctx.storage
    }

    pub async fn submit_attendance(&self, request: SubmitAttendanceRequest) -> Result<Attendance> {
        submit::submit_attendance(self, request).await
    }

    pub async fn get_attendance_for_date(
        &self,
        class_id: &str,
        date: &str,
    ) -> Result<Vec<Attendance>> {
        query::get_attendance_for_date(self, class_id, date).await
    }

    // 闭区间 [start_date, end_date]
    pub async fn get_attendance_for_range(
        &self,
        class_id: &str,
        start_date: &str,
        end_date: &str,
    ) -> Result<Vec<Attendance>> {
        query::get_attendance_for_range(self, class_id, start_date, end_date).await
    }
}
