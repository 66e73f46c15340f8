use tracing::debug;

use super::AttendanceService;
use crate::errors::Result;
use crate::models::attendance::entities::Attendance;
use crate::utils::validate::{parse_date, require_non_blank};

pub async fn get_attendance_for_date(
    service: &AttendanceService,
    class_id: &str,
    date: &str,
) -> Result<Vec<Attendance>> {
    require_non_blank(class_id, "Class ID")?;
    parse_date(date)?;
    service.storage().list_attendance_by_date(class_id, date).await
}

pub async fn get_attendance_for_range(
    service: &AttendanceService,
    class_id: &str,
    start_date: &str,
    end_date: &str,
) -> Result<Vec<Attendance>> {
    require_non_blank(class_id, "Class ID")?;
    // 固定宽度的日期字符串可以直接按字典序比较
    parse_date(start_date)?;
    parse_date(end_date)?;

    let records = service
        .storage()
        .list_attendance_in_range(class_id, start_date, end_date)
        .await?;
    debug!(
        "Found {} attendance records for class {} from {} to {}",
        records.len(),
        class_id,
        start_date,
        end_date
    );
    Ok(records)
}
