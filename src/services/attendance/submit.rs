use tracing::{info, warn};

use super::AttendanceService;
use crate::errors::{ClassroomError, Result};
use crate::models::attendance::{entities::Attendance, requests::SubmitAttendanceRequest};
use crate::utils::validate::{parse_date, require_non_blank};

const ALREADY_SUBMITTED: &str = "Attendance already submitted for this class on this date.";

pub async fn submit_attendance(
    service: &AttendanceService,
    request: SubmitAttendanceRequest,
) -> Result<Attendance> {
    require_non_blank(&request.class_id, "Class ID")?;
    let date = parse_date(&request.date)?;
    let entries = request
        .attendance
        .ok_or_else(|| ClassroomError::validation("Attendance list is required."))?;
    for entry in &entries {
        require_non_blank(&entry.user_id, "User ID")?;
    }

    let today = service.ctx.clock.today();
    if date != today {
        warn!(
            "Attendance for class {} rejected: date {} is not today ({})",
            request.class_id, request.date, today
        );
        return Err(ClassroomError::validation(format!(
            "Attendance can only be submitted for today ({}).",
            today.format("%Y-%m-%d")
        )));
    }

    let storage = service.storage();
    if !storage
        .list_attendance_by_date(&request.class_id, &request.date)
        .await?
        .is_empty()
    {
        return Err(ClassroomError::validation(ALREADY_SUBMITTED));
    }

    let record = Attendance {
        id: service.ctx.ids.next_id(),
        class_id: request.class_id,
        date: request.date,
        attendance: entries,
    };

    match storage.create_attendance(record).await {
        Ok(saved) => {
            info!(
                "Attendance {} saved for class {} on {} ({} entries)",
                saved.id,
                saved.class_id,
                saved.date,
                saved.attendance.len()
            );
            Ok(saved)
        }
        Err(e) if e.is_duplicate() => {
            warn!("Concurrent attendance submission rejected: {}", e);
            Err(ClassroomError::validation(ALREADY_SUBMITTED))
        }
        Err(e) => Err(e),
    }
}
