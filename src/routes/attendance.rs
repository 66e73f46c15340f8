use actix_web::{HttpResponse, Result as ActixResult, web};

use crate::models::ApiResponse;
use crate::models::attendance::requests::{AttendanceRangeParams, SubmitAttendanceRequest};
use crate::services::{AttendanceService, ClassMemberService, ServiceContext};

pub async fn submit_attendance(
    ctx: web::Data<ServiceContext>,
    attendance: web::Json<SubmitAttendanceRequest>,
) -> ActixResult<HttpResponse> {
    let record = AttendanceService::new(ctx.get_ref().clone())
        .submit_attendance(attendance.into_inner())
        .await?;
    Ok(ApiResponse::created(record, "Attendance submitted successfully"))
}

pub async fn get_attendance_for_date(
    ctx: web::Data<ServiceContext>,
    path: web::Path<(String, String)>,
) -> ActixResult<HttpResponse> {
    let (class_id, date) = path.into_inner();
    let records = AttendanceService::new(ctx.get_ref().clone())
        .get_attendance_for_date(&class_id, &date)
        .await?;
    Ok(ApiResponse::ok(records, "Attendance retrieved successfully"))
}

pub async fn get_attendance_for_range(
    ctx: web::Data<ServiceContext>,
    class_id: web::Path<String>,
    query: web::Query<AttendanceRangeParams>,
) -> ActixResult<HttpResponse> {
    let records = AttendanceService::new(ctx.get_ref().clone())
        .get_attendance_for_range(&class_id, &query.start_date, &query.end_date)
        .await?;
    Ok(ApiResponse::ok(records, "Attendance retrieved successfully"))
}

// 点名用的学生名单
pub async fn list_students(
    ctx: web::Data<ServiceContext>,
    class_id: web::Path<String>,
) -> ActixResult<HttpResponse> {
    let students = ClassMemberService::new(ctx.get_ref().clone())
        .list_students(&class_id)
        .await?;
    let message = if students.is_empty() {
        "No students found for the class."
    } else {
        "Students retrieved successfully"
    };
    Ok(ApiResponse::ok(students, message))
}

// 配置路由
pub fn configure_attendance_routes(cfg: &mut web::ServiceConfig) {
    cfg.service(
        web::scope("/api/attendance")
            .service(web::resource("").route(web::post().to(submit_attendance)))
            .service(
                web::resource("/class/{class_id}/date/{date}")
                    .route(web::get().to(get_attendance_for_date)),
            )
            .service(
                web::resource("/class/{class_id}/range")
                    .route(web::get().to(get_attendance_for_range)),
            )
            .service(web::resource("/{class_id}/students").route(web::get().to(list_students))),
    );
}
