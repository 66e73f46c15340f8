use actix_web::{HttpRequest, web};

use crate::errors::ClassroomError;
use crate::utils::{json_error_handler, path_error_handler, query_error_handler};

pub mod announcements;

pub mod attendance;

pub mod auth;

pub mod classes;

pub mod homework;

pub use announcements::configure_announcement_routes;
pub use attendance::configure_attendance_routes;
pub use auth::configure_auth_routes;
pub use classes::configure_class_routes;
pub use homework::configure_homework_routes;

/// 注册全部 API 路由及参数错误处理器
pub fn configure_api(cfg: &mut web::ServiceConfig) {
    cfg.app_data(web::QueryConfig::default().error_handler(query_error_handler))
        .app_data(web::JsonConfig::default().error_handler(json_error_handler))
        .app_data(web::PathConfig::default().error_handler(path_error_handler))
        .configure(configure_auth_routes) // 认证与用户资料
        .configure(configure_class_routes) // 班级与成员
        .configure(configure_homework_routes) // 作业与提交
        .configure(configure_attendance_routes) // 考勤
        .configure(configure_announcement_routes); // 公告
}

/// 调用方通过 `userId` 请求头声明身份
pub const USER_ID_HEADER: &str = "userid";

pub(crate) fn header_user_id(req: &HttpRequest) -> Option<String> {
    req.headers()
        .get(USER_ID_HEADER)
        .and_then(|value| value.to_str().ok())
        .map(str::trim)
        .filter(|value| !value.is_empty())
        .map(str::to_string)
}

// 删除类操作必须携带 userId 请求头
pub(crate) fn require_user_id(req: &HttpRequest) -> Result<String, ClassroomError> {
    header_user_id(req).ok_or_else(|| ClassroomError::authentication("User ID is required."))
}
