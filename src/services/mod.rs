//! 业务逻辑层
//!
//! 每个服务持有一份 [`ServiceContext`]，方法按操作拆分到子模块中，
//! 只返回 [`crate::errors::Result`]，HTTP 转换留给路由层。

pub mod announcements;
pub mod attendance;
pub mod auth;
pub mod class_members;
pub mod classes;
pub mod context;
pub mod homeworks;
pub mod policy;
pub mod submissions;
pub mod users;

#[cfg(test)]
pub(crate) mod test_support;

pub use announcements::AnnouncementService;
pub use attendance::AttendanceService;
pub use auth::AuthService;
pub use class_members::ClassMemberService;
pub use classes::ClassService;
pub use context::{AuthSettings, ServiceContext};
pub use homeworks::HomeworkService;
pub use submissions::SubmissionService;
pub use users::UserService;
