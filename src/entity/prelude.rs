//! 预导入模块，方便使用

pub use super::announcements::{
    ActiveModel as AnnouncementActiveModel, Entity as Announcements, Model as AnnouncementModel,
};
pub use super::attendance::{
    ActiveModel as AttendanceActiveModel, Entity as Attendance, Model as AttendanceModel,
};
pub use super::class_members::{
    ActiveModel as ClassMemberActiveModel, Entity as ClassMembers, Model as ClassMemberModel,
};
pub use super::classes::{ActiveModel as ClassActiveModel, Entity as Classes, Model as ClassModel};
pub use super::homework::{
    ActiveModel as HomeworkActiveModel, Entity as Homework, Model as HomeworkModel,
};
pub use super::homework_submissions::{
    ActiveModel as SubmissionActiveModel, Entity as HomeworkSubmissions,
    Model as SubmissionModel,
};
pub use super::password_reset_tokens::{
    ActiveModel as PasswordResetTokenActiveModel, Entity as PasswordResetTokens,
    Model as PasswordResetTokenModel,
};
pub use super::users::{ActiveModel as UserActiveModel, Entity as Users, Model as UserModel};
