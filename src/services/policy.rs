//! 授权策略
//!
//! 每个检查接收 (操作者, 资源)，返回 [`Decision`]，由调用方决定拒绝时的错误类别。

use crate::errors::{ClassroomError, Result};
use crate::models::{
    announcements::entities::Announcement, classes::entities::Class,
    homeworks::entities::Homework, users::entities::User,
};

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Decision {
    Allow,
    Deny(&'static str),
}

impl Decision {
    /// 拒绝时返回 403
    pub fn authorize(self) -> Result<()> {
        match self {
            Decision::Allow => Ok(()),
            Decision::Deny(reason) => Err(ClassroomError::authorization(reason)),
        }
    }

    /// 拒绝时返回 400
    pub fn validate(self) -> Result<()> {
        match self {
            Decision::Allow => Ok(()),
            Decision::Deny(reason) => Err(ClassroomError::validation(reason)),
        }
    }
}

pub fn can_create_class(actor: &User) -> Decision {
    if actor.is_teacher() {
        Decision::Allow
    } else {
        Decision::Deny("Only teachers can create classes.")
    }
}

pub fn owns_class(actor_id: &str, class: &Class) -> Decision {
    if class.user_id == actor_id {
        Decision::Allow
    } else {
        Decision::Deny("You are not authorized to delete this class.")
    }
}

pub fn can_join_class(actor_id: &str, class: &Class) -> Decision {
    if class.user_id == actor_id {
        Decision::Deny("You are the creator of this class and cannot join it.")
    } else {
        Decision::Allow
    }
}

pub fn can_leave_class(actor_id: &str, class: &Class) -> Decision {
    if class.user_id == actor_id {
        Decision::Deny("You are the creator of this class and cannot leave it. Use delete instead.")
    } else {
        Decision::Allow
    }
}

pub fn owns_homework(actor_id: &str, homework: &Homework) -> Decision {
    if homework.created_by == actor_id {
        Decision::Allow
    } else {
        Decision::Deny("You are not authorized to delete this homework.")
    }
}

pub fn owns_announcement(actor_id: &str, announcement: &Announcement) -> Decision {
    if announcement.created_by == actor_id {
        Decision::Allow
    } else {
        Decision::Deny("You are not authorized to delete this announcement.")
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::users::entities::UserRole;

    fn user(role: UserRole) -> User {
        User {
            id: "u1".into(),
            email: "u1@school.edu".into(),
            password_hash: None,
            name: "U".into(),
            role,
            section: None,
            roll_number: None,
        }
    }

    fn class(owner: &str) -> Class {
        Class {
            class_id: "c1".into(),
            class_code: "ABCD1234".into(),
            subject_code: "CS".into(),
            section: "A".into(),
            subject: "S".into(),
            teacher_name: "T".into(),
            user_id: owner.into(),
            created_at: chrono::Utc::now(),
        }
    }

    #[test]
    fn test_only_teachers_create_classes() {
        assert_eq!(can_create_class(&user(UserRole::Teacher)), Decision::Allow);
        let err = can_create_class(&user(UserRole::Student))
            .authorize()
            .unwrap_err();
        assert_eq!(err.message(), "Only teachers can create classes.");
    }

    #[test]
    fn test_owner_cannot_join_or_leave() {
        let c = class("owner");
        assert!(can_join_class("owner", &c).validate().is_err());
        assert!(can_leave_class("owner", &c).validate().is_err());
        assert_eq!(can_join_class("student", &c), Decision::Allow);
        assert_eq!(can_leave_class("student", &c), Decision::Allow);
    }

    #[test]
    fn test_owns_class() {
        let c = class("owner");
        assert_eq!(owns_class("owner", &c), Decision::Allow);
        let err = owns_class("intruder", &c).authorize().unwrap_err();
        assert_eq!(err.error_type(), "Authorization Error");
    }
}
