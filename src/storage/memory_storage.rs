//! 内存存储实现
//!
//! 基于 DashMap 的进程内存储，用于测试和 `memory://` 部署。
//! 唯一键通过 `entry()` 原子地占位，语义与数据库唯一索引一致。

use async_trait::async_trait;
use dashmap::DashMap;
use dashmap::mapref::entry::Entry;

use crate::errors::{ClassroomError, Result};
use crate::models::{
    announcements::entities::Announcement, attendance::entities::Attendance,
    auth::entities::PasswordResetToken, class_members::entities::ClassMember,
    classes::entities::Class, homeworks::entities::Homework,
    submissions::entities::HomeworkSubmission, users::entities::User,
};
use crate::storage::Storage;

pub const MEMORY_URL_SCHEME: &str = "memory://";

type PairKey = (String, String);

fn duplicate(index: &str) -> ClassroomError {
    ClassroomError::duplicate(format!("duplicate key violates unique index {index}"))
}

#[derive(Default)]
pub struct MemoryStorage {
    users: DashMap<String, User>,
    // email -> user id
    user_emails: DashMap<String, String>,
    classes: DashMap<String, Class>,
    // class code -> class id
    class_codes: DashMap<String, String>,
    // (class_id, user_id)
    members: DashMap<PairKey, ClassMember>,
    homework: DashMap<String, Homework>,
    // (homework_id, user_id)
    submissions: DashMap<PairKey, HomeworkSubmission>,
    // (class_id, date)
    attendance: DashMap<PairKey, Attendance>,
    announcements: DashMap<String, Announcement>,
    reset_tokens: DashMap<String, PasswordResetToken>,
    // email -> token
    reset_emails: DashMap<String, String>,
}

impl MemoryStorage {
    pub fn new() -> Self {
        Self::default()
    }
}

/// 收集满足条件的值并排序
fn collect_sorted<K, V, F, S>(map: &DashMap<K, V>, filter: F, mut sort_key: S) -> Vec<V>
where
    K: std::hash::Hash + Eq,
    V: Clone,
    F: Fn(&V) -> bool,
    S: FnMut(&V, &V) -> std::cmp::Ordering,
{
    let mut items: Vec<V> = map
        .iter()
        .filter(|item| filter(item.value()))
        .map(|item| item.value().clone())
        .collect();
    items.sort_by(|a, b| sort_key(a, b));
    items
}

/// 按条件删除并返回删除数量
fn remove_matching<K, V, F>(map: &DashMap<K, V>, filter: F) -> u64
where
    K: std::hash::Hash + Eq,
    F: Fn(&V) -> bool,
{
    let mut removed = 0;
    map.retain(|_, value| {
        if filter(&*value) {
            removed += 1;
            false
        } else {
            true
        }
    });
    removed
}

#[async_trait]
impl Storage for MemoryStorage {
    // 用户模块
    async fn create_user(&self, user: User) -> Result<User> {
        match self.user_emails.entry(user.email.clone()) {
            Entry::Occupied(_) => Err(duplicate("users.email")),
            Entry::Vacant(email_slot) => match self.users.entry(user.id.clone()) {
                Entry::Occupied(_) => Err(duplicate("users.id")),
                Entry::Vacant(slot) => {
                    slot.insert(user.clone());
                    email_slot.insert(user.id.clone());
                    Ok(user)
                }
            },
        }
    }

    async fn get_user_by_id(&self, id: &str) -> Result<Option<User>> {
        Ok(self.users.get(id).map(|u| u.value().clone()))
    }

    async fn get_user_by_email(&self, email: &str) -> Result<Option<User>> {
        let id = match self.user_emails.get(email) {
            Some(id) => id.value().clone(),
            None => return Ok(None),
        };
        Ok(self.users.get(&id).map(|u| u.value().clone()))
    }

    async fn list_users_by_ids(&self, ids: &[String]) -> Result<Vec<User>> {
        Ok(ids
            .iter()
            .filter_map(|id| self.users.get(id).map(|u| u.value().clone()))
            .collect())
    }

    async fn update_user(&self, user: User) -> Result<User> {
        match self.users.get_mut(&user.id) {
            Some(mut existing) => {
                if existing.email != user.email {
                    return Err(ClassroomError::validation("Email cannot be changed"));
                }
                *existing = user.clone();
                Ok(user)
            }
            None => Err(ClassroomError::database_operation(format!(
                "更新用户失败: 用户 {} 不存在",
                user.id
            ))),
        }
    }

    // 班级模块
    async fn create_class(&self, class: Class) -> Result<Class> {
        match self.class_codes.entry(class.class_code.clone()) {
            Entry::Occupied(_) => Err(duplicate("classes.class_code")),
            Entry::Vacant(code_slot) => match self.classes.entry(class.class_id.clone()) {
                Entry::Occupied(_) => Err(duplicate("classes.class_id")),
                Entry::Vacant(slot) => {
                    slot.insert(class.clone());
                    code_slot.insert(class.class_id.clone());
                    Ok(class)
                }
            },
        }
    }

    async fn get_class_by_id(&self, class_id: &str) -> Result<Option<Class>> {
        Ok(self.classes.get(class_id).map(|c| c.value().clone()))
    }

    async fn get_class_by_code(&self, class_code: &str) -> Result<Option<Class>> {
        let class_id = match self.class_codes.get(class_code) {
            Some(id) => id.value().clone(),
            None => return Ok(None),
        };
        Ok(self.classes.get(&class_id).map(|c| c.value().clone()))
    }

    async fn list_classes_by_owner(&self, user_id: &str) -> Result<Vec<Class>> {
        Ok(collect_sorted(
            &self.classes,
            |c| c.user_id == user_id,
            |a, b| a.created_at.cmp(&b.created_at),
        ))
    }

    async fn list_classes_by_ids(&self, class_ids: &[String]) -> Result<Vec<Class>> {
        Ok(collect_sorted(
            &self.classes,
            |c| class_ids.contains(&c.class_id),
            |a, b| a.created_at.cmp(&b.created_at),
        ))
    }

    async fn delete_class(&self, class_id: &str) -> Result<bool> {
        match self.classes.remove(class_id) {
            Some((_, class)) => {
                self.class_codes.remove(&class.class_code);
                Ok(true)
            }
            None => Ok(false),
        }
    }

    // 班级成员模块
    async fn create_class_member(&self, member: ClassMember) -> Result<ClassMember> {
        let key = (member.class_id.clone(), member.user_id.clone());
        match self.members.entry(key) {
            Entry::Occupied(_) => Err(duplicate("class_members(class_id, user_id)")),
            Entry::Vacant(slot) => {
                slot.insert(member.clone());
                Ok(member)
            }
        }
    }

    async fn get_class_member(
        &self,
        class_id: &str,
        user_id: &str,
    ) -> Result<Option<ClassMember>> {
        let key = (class_id.to_string(), user_id.to_string());
        Ok(self.members.get(&key).map(|m| m.value().clone()))
    }

    async fn delete_class_member(&self, class_id: &str, user_id: &str) -> Result<bool> {
        let key = (class_id.to_string(), user_id.to_string());
        Ok(self.members.remove(&key).is_some())
    }

    async fn list_class_members(&self, class_id: &str) -> Result<Vec<ClassMember>> {
        Ok(collect_sorted(
            &self.members,
            |m| m.class_id == class_id,
            |a, b| a.joined_at.cmp(&b.joined_at),
        ))
    }

    async fn list_memberships_by_user(&self, user_id: &str) -> Result<Vec<ClassMember>> {
        Ok(collect_sorted(
            &self.members,
            |m| m.user_id == user_id,
            |a, b| a.joined_at.cmp(&b.joined_at),
        ))
    }

    async fn delete_class_members_by_class(&self, class_id: &str) -> Result<u64> {
        Ok(remove_matching(&self.members, |m| m.class_id == class_id))
    }

    // 作业模块
    async fn create_homework(&self, homework: Homework) -> Result<Homework> {
        match self.homework.entry(homework.id.clone()) {
            Entry::Occupied(_) => Err(duplicate("homework.id")),
            Entry::Vacant(slot) => {
                slot.insert(homework.clone());
                Ok(homework)
            }
        }
    }

    async fn get_homework_by_id(&self, id: &str) -> Result<Option<Homework>> {
        Ok(self.homework.get(id).map(|h| h.value().clone()))
    }

    async fn list_homework_by_class(&self, class_id: &str) -> Result<Vec<Homework>> {
        Ok(collect_sorted(
            &self.homework,
            |h| h.class_id == class_id,
            |a, b| {
                a.assigned_date
                    .cmp(&b.assigned_date)
                    .then_with(|| a.id.cmp(&b.id))
            },
        ))
    }

    async fn delete_homework(&self, id: &str) -> Result<bool> {
        Ok(self.homework.remove(id).is_some())
    }

    // 作业提交模块
    async fn create_submission(
        &self,
        submission: HomeworkSubmission,
    ) -> Result<HomeworkSubmission> {
        let key = (submission.homework_id.clone(), submission.user_id.clone());
        match self.submissions.entry(key) {
            Entry::Occupied(_) => Err(duplicate("homework_submissions(homework_id, user_id)")),
            Entry::Vacant(slot) => {
                slot.insert(submission.clone());
                Ok(submission)
            }
        }
    }

    async fn get_submission(
        &self,
        homework_id: &str,
        user_id: &str,
    ) -> Result<Option<HomeworkSubmission>> {
        let key = (homework_id.to_string(), user_id.to_string());
        Ok(self.submissions.get(&key).map(|s| s.value().clone()))
    }

    async fn update_submission(
        &self,
        submission: HomeworkSubmission,
    ) -> Result<HomeworkSubmission> {
        let key = (submission.homework_id.clone(), submission.user_id.clone());
        match self.submissions.get_mut(&key) {
            Some(mut existing) if existing.id == submission.id => {
                *existing = submission.clone();
                Ok(submission)
            }
            _ => Err(ClassroomError::database_operation(format!(
                "更新提交失败: 提交 {} 不存在",
                submission.id
            ))),
        }
    }

    async fn list_submissions_by_class(&self, class_id: &str) -> Result<Vec<HomeworkSubmission>> {
        Ok(collect_sorted(
            &self.submissions,
            |s| s.class_id == class_id,
            |a, b| a.submitted_on.cmp(&b.submitted_on),
        ))
    }

    async fn list_submissions_by_class_and_user(
        &self,
        class_id: &str,
        user_id: &str,
    ) -> Result<Vec<HomeworkSubmission>> {
        Ok(collect_sorted(
            &self.submissions,
            |s| s.class_id == class_id && s.user_id == user_id,
            |a, b| a.submitted_on.cmp(&b.submitted_on),
        ))
    }

    async fn delete_submissions_by_class(&self, class_id: &str) -> Result<u64> {
        Ok(remove_matching(&self.submissions, |s| s.class_id == class_id))
    }

    // 考勤模块
    async fn create_attendance(&self, attendance: Attendance) -> Result<Attendance> {
        let key = (attendance.class_id.clone(), attendance.date.clone());
        match self.attendance.entry(key) {
            Entry::Occupied(_) => Err(duplicate("attendance(class_id, date)")),
            Entry::Vacant(slot) => {
                slot.insert(attendance.clone());
                Ok(attendance)
            }
        }
    }

    async fn list_attendance_by_date(
        &self,
        class_id: &str,
        date: &str,
    ) -> Result<Vec<Attendance>> {
        let key = (class_id.to_string(), date.to_string());
        Ok(self
            .attendance
            .get(&key)
            .map(|a| vec![a.value().clone()])
            .unwrap_or_default())
    }

    async fn list_attendance_in_range(
        &self,
        class_id: &str,
        start_date: &str,
        end_date: &str,
    ) -> Result<Vec<Attendance>> {
        Ok(collect_sorted(
            &self.attendance,
            |a| {
                a.class_id == class_id
                    && a.date.as_str() >= start_date
                    && a.date.as_str() <= end_date
            },
            |a, b| a.date.cmp(&b.date),
        ))
    }

    async fn delete_attendance_by_class(&self, class_id: &str) -> Result<u64> {
        Ok(remove_matching(&self.attendance, |a| a.class_id == class_id))
    }

    // 公告模块
    async fn create_announcement(&self, announcement: Announcement) -> Result<Announcement> {
        match self.announcements.entry(announcement.id.clone()) {
            Entry::Occupied(_) => Err(duplicate("announcements.id")),
            Entry::Vacant(slot) => {
                slot.insert(announcement.clone());
                Ok(announcement)
            }
        }
    }

    async fn get_announcement_by_id(&self, id: &str) -> Result<Option<Announcement>> {
        Ok(self.announcements.get(id).map(|a| a.value().clone()))
    }

    async fn list_announcements_by_class(&self, class_id: &str) -> Result<Vec<Announcement>> {
        Ok(collect_sorted(
            &self.announcements,
            |a| a.class_id == class_id,
            |a, b| a.created_at.cmp(&b.created_at).then_with(|| a.id.cmp(&b.id)),
        ))
    }

    async fn delete_announcement(&self, id: &str) -> Result<bool> {
        Ok(self.announcements.remove(id).is_some())
    }

    // 密码重置令牌模块
    async fn create_reset_token(&self, token: PasswordResetToken) -> Result<PasswordResetToken> {
        match self.reset_emails.entry(token.email.clone()) {
            Entry::Occupied(_) => Err(duplicate("password_reset_tokens.email")),
            Entry::Vacant(email_slot) => match self.reset_tokens.entry(token.token.clone()) {
                Entry::Occupied(_) => Err(duplicate("password_reset_tokens.token")),
                Entry::Vacant(slot) => {
                    slot.insert(token.clone());
                    email_slot.insert(token.token.clone());
                    Ok(token)
                }
            },
        }
    }

    async fn get_reset_token(&self, token: &str) -> Result<Option<PasswordResetToken>> {
        Ok(self.reset_tokens.get(token).map(|t| t.value().clone()))
    }

    async fn delete_reset_tokens_by_email(&self, email: &str) -> Result<u64> {
        match self.reset_emails.remove(email) {
            Some((_, token)) => Ok(u64::from(self.reset_tokens.remove(&token).is_some())),
            None => Ok(0),
        }
    }

    async fn delete_reset_token(&self, token: &str) -> Result<bool> {
        match self.reset_tokens.remove(token) {
            Some((_, removed)) => {
                self.reset_emails
                    .remove_if(&removed.email, |_, current| current == token);
                Ok(true)
            }
            None => Ok(false),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::{TimeZone, Utc};

    fn class(id: &str, code: &str) -> Class {
        Class {
            class_id: id.into(),
            class_code: code.into(),
            subject_code: "CS101".into(),
            section: "A".into(),
            subject: "Algorithms".into(),
            teacher_name: "T".into(),
            user_id: "teacher".into(),
            created_at: Utc.with_ymd_and_hms(2025, 3, 1, 0, 0, 0).unwrap(),
        }
    }

    #[tokio::test]
    async fn test_class_unique_keys() {
        let storage = MemoryStorage::new();
        storage.create_class(class("c1", "ABCD1234")).await.unwrap();

        let err = storage
            .create_class(class("c2", "ABCD1234"))
            .await
            .unwrap_err();
        assert!(err.is_duplicate());

        let err = storage
            .create_class(class("c1", "ZZZZ9999"))
            .await
            .unwrap_err();
        assert!(err.is_duplicate());

        // 删除后邀请码可以复用
        assert!(storage.delete_class("c1").await.unwrap());
        storage.create_class(class("c3", "ABCD1234")).await.unwrap();
        assert_eq!(
            storage
                .get_class_by_code("ABCD1234")
                .await
                .unwrap()
                .unwrap()
                .class_id,
            "c3"
        );
    }

    #[tokio::test]
    async fn test_attendance_range_is_inclusive_and_sorted() {
        let storage = MemoryStorage::new();
        for (id, date) in [("a3", "2025-03-03"), ("a1", "2025-03-01"), ("a2", "2025-03-02")] {
            storage
                .create_attendance(Attendance {
                    id: id.into(),
                    class_id: "c1".into(),
                    date: date.into(),
                    attendance: vec![],
                })
                .await
                .unwrap();
        }

        let dates: Vec<String> = storage
            .list_attendance_in_range("c1", "2025-03-01", "2025-03-02")
            .await
            .unwrap()
            .into_iter()
            .map(|a| a.date)
            .collect();
        assert_eq!(dates, vec!["2025-03-01", "2025-03-02"]);
    }

    #[tokio::test]
    async fn test_reset_token_replaced_by_email() {
        let storage = MemoryStorage::new();
        let expiry = Utc.with_ymd_and_hms(2025, 3, 1, 1, 0, 0).unwrap();
        storage
            .create_reset_token(PasswordResetToken {
                token: "t1".into(),
                email: "a@b.co".into(),
                expiry_date: expiry,
            })
            .await
            .unwrap();

        assert_eq!(storage.delete_reset_tokens_by_email("a@b.co").await.unwrap(), 1);
        assert!(storage.get_reset_token("t1").await.unwrap().is_none());

        storage
            .create_reset_token(PasswordResetToken {
                token: "t2".into(),
                email: "a@b.co".into(),
                expiry_date: expiry,
            })
            .await
            .unwrap();
        assert!(storage.delete_reset_token("t2").await.unwrap());
        assert_eq!(storage.delete_reset_tokens_by_email("a@b.co").await.unwrap(), 0);
    }
}
