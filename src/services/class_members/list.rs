use super::ClassMemberService;
use crate::errors::Result;
use crate::models::users::entities::{User, UserRole};

pub async fn list_students(service: &ClassMemberService, class_id: &str) -> Result<Vec<User>> {
    let storage = service.storage();

    let user_ids: Vec<String> = storage
        .list_class_members(class_id)
        .await?
        .into_iter()
        .map(|m| m.user_id)
        .collect();
    if user_ids.is_empty() {
        return Ok(Vec::new());
    }

    let mut students: Vec<User> = storage
        .list_users_by_ids(&user_ids)
        .await?
        .into_iter()
        .filter(|u| u.role == UserRole::Student)
        .collect();

    // 没有学号的排在最后
    students.sort_by_key(|u| (u.roll_number.is_none(), u.roll_number));
    Ok(students)
}
