//! 班级存储操作

use super::{SeaOrmStorage, db_error};
use crate::entity::classes::{ActiveModel, Column, Entity as Classes};
use crate::errors::Result;
use crate::models::classes::entities::Class;
use sea_orm::{ActiveModelTrait, ColumnTrait, EntityTrait, QueryFilter, QueryOrder, Set};

impl SeaOrmStorage {
    /// 创建班级，class_id 与 class_code 由唯一索引约束
    pub async fn create_class_impl(&self, class: Class) -> Result<Class> {
        let model = ActiveModel {
            class_id: Set(class.class_id),
            class_code: Set(class.class_code),
            subject_code: Set(class.subject_code),
            section: Set(class.section),
            subject: Set(class.subject),
            teacher_name: Set(class.teacher_name),
            user_id: Set(class.user_id),
            created_at: Set(class.created_at.timestamp_millis()),
        };

        let result = model
            .insert(&self.db)
            .await
            .map_err(db_error("创建班级失败"))?;

        Ok(result.into_class())
    }

    /// 通过 ID 获取班级
    pub async fn get_class_by_id_impl(&self, class_id: &str) -> Result<Option<Class>> {
        let result = Classes::find_by_id(class_id.to_string())
            .one(&self.db)
            .await
            .map_err(db_error("查询班级失败"))?;

        Ok(result.map(|m| m.into_class()))
    }

    /// 通过邀请码获取班级
    pub async fn get_class_by_code_impl(&self, class_code: &str) -> Result<Option<Class>> {
        let result = Classes::find()
            .filter(Column::ClassCode.eq(class_code))
            .one(&self.db)
            .await
            .map_err(db_error("查询班级失败"))?;

        Ok(result.map(|m| m.into_class()))
    }

    /// 列出用户创建的班级
    pub async fn list_classes_by_owner_impl(&self, user_id: &str) -> Result<Vec<Class>> {
        let result = Classes::find()
            .filter(Column::UserId.eq(user_id))
            .order_by_asc(Column::CreatedAt)
            .all(&self.db)
            .await
            .map_err(db_error("查询班级列表失败"))?;

        Ok(result.into_iter().map(|m| m.into_class()).collect())
    }

    /// 批量获取班级
    pub async fn list_classes_by_ids_impl(&self, class_ids: &[String]) -> Result<Vec<Class>> {
        if class_ids.is_empty() {
            return Ok(Vec::new());
        }

        let result = Classes::find()
            .filter(Column::ClassId.is_in(class_ids.iter().cloned()))
            .order_by_asc(Column::CreatedAt)
            .all(&self.db)
            .await
            .map_err(db_error("查询班级列表失败"))?;

        Ok(result.into_iter().map(|m| m.into_class()).collect())
    }

    /// 删除班级记录本身
    pub async fn delete_class_impl(&self, class_id: &str) -> Result<bool> {
        let result = Classes::delete_by_id(class_id.to_string())
            .exec(&self.db)
            .await
            .map_err(db_error("删除班级失败"))?;

        Ok(result.rows_affected > 0)
    }
}
