//! 作业存储操作

use super::{SeaOrmStorage, db_error};
use crate::entity::homework::{ActiveModel, Column, Entity as HomeworkEntity};
use crate::errors::Result;
use crate::models::homeworks::entities::Homework;
use sea_orm::{ActiveModelTrait, ColumnTrait, EntityTrait, QueryFilter, QueryOrder, Set};

impl SeaOrmStorage {
    /// 创建作业
    pub async fn create_homework_impl(&self, homework: Homework) -> Result<Homework> {
        let model = ActiveModel {
            id: Set(homework.id),
            class_id: Set(homework.class_id),
            title: Set(homework.title),
            description: Set(homework.description),
            assigned_date: Set(homework.assigned_date.timestamp_millis()),
            due_date: Set(homework.due_date.timestamp_millis()),
            created_by: Set(homework.created_by),
        };

        let result = model
            .insert(&self.db)
            .await
            .map_err(db_error("创建作业失败"))?;

        Ok(result.into_homework())
    }

    pub async fn get_homework_by_id_impl(&self, id: &str) -> Result<Option<Homework>> {
        let result = HomeworkEntity::find_by_id(id.to_string())
            .one(&self.db)
            .await
            .map_err(db_error("查询作业失败"))?;

        Ok(result.map(|m| m.into_homework()))
    }

    /// 按布置时间升序列出班级作业
    pub async fn list_homework_by_class_impl(&self, class_id: &str) -> Result<Vec<Homework>> {
        let result = HomeworkEntity::find()
            .filter(Column::ClassId.eq(class_id))
            .order_by_asc(Column::AssignedDate)
            .order_by_asc(Column::Id)
            .all(&self.db)
            .await
            .map_err(db_error("查询作业列表失败"))?;

        Ok(result.into_iter().map(|m| m.into_homework()).collect())
    }

    pub async fn delete_homework_impl(&self, id: &str) -> Result<bool> {
        let result = HomeworkEntity::delete_by_id(id.to_string())
            .exec(&self.db)
            .await
            .map_err(db_error("删除作业失败"))?;

        Ok(result.rows_affected > 0)
    }
}
