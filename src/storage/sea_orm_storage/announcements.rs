//! 公告存储操作

use super::{SeaOrmStorage, db_error};
use crate::entity::announcements::{ActiveModel, Column, Entity as Announcements};
use crate::errors::Result;
use crate::models::announcements::entities::Announcement;
use sea_orm::{ActiveModelTrait, ColumnTrait, EntityTrait, QueryFilter, QueryOrder, Set};

impl SeaOrmStorage {
    pub async fn create_announcement_impl(
        &self,
        announcement: Announcement,
    ) -> Result<Announcement> {
        let model = ActiveModel {
            id: Set(announcement.id),
            class_id: Set(announcement.class_id),
            title: Set(announcement.title),
            description: Set(announcement.description),
            created_at: Set(announcement.created_at.timestamp_millis()),
            created_by: Set(announcement.created_by),
        };

        let result = model
            .insert(&self.db)
            .await
            .map_err(db_error("创建公告失败"))?;

        Ok(result.into_announcement())
    }

    pub async fn get_announcement_by_id_impl(&self, id: &str) -> Result<Option<Announcement>> {
        let result = Announcements::find_by_id(id.to_string())
            .one(&self.db)
            .await
            .map_err(db_error("查询公告失败"))?;

        Ok(result.map(|m| m.into_announcement()))
    }

    /// 按创建时间升序
    pub async fn list_announcements_by_class_impl(
        &self,
        class_id: &str,
    ) -> Result<Vec<Announcement>> {
        let result = Announcements::find()
            .filter(Column::ClassId.eq(class_id))
            .order_by_asc(Column::CreatedAt)
            .order_by_asc(Column::Id)
            .all(&self.db)
            .await
            .map_err(db_error("查询公告列表失败"))?;

        Ok(result.into_iter().map(|m| m.into_announcement()).collect())
    }

    pub async fn delete_announcement_impl(&self, id: &str) -> Result<bool> {
        let result = Announcements::delete_by_id(id.to_string())
            .exec(&self.db)
            .await
            .map_err(db_error("删除公告失败"))?;

        Ok(result.rows_affected > 0)
    }
}
