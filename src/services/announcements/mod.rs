pub mod create;
pub mod delete;
pub mod get;

#[cfg(test)]
mod tests;

use std::sync::Arc;

use crate::errors::Result;
use crate::models::announcements::{
    entities::Announcement, requests::CreateAnnouncementRequest,
};
use crate::services::context::ServiceContext;
use crate::storage::Storage;

/// 班级公告
pub struct AnnouncementService {
    ctx: ServiceContext,
}

impl AnnouncementService {
    pub fn new(ctx: ServiceContext) -> Self {
        Self { ctx }
    }

    pub(crate) fn storage(&self) -> &Arc<dyn Storage> {
        &self.ctx.storage
    }

    pub async fn create_announcement(
        &self,
        request: CreateAnnouncementRequest,
    ) -> Result<Announcement> {
        create::create_announcement(self, request).await
    }

    pub async fn list_announcements(&self, class_id: &str) -> Result<Vec<Announcement>> {
        get::list_announcements(self, class_id).await
    }

    pub async fn get_announcement(&self, announcement_id: &str) -> Result<Announcement> {
        get::get_announcement(self, announcement_id).await
    }

    // 仅发布者可删除
    pub async fn delete_announcement(
        &self,
        announcement_id: &str,
        requester_id: &str,
    ) -> Result<()> {
        delete::delete_announcement(self, announcement_id, requester_id).await
    }
}
