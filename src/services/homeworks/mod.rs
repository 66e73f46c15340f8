pub mod create;
pub mod delete;
pub mod get;

#[cfg(test)]
mod tests;

use std::sync::Arc;

use crate::errors::Result;
use crate::models::homeworks::{entities::Homework, requests::CreateHomeworkRequest};
use crate::services::context::ServiceContext;
use crate::storage::Storage;

/// 作业管理
pub struct HomeworkService {
    ctx: ServiceContext,
}

impl HomeworkService {
    pub fn new(ctx: ServiceContext) -> Self {
        Self { ctx }
    }

    pub(crate) fn storage(&self) -> &Arc<dyn Storage> {
        &self.ctx.storage
    }

    // 布置作业
    pub async fn create_homework(&self, homework_data: CreateHomeworkRequest) -> Result<Homework> {
        create::create_homework(self, homework_data).await
    }

    // 班级作业列表，按布置时间升序
    pub async fn list_homework_by_class(&self, class_id: &str) -> Result<Vec<Homework>> {
        get::list_homework_by_class(self, class_id).await
    }

    // 获取作业详情
    pub async fn get_homework(&self, homework_id: &str) -> Result<Homework> {
        get::get_homework(self, homework_id).await
    }

    // 删除作业，仅创建者可操作
    pub async fn delete_homework(&self, homework_id: &str, requester_id: &str) -> Result<()> {
        delete::delete_homework(self, homework_id, requester_id).await
    }
}
