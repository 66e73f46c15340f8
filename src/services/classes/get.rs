use super::ClassService;
use crate::errors::Result;
use crate::models::classes::entities::Class;

pub async fn get_class_by_id(service: &ClassService, class_id: &str) -> Result<Option<Class>> {
    service.storage().get_class_by_id(class_id).await
}

pub async fn get_class_by_code(service: &ClassService, class_code: &str) -> Result<Option<Class>> {
    service.storage().get_class_by_code(class_code).await
}
