use actix_web::{HttpRequest, HttpResponse, Result as ActixResult, web};

use super::require_user_id;
use crate::models::ApiResponse;
use crate::models::announcements::requests::CreateAnnouncementRequest;
use crate::services::{AnnouncementService, ServiceContext};

pub async fn create_announcement(
    ctx: web::Data<ServiceContext>,
    announcement: web::Json<CreateAnnouncementRequest>,
) -> ActixResult<HttpResponse> {
    let announcement = AnnouncementService::new(ctx.get_ref().clone())
        .create_announcement(announcement.into_inner())
        .await?;
    Ok(ApiResponse::created(announcement, "Announcement created successfully"))
}

pub async fn list_announcements(
    ctx: web::Data<ServiceContext>,
    class_id: web::Path<String>,
) -> ActixResult<HttpResponse> {
    let announcements = AnnouncementService::new(ctx.get_ref().clone())
        .list_announcements(&class_id)
        .await?;
    Ok(ApiResponse::ok(announcements, "Announcements retrieved successfully"))
}

pub async fn get_announcement(
    ctx: web::Data<ServiceContext>,
    announcement_id: web::Path<String>,
) -> ActixResult<HttpResponse> {
    let announcement = AnnouncementService::new(ctx.get_ref().clone())
        .get_announcement(&announcement_id)
        .await?;
    Ok(ApiResponse::ok(announcement, "Announcement retrieved successfully"))
}

pub async fn delete_announcement(
    req: HttpRequest,
    ctx: web::Data<ServiceContext>,
    announcement_id: web::Path<String>,
) -> ActixResult<HttpResponse> {
    let requester_id = require_user_id(&req)?;
    AnnouncementService::new(ctx.get_ref().clone())
        .delete_announcement(&announcement_id, &requester_id)
        .await?;
    Ok(HttpResponse::NoContent().finish())
}

// 配置路由
pub fn configure_announcement_routes(cfg: &mut web::ServiceConfig) {
    cfg.service(
        web::scope("/api/announcements")
            .service(web::resource("").route(web::post().to(create_announcement)))
            .service(web::resource("/class/{class_id}").route(web::get().to(list_announcements)))
            .service(
                web::resource("/{announcement_id}")
                    .route(web::get().to(get_announcement))
                    .route(web::delete().to(delete_announcement)),
            ),
    );
}
