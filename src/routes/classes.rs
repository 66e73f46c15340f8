use actix_web::{HttpRequest, HttpResponse, Result as ActixResult, web};

use super::{header_user_id, require_user_id};
use crate::errors::ClassroomError;
use crate::middlewares::RateLimit;
use crate::models::ApiResponse;
use crate::models::class_members::requests::{JoinClassRequest, LeaveClassRequest};
use crate::models::classes::requests::{ClassListParams, CreateClassRequest, DeleteClassParams};
use crate::services::{ClassMemberService, ClassService, ServiceContext};

pub async fn list_classes(
    ctx: web::Data<ServiceContext>,
    query: web::Query<ClassListParams>,
) -> ActixResult<HttpResponse> {
    let params = query.into_inner();
    let classes = ClassService::new(ctx.get_ref().clone())
        .list_classes(params.user_id.as_deref(), params.list_type.as_deref())
        .await?;
    Ok(ApiResponse::ok(classes, "Classes retrieved successfully"))
}

pub async fn create_class(
    req: HttpRequest,
    ctx: web::Data<ServiceContext>,
    class_data: web::Json<CreateClassRequest>,
) -> ActixResult<HttpResponse> {
    let class_data = class_data.into_inner();
    // 没有请求头时以请求体中的 userId 作为操作者
    let actor_id = header_user_id(&req).unwrap_or_else(|| class_data.user_id.clone());
    let class = ClassService::new(ctx.get_ref().clone())
        .create_class(&actor_id, class_data)
        .await?;
    Ok(ApiResponse::ok(class, "Class created successfully"))
}

pub async fn get_class(
    ctx: web::Data<ServiceContext>,
    class_id: web::Path<String>,
) -> ActixResult<HttpResponse> {
    let class = ClassService::new(ctx.get_ref().clone())
        .get_class_by_id(&class_id)
        .await?
        .ok_or_else(|| ClassroomError::not_found("Class not found."))?;
    Ok(ApiResponse::ok(class, "Class retrieved successfully"))
}

pub async fn get_class_by_code(
    ctx: web::Data<ServiceContext>,
    class_code: web::Path<String>,
) -> ActixResult<HttpResponse> {
    let class = ClassService::new(ctx.get_ref().clone())
        .get_class_by_code(&class_code)
        .await?
        .ok_or_else(|| ClassroomError::not_found("Class not found."))?;
    Ok(ApiResponse::ok(class, "Class retrieved successfully"))
}

pub async fn delete_class(
    req: HttpRequest,
    ctx: web::Data<ServiceContext>,
    class_id: web::Path<String>,
    query: web::Query<DeleteClassParams>,
) -> ActixResult<HttpResponse> {
    let requester_id = match query.into_inner().user_id.filter(|id| !id.trim().is_empty()) {
        Some(id) => id,
        None => require_user_id(&req)?,
    };
    ClassService::new(ctx.get_ref().clone())
        .delete_class(&class_id, &requester_id)
        .await?;
    Ok(HttpResponse::Ok().json(ApiResponse::success_empty("Class deleted successfully")))
}

pub async fn join_class(
    ctx: web::Data<ServiceContext>,
    join_data: web::Json<JoinClassRequest>,
) -> ActixResult<HttpResponse> {
    let class = ClassMemberService::new(ctx.get_ref().clone())
        .join_class(&join_data.class_code, &join_data.user_id)
        .await?;
    Ok(ApiResponse::ok(class, "Joined class successfully"))
}

pub async fn leave_class(
    ctx: web::Data<ServiceContext>,
    leave_data: web::Json<LeaveClassRequest>,
) -> ActixResult<HttpResponse> {
    ClassMemberService::new(ctx.get_ref().clone())
        .leave_class(&leave_data.class_id, &leave_data.user_id)
        .await?;
    Ok(HttpResponse::Ok().json(ApiResponse::success_empty("Left class successfully")))
}

// 配置路由
pub fn configure_class_routes(cfg: &mut web::ServiceConfig) {
    cfg.service(
        web::scope("/api/classes")
            .service(
                web::resource("")
                    .route(web::get().to(list_classes))
                    .route(web::post().to(create_class)),
            )
            .service(
                web::resource("/join")
                    // 限制邀请码枚举
                    .wrap(RateLimit::join_class())
                    .route(web::post().to(join_class)),
            )
            .service(web::resource("/leave").route(web::post().to(leave_class)))
            .service(web::resource("/code/{class_code}").route(web::get().to(get_class_by_code)))
            .service(
                web::resource("/{class_id}")
                    .route(web::get().to(get_class))
                    .route(web::delete().to(delete_class)),
            ),
    );
}
