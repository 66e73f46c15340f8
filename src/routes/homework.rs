use actix_web::{HttpRequest, HttpResponse, Result as ActixResult, web};

use super::require_user_id;
use crate::models::ApiResponse;
use crate::models::homeworks::requests::CreateHomeworkRequest;
use crate::models::submissions::requests::{SubmitHomeworkRequest, UpdateSubmissionRequest};
use crate::services::{HomeworkService, ServiceContext, SubmissionService};

pub async fn create_homework(
    ctx: web::Data<ServiceContext>,
    homework_data: web::Json<CreateHomeworkRequest>,
) -> ActixResult<HttpResponse> {
    let homework = HomeworkService::new(ctx.get_ref().clone())
        .create_homework(homework_data.into_inner())
        .await?;
    Ok(ApiResponse::created(homework, "Homework created successfully"))
}

pub async fn list_homework_by_class(
    ctx: web::Data<ServiceContext>,
    class_id: web::Path<String>,
) -> ActixResult<HttpResponse> {
    let homework = HomeworkService::new(ctx.get_ref().clone())
        .list_homework_by_class(&class_id)
        .await?;
    Ok(ApiResponse::ok(homework, "Homework retrieved successfully"))
}

pub async fn get_homework(
    ctx: web::Data<ServiceContext>,
    homework_id: web::Path<String>,
) -> ActixResult<HttpResponse> {
    let homework = HomeworkService::new(ctx.get_ref().clone())
        .get_homework(&homework_id)
        .await?;
    Ok(ApiResponse::ok(homework, "Homework retrieved successfully"))
}

pub async fn delete_homework(
    req: HttpRequest,
    ctx: web::Data<ServiceContext>,
    homework_id: web::Path<String>,
) -> ActixResult<HttpResponse> {
    let requester_id = require_user_id(&req)?;
    HomeworkService::new(ctx.get_ref().clone())
        .delete_homework(&homework_id, &requester_id)
        .await?;
    Ok(HttpResponse::NoContent().finish())
}

pub async fn submit_homework(
    ctx: web::Data<ServiceContext>,
    submission: web::Json<SubmitHomeworkRequest>,
) -> ActixResult<HttpResponse> {
    let submission = SubmissionService::new(ctx.get_ref().clone())
        .submit_homework(submission.into_inner())
        .await?;
    Ok(ApiResponse::created(submission, "Homework submitted successfully"))
}

pub async fn update_submission(
    ctx: web::Data<ServiceContext>,
    path: web::Path<(String, String)>,
    update_data: web::Json<UpdateSubmissionRequest>,
) -> ActixResult<HttpResponse> {
    let (homework_id, user_id) = path.into_inner();
    let update_data = update_data.into_inner();
    let submission = SubmissionService::new(ctx.get_ref().clone())
        .update_submission(SubmitHomeworkRequest {
            homework_id,
            class_id: update_data.class_id,
            user_id,
            drive_link: update_data.drive_link,
        })
        .await?;
    Ok(ApiResponse::ok(submission, "Submission updated successfully"))
}

pub async fn list_class_submissions(
    ctx: web::Data<ServiceContext>,
    class_id: web::Path<String>,
) -> ActixResult<HttpResponse> {
    let submissions = SubmissionService::new(ctx.get_ref().clone())
        .list_submissions_by_class(&class_id)
        .await?;
    Ok(ApiResponse::ok(submissions, "Submissions retrieved successfully"))
}

pub async fn list_user_submissions(
    ctx: web::Data<ServiceContext>,
    path: web::Path<(String, String)>,
) -> ActixResult<HttpResponse> {
    let (class_id, user_id) = path.into_inner();
    let submissions = SubmissionService::new(ctx.get_ref().clone())
        .list_submissions_by_class_and_user(&class_id, &user_id)
        .await?;
    Ok(ApiResponse::ok(submissions, "Submissions retrieved successfully"))
}

// 配置路由
pub fn configure_homework_routes(cfg: &mut web::ServiceConfig) {
    cfg.service(
        web::scope("/api/homework")
            .service(web::resource("").route(web::post().to(create_homework)))
            .service(
                web::resource("/class/{class_id}").route(web::get().to(list_homework_by_class)),
            )
            // 提交相关资源需先于 /submissions/{homework_id}/{user_id} 注册
            .service(web::resource("/submissions").route(web::post().to(submit_homework)))
            .service(
                web::resource("/submissions/class/{class_id}")
                    .route(web::get().to(list_class_submissions)),
            )
            .service(
                web::resource("/submissions/class/{class_id}/user/{user_id}")
                    .route(web::get().to(list_user_submissions)),
            )
            .service(
                web::resource("/submissions/{homework_id}/{user_id}")
                    .route(web::put().to(update_submission)),
            )
            .service(
                web::resource("/{homework_id}")
                    .route(web::get().to(get_homework))
                    .route(web::delete().to(delete_homework)),
            ),
    );
}
