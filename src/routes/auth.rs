use actix_web::{HttpResponse, Result as ActixResult, web};

use crate::middlewares::RateLimit;
use crate::models::ApiResponse;
use crate::models::auth::requests::{
    ForgotPasswordRequest, GoogleAuthRequest, LoginRequest, ResetPasswordRequest, SignupRequest,
};
use crate::models::users::requests::UpdateUserRequest;
use crate::services::{AuthService, ServiceContext, UserService};

pub async fn signup(
    ctx: web::Data<ServiceContext>,
    signup_data: web::Json<SignupRequest>,
) -> ActixResult<HttpResponse> {
    let response = AuthService::new(ctx.get_ref().clone())
        .signup(signup_data.into_inner())
        .await?;
    Ok(ApiResponse::ok(response, "Signup successful"))
}

pub async fn login(
    ctx: web::Data<ServiceContext>,
    login_data: web::Json<LoginRequest>,
) -> ActixResult<HttpResponse> {
    let response = AuthService::new(ctx.get_ref().clone())
        .login(login_data.into_inner())
        .await?;
    Ok(ApiResponse::ok(response, "Login successful"))
}

pub async fn google_login(
    ctx: web::Data<ServiceContext>,
    google_data: web::Json<GoogleAuthRequest>,
) -> ActixResult<HttpResponse> {
    let response = AuthService::new(ctx.get_ref().clone())
        .google_login(&google_data.token)
        .await?;
    Ok(ApiResponse::ok(response, "Login successful"))
}

pub async fn google_signup(
    ctx: web::Data<ServiceContext>,
    google_data: web::Json<GoogleAuthRequest>,
) -> ActixResult<HttpResponse> {
    let google_data = google_data.into_inner();
    let response = AuthService::new(ctx.get_ref().clone())
        .google_signup(&google_data.token, google_data.role.as_deref())
        .await?;
    Ok(ApiResponse::ok(response, "Signup successful"))
}

pub async fn forgot_password(
    ctx: web::Data<ServiceContext>,
    forgot_data: web::Json<ForgotPasswordRequest>,
) -> ActixResult<HttpResponse> {
    let response = AuthService::new(ctx.get_ref().clone())
        .forgot_password(&forgot_data.email)
        .await?;
    Ok(ApiResponse::ok(response, "Password reset link generated."))
}

pub async fn reset_password(
    ctx: web::Data<ServiceContext>,
    reset_data: web::Json<ResetPasswordRequest>,
) -> ActixResult<HttpResponse> {
    AuthService::new(ctx.get_ref().clone())
        .reset_password(reset_data.into_inner())
        .await?;
    Ok(HttpResponse::Ok().json(ApiResponse::success_empty("Password reset successful!")))
}

pub async fn get_user(
    ctx: web::Data<ServiceContext>,
    user_id: web::Path<String>,
) -> ActixResult<HttpResponse> {
    let user = UserService::new(ctx.get_ref().clone())
        .get_user(&user_id)
        .await?;
    Ok(ApiResponse::ok(user, "User retrieved successfully"))
}

pub async fn update_user(
    ctx: web::Data<ServiceContext>,
    user_id: web::Path<String>,
    update_data: web::Json<UpdateUserRequest>,
) -> ActixResult<HttpResponse> {
    let user = UserService::new(ctx.get_ref().clone())
        .update_user(&user_id, update_data.into_inner())
        .await?;
    Ok(ApiResponse::ok(user, "User updated successfully"))
}

// 配置路由
pub fn configure_auth_routes(cfg: &mut web::ServiceConfig) {
    cfg.service(
        web::scope("/api/auth")
            .service(
                web::resource("/signup")
                    .wrap(RateLimit::signup())
                    .route(web::post().to(signup)),
            )
            .service(
                web::resource("/login")
                    .wrap(RateLimit::login())
                    .route(web::post().to(login)),
            )
            .service(
                web::resource("/google-login")
                    .wrap(RateLimit::login())
                    .route(web::post().to(google_login)),
            )
            .service(
                web::resource("/google-signup")
                    .wrap(RateLimit::signup())
                    .route(web::post().to(google_signup)),
            )
            .service(
                web::resource("/forgot-password")
                    .wrap(RateLimit::password_reset())
                    .route(web::post().to(forgot_password)),
            )
            .service(
                web::resource("/reset-password")
                    .wrap(RateLimit::password_reset())
                    .route(web::post().to(reset_password)),
            )
            .service(
                web::resource("/users/{user_id}")
                    .route(web::get().to(get_user))
                    .route(web::put().to(update_user)),
            ),
    );
}
