//! 사용자 핸들러
//!
//! ## 엔드포인트
//!
//! - `POST /api/v1/users`: 회원가입 (공개)
//! - `GET /api/v1/users/{user_id}`: 프로필 조회 (인증 필요)
//! - `PATCH /api/v1/users/{user_id}`: 프로필 수정 (인증 필요)
use actix_web::{get, patch, post, web, HttpResponse};
use validator::Validate;

use crate::domain::dto::users::request::create_user_request::CreateUserRequest;
use crate::domain::dto::users::request::update_user_request::UpdateUserRequest;
use crate::domain::dto::users::response::ApiResponse;
use crate::domain::models::auth::authenticated_user::AuthenticatedUser;
use crate::errors::{AppError, AppResult};
use crate::services::users::UserService;

/// 회원가입
#[post("")]
pub async fn create_user(
    service: web::Data<UserService>,
    payload: web::Json<CreateUserRequest>,
) -> AppResult<HttpResponse> {
    payload
        .validate()
        .map_err(|e| AppError::ValidationError(e.to_string()))?;

    let response = service.create_user(payload.into_inner()).await?;

    Ok(HttpResponse::Created().json(ApiResponse::ok("사용자 생성 완료", response)))
}

/// 프로필 조회 (본인 계정만)
#[get("/{user_id}")]
pub async fn get_user(
    service: web::Data<UserService>,
    path: web::Path<String>,
    auth: AuthenticatedUser,
) -> AppResult<HttpResponse> {
    let user_id = path.into_inner();
    auth.ensure_owns(&user_id)?;

    let response = service.get_user(&user_id).await?;

    Ok(HttpResponse::Ok().json(ApiResponse::ok("사용자 조회 완료", response)))
}

/// 프로필 부분 수정 (본인 계정만)
#[patch("/{user_id}")]
pub async fn update_user(
    service: web::Data<UserService>,
    path: web::Path<String>,
    payload: web::Json<UpdateUserRequest>,
    auth: AuthenticatedUser,
) -> AppResult<HttpResponse> {
    let user_id = path.into_inner();
    auth.ensure_owns(&user_id)?;

    payload
        .validate()
        .map_err(|e| AppError::ValidationError(e.to_string()))?;

    let response = service
        .update_user(&user_id, payload.into_inner())
        .await?;

    Ok(HttpResponse::Ok().json(ApiResponse::ok("프로필 수정 완료", response)))
}
