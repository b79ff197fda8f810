//! 인증 핸들러
//!
//! ## 엔드포인트
//!
//! - `POST /api/v1/auth/login`: 자격 증명 로그인 (공개)
use actix_web::{post, web, HttpResponse};
use validator::Validate;

use crate::domain::dto::users::request::auth_request::LoginRequest;
use crate::domain::dto::users::response::user_response::{LoginResponse, UserResponse};
use crate::domain::dto::users::response::ApiResponse;
use crate::errors::{AppError, AppResult};
use crate::services::auth::TokenService;
use crate::services::users::UserService;

/// 자격 증명 로그인
///
/// 이메일/비밀번호를 검증하고 JWT 액세스 토큰을 발급합니다.
#[post("/login")]
pub async fn login(
    user_service: web::Data<UserService>,
    token_service: web::Data<TokenService>,
    payload: web::Json<LoginRequest>,
) -> AppResult<HttpResponse> {
    payload
        .validate()
        .map_err(|e| AppError::ValidationError(e.to_string()))?;

    let user = user_service
        .verify_password(&payload.email, &payload.password)
        .await?;

    let user_id = user
        .id_string()
        .ok_or_else(|| AppError::InternalError("저장되지 않은 사용자입니다".to_string()))?;
    let access_token = token_service.issue_access_token(&user_id, &user.username)?;

    let response = LoginResponse {
        user: UserResponse::from(user),
        access_token,
        token_type: "Bearer".to_string(),
        expires_in: token_service.access_expiry_secs(),
    };

    Ok(HttpResponse::Ok().json(ApiResponse::ok("로그인 성공", response)))
}
