//! 이메일 인증 핸들러
//!
//! ## 엔드포인트
//!
//! - `GET /api/v1/verify/{token}`: 인증 링크 처리 (공개)
use actix_web::{get, web, HttpResponse};

use crate::domain::dto::users::response::ApiResponse;
use crate::errors::AppResult;
use crate::services::users::VerificationService;

/// 이메일 인증 링크 처리
///
/// 메일로 받은 일회성 토큰을 소비해 계정을 활성화합니다.
/// 브라우저에서 바로 열 수 있도록 GET을 사용합니다.
#[get("/{token}")]
pub async fn verify_email(
    service: web::Data<VerificationService>,
    path: web::Path<String>,
) -> AppResult<HttpResponse> {
    let response = service.redeem(&path.into_inner()).await?;

    Ok(HttpResponse::Ok().json(ApiResponse::ok("이메일 인증 완료", response)))
}
