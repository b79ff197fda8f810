//! 파일 업로드 핸들러
//!
//! ## 엔드포인트
//!
//! - `POST /api/v1/users/{user_id}/files`: 원격 스토리지 업로드 (인증 필요)
//! - `POST /api/v1/users/{user_id}/files/local`: 로컬 디스크 업로드 (인증 필요)
//!
//! 요청 본문은 파일 바이트 그대로이며, 파일명은 `filename` 쿼리
//! 파라미터로, MIME 타입은 `Content-Type` 헤더로 전달합니다.
use actix_web::{post, web, HttpRequest, HttpResponse};
use serde::Deserialize;

use crate::domain::dto::users::response::ApiResponse;
use crate::domain::models::auth::authenticated_user::AuthenticatedUser;
use crate::errors::AppResult;
use crate::services::files::FileService;

/// 업로드 쿼리 파라미터
#[derive(Debug, Deserialize)]
pub struct UploadQuery {
    /// 원본 파일명
    pub filename: String,
}

/// 원격 객체 스토리지 업로드 (본인 계정만)
#[post("/{user_id}/files")]
pub async fn upload_file(
    service: web::Data<FileService>,
    path: web::Path<String>,
    query: web::Query<UploadQuery>,
    req: HttpRequest,
    body: web::Bytes,
    auth: AuthenticatedUser,
) -> AppResult<HttpResponse> {
    let user_id = path.into_inner();
    auth.ensure_owns(&user_id)?;

    let response = service
        .upload_remote(&user_id, &query.filename, content_type(&req), body.to_vec())
        .await?;

    Ok(HttpResponse::Created().json(ApiResponse::ok("파일 업로드 완료", response)))
}

/// 로컬 디스크 업로드 (본인 계정만)
#[post("/{user_id}/files/local")]
pub async fn upload_file_local(
    service: web::Data<FileService>,
    path: web::Path<String>,
    query: web::Query<UploadQuery>,
    req: HttpRequest,
    body: web::Bytes,
    auth: AuthenticatedUser,
) -> AppResult<HttpResponse> {
    let user_id = path.into_inner();
    auth.ensure_owns(&user_id)?;

    let response = service
        .upload_local(&user_id, &query.filename, content_type(&req), body.to_vec())
        .await?;

    Ok(HttpResponse::Created().json(ApiResponse::ok("파일 업로드 완료", response)))
}

/// Content-Type 헤더 값 (기본값: application/octet-stream)
fn content_type(req: &HttpRequest) -> &str {
    req.headers()
        .get("Content-Type")
        .and_then(|value| value.to_str().ok())
        .unwrap_or("application/octet-stream")
}
