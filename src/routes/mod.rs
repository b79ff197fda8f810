//! 라우트 구성 모듈
//!
//! 모든 엔드포인트의 경로와 보호 수준을 한곳에서 정의합니다.
//!
//! | 메서드 | 경로 | 인증 |
//! |--------|------|------|
//! | POST | /api/v1/users | 공개 |
//! | GET | /api/v1/users/{user_id} | Bearer |
//! | PATCH | /api/v1/users/{user_id} | Bearer |
//! | POST | /api/v1/users/{user_id}/files | Bearer |
//! | POST | /api/v1/users/{user_id}/files/local | Bearer |
//! | POST | /api/v1/auth/login | 공개 |
//! | GET | /api/v1/verify/{token} | 공개 |
//! | GET | /health | 공개 |
use std::sync::Arc;

use actix_web::{get, web, HttpResponse, Responder};
use serde_json::json;

use crate::handlers;
use crate::middlewares::AuthMiddleware;
use crate::services::auth::TokenService;
use crate::services::files::FileService;
use crate::services::users::{UserService, VerificationService};

/// 애플리케이션 서비스 컨테이너
///
/// `main`에서 한 번 조립되어 모든 워커에 공유됩니다.
/// Spring의 ApplicationContext에 해당하지만, 리플렉션 대신
/// 생성자에서 명시적으로 조립됩니다.
#[derive(Clone)]
pub struct AppContext {
    pub user_service: Arc<UserService>,
    pub token_service: Arc<TokenService>,
    pub verification_service: Arc<VerificationService>,
    pub file_service: Arc<FileService>,
}

/// 헬스체크 엔드포인트
#[get("/health")]
pub async fn health_check() -> impl Responder {
    HttpResponse::Ok().json(json!({
        "status": "UP",
        "service": "account_service"
    }))
}

/// 전체 라우트를 구성합니다.
pub fn configure_all_routes(cfg: &mut web::ServiceConfig, ctx: &AppContext) {
    let user_service = web::Data::from(ctx.user_service.clone());
    let token_service = web::Data::from(ctx.token_service.clone());
    let verification_service = web::Data::from(ctx.verification_service.clone());
    let file_service = web::Data::from(ctx.file_service.clone());

    cfg.service(health_check)
        .service(
            web::scope("/api/v1/auth")
                .app_data(user_service.clone())
                .app_data(token_service.clone())
                .service(handlers::auth::login),
        )
        .service(
            web::scope("/api/v1/verify")
                .app_data(verification_service)
                .service(handlers::verification::verify_email),
        )
        .service(
            web::scope("/api/v1/users")
                .app_data(user_service)
                .app_data(file_service)
                .service(handlers::users::create_user)
                .service(
                    web::scope("")
                        .wrap(AuthMiddleware::new(ctx.token_service.clone()))
                        .service(handlers::users::get_user)
                        .service(handlers::users::update_user)
                        .service(handlers::files::upload_file)
                        .service(handlers::files::upload_file_local),
                ),
        );
}
