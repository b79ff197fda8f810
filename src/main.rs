//! 계정 서비스 백엔드 서버 엔트리포인트
//!
//! 환경 설정 로드, 서비스 조립, HTTP 서버 기동을 담당합니다.
//! Spring Boot의 `@SpringBootApplication` main 클래스에 해당하지만,
//! 빈 스캔 대신 모든 의존성을 이곳에서 명시적으로 조립합니다.
use std::sync::Arc;

use actix_cors::Cors;
use actix_governor::{Governor, GovernorConfigBuilder};
use actix_web::middleware::{Logger, NormalizePath};
use actix_web::{web, App, HttpServer};

use account_service_backend::config::{Environment, JwtSettings, ServerConfig};
use account_service_backend::db::Database;
use account_service_backend::repositories::users::UserRepository;
use account_service_backend::routes::{configure_all_routes, AppContext};
use account_service_backend::services::auth::TokenService;
use account_service_backend::services::email::SmtpMailer;
use account_service_backend::services::files::FileService;
use account_service_backend::services::storage::ObjectStorageClient;
use account_service_backend::services::users::{UserService, VerificationService};

/// PROFILE 환경 변수에 따라 .env 파일을 로드합니다.
///
/// - `dev` (기본값): `.env.dev`
/// - `prod`: `.env.prod`
fn load_env_file() {
    let profile = std::env::var("PROFILE").unwrap_or_else(|_| "dev".to_string());
    let env_file = match profile.as_str() {
        "prod" => ".env.prod",
        _ => ".env.dev",
    };

    if dotenv::from_filename(env_file).is_ok() {
        println!("📋 환경 파일 로드: {}", env_file);
    } else {
        println!("⚠️ 환경 파일 없음: {} (시스템 환경 변수 사용)", env_file);
    }
}

/// 로깅 초기화
fn init_logging() {
    env_logger::Builder::from_env(
        env_logger::Env::default().default_filter_or("info,actix_web=debug"),
    )
    .init();
}

/// CORS 정책 구성
fn configure_cors() -> Cors {
    match Environment::current() {
        Environment::Production => {
            let origin = std::env::var("CORS_ALLOWED_ORIGIN")
                .unwrap_or_else(|_| "https://localhost".to_string());

            Cors::default()
                .allowed_origin(&origin)
                .allowed_methods(vec!["GET", "POST", "PATCH"])
                .allow_any_header()
                .max_age(3600)
        }
        _ => Cors::permissive(),
    }
}

#[actix_web::main]
async fn main() -> std::io::Result<()> {
    load_env_file();
    init_logging();

    log::info!("🚀 계정 서비스 시작 중...");

    let database = Arc::new(
        Database::new()
            .await
            .map_err(|e| std::io::Error::new(std::io::ErrorKind::Other, e.to_string()))?,
    );

    // 서비스 조립 (명시적 생성자 주입)
    let user_repo = Arc::new(UserRepository::new(database.clone()));
    let token_service = Arc::new(TokenService::new(JwtSettings::from_env()));
    let mailer = Arc::new(
        SmtpMailer::from_env()
            .map_err(|e| std::io::Error::new(std::io::ErrorKind::Other, e.to_string()))?,
    );
    let storage = Arc::new(
        ObjectStorageClient::from_env()
            .map_err(|e| std::io::Error::new(std::io::ErrorKind::Other, e.to_string()))?,
    );

    let verification_service = Arc::new(VerificationService::new(
        user_repo.clone(),
        token_service.clone(),
        mailer,
    ));
    let user_service = Arc::new(UserService::new(
        user_repo.clone(),
        verification_service.clone(),
    ));
    let file_service = Arc::new(FileService::new(user_repo.clone(), storage));

    user_repo
        .create_indexes()
        .await
        .map_err(|e| std::io::Error::new(std::io::ErrorKind::Other, e.to_string()))?;

    let ctx = AppContext {
        user_service,
        token_service,
        verification_service,
        file_service,
    };

    let governor_config = GovernorConfigBuilder::default()
        .per_second(2)
        .burst_size(20)
        .finish()
        .ok_or_else(|| {
            std::io::Error::new(std::io::ErrorKind::Other, "레이트 리밋 설정 오류")
        })?;

    let host = ServerConfig::host();
    let port = ServerConfig::port();
    log::info!("🌐 서버 주소: http://{}:{}", host, port);

    HttpServer::new(move || {
        let ctx = ctx.clone();

        App::new()
            .wrap(Logger::default())
            .wrap(configure_cors())
            .wrap(Governor::new(&governor_config))
            .wrap(NormalizePath::trim())
            .app_data(web::PayloadConfig::new(12 * 1024 * 1024))
            .configure(move |cfg| configure_all_routes(cfg, &ctx))
    })
    .workers(4)
    .bind((host, port))?
    .run()
    .await
}
