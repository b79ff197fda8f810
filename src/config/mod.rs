//! # Configuration Module
//!
//! 계정 서비스의 설정 관리를 담당하는 모듈입니다.
//! Spring Framework의 `@Configuration` 클래스와 유사한 역할을 수행하며,
//! 환경 변수 기반의 설정값들을 중앙집중식으로 관리합니다.
//!
//! ## 모듈 구성
//!
//! - [`data_config`] - 데이터베이스, 서버, 환경 관련 설정
//! - [`auth_config`] - JWT 토큰 관련 설정
//! - [`mail_config`] - SMTP 메일 발송 관련 설정
//! - [`storage_config`] - 오브젝트 스토리지 및 로컬 업로드 설정
//!
//! ## 설계 원칙
//!
//! ### 1. 환경 분리 (Environment Separation)
//!
//! 개발, 테스트, 스테이징, 프로덕션 환경별로 다른 설정값을 제공합니다.
//! Spring Profile과 유사한 방식으로 동작합니다.
//!
//! ### 2. 보안 우선 (Security First)
//!
//! - 민감한 정보는 환경 변수로만 제공
//! - 기본값은 개발 환경에서만 안전
//! - 서명 비밀키가 누락된 경우 경고 로그 출력
//!
//! ### 3. 타입 안전성 (Type Safety)
//!
//! - 설정값의 타입 검증
//! - 런타임 설정값 파싱 오류 처리
//!
//! ## 환경 변수 설정 가이드
//!
//! ### 필수 환경 변수 (프로덕션)
//!
//! ```bash
//! # 서버 설정
//! export HOST="0.0.0.0"
//! export PORT="8080"
//!
//! # JWT 설정
//! export JWT_SECRET="your-super-secret-key"
//! export JWT_EXPIRATION_SECONDS="3000"
//!
//! # 메일 설정
//! export SMTP_HOST="smtp.example.com"
//! export SMTP_USERNAME="noreply@example.com"
//! export SMTP_PASSWORD="smtp-password"
//! export PUBLIC_BASE_URL="https://yourdomain.com"
//!
//! # 오브젝트 스토리지 설정
//! export STORAGE_ENDPOINT="https://storage.example.com"
//! export STORAGE_BUCKET="attachments"
//! export STORAGE_ACCESS_KEY="storage-access-key"
//! ```
//!
//! ### 선택적 환경 변수
//!
//! ```bash
//! export ENVIRONMENT="production"  # development, test, staging, production
//! export BCRYPT_COST="12"          # 4-15 범위
//! export VERIFICATION_TOKEN_EXPIRATION_SECONDS="86400"
//! export UPLOAD_DIR="./uploads"
//! ```

pub mod data_config;
pub mod auth_config;
pub mod mail_config;
pub mod storage_config;

pub use data_config::*;
pub use auth_config::*;
pub use mail_config::*;
pub use storage_config::*;
