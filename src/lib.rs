//! 계정 서비스 백엔드
//!
//! Rust 기반의 사용자 계정 관리 서비스입니다.
//! 회원가입, JWT 토큰 기반 로그인, 이메일 인증, 프로필 관리,
//! 그리고 오브젝트 스토리지 연동 파일 업로드를 제공합니다.
//!
//! # Features
//!
//! - **계정 관리**: 회원가입, 프로필 조회/수정
//! - **JWT 인증**: 액세스 토큰 기반 상태 없는 인증
//! - **이메일 인증**: 가입 시 발송된 링크로 계정을 정확히 1회 활성화
//! - **파일 첨부**: 오브젝트 스토리지 또는 로컬 디스크 업로드 후 계정에 기록
//! - **MongoDB**: 사용자 데이터 영구 저장
//!
//! # Architecture
//!
//! ```text
//! ┌─────────────────┐
//! │   HTTP Routes   │ ← REST API 엔드포인트
//! └─────────────────┘
//!          │
//!          ▼
//! ┌─────────────────┐
//! │    Handlers     │ ← 요청/응답 처리
//! └─────────────────┘
//!          │
//!          ▼
//! ┌─────────────────┐
//! │    Services     │ ← 비즈니스 로직
//! └─────────────────┘
//!          │
//!          ▼
//! ┌─────────────────┐
//! │  Repositories   │ ← 데이터 액세스
//! └─────────────────┘
//!          │
//!          ▼
//! ┌─────────────────┐
//! │     MongoDB     │ ← 저장소
//! └─────────────────┘
//! ```
//!
//! 모든 서비스는 `main`에서 한 번 생성되어 `Arc`로 공유되며,
//! 의존성은 생성자를 통해 명시적으로 주입됩니다.
//!
//! # Examples
//!
//! ```rust,ignore
//! use account_service_backend::services::users::user_service::UserService;
//!
//! // 사용자 생성 및 인증 메일 발송
//! let response = user_service.create_user(request).await?;
//! println!("verification token: {}", response.verification_token);
//! ```

pub mod config;
pub mod db;
pub mod domain;
pub mod repositories;
pub mod services;
pub mod utils;
pub mod routes;
pub mod handlers;
pub mod errors;
pub mod middlewares;
