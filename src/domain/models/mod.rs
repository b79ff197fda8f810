//! 내부 도메인 모델 모듈
//!
//! 토큰 클레임, 인증 컨텍스트 등 API 계약에 직접 노출되지 않는
//! 내부 모델들을 정의합니다.

pub mod auth;
pub mod token;
