//! 인증 토큰 서비스 모듈

pub mod token_service;

pub use token_service::TokenService;
