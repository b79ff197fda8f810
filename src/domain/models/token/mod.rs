//! JWT 토큰 클레임 모델 모듈

pub mod token;
