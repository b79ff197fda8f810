//! 사용자 요청 DTO 모듈

pub mod auth_request;
pub mod create_user_request;
pub mod update_user_request;
