//! 파일 업로드 서비스 모듈

pub mod file_service;

pub use file_service::FileService;
