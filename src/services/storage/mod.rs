//! 객체 스토리지 클라이언트 모듈

pub mod object_storage;

pub use object_storage::ObjectStorageClient;
