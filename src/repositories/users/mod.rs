//! 사용자 저장소 모듈

pub mod user_repo;

#[cfg(test)]
pub mod memory_store;

pub use user_repo::{UserRepository, UserStore};
