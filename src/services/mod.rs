//! 비즈니스 로직 계층 (Service Layer)
//!
//! Spring의 `@Service` 빈에 해당하는 계층입니다.
//! 각 서비스는 `main`에서 한 번 생성되어 `Arc`로 공유되며,
//! 의존성은 생성자를 통해 명시적으로 주입됩니다.

pub mod auth;
pub mod email;
pub mod files;
pub mod storage;
pub mod users;
