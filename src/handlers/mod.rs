//! HTTP 요청 핸들러 모듈
//!
//! Spring의 `@RestController`에 해당하는 계층입니다.
//! 요청 역직렬화와 검증, 서비스 호출, 응답 봉투 변환만 담당하고
//! 비즈니스 로직은 서비스 계층에 위임합니다.

pub mod auth;
pub mod files;
pub mod users;
pub mod verification;
