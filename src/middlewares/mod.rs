//! HTTP 미들웨어 모듈
//!
//! Spring Security의 필터 체인에 해당합니다.
//! 보호 라우트에 [`AuthMiddleware`]를 `wrap`하면 JWT 검증 후
//! [`AuthenticatedUser`]가 요청 확장에 삽입됩니다.
//!
//! [`AuthenticatedUser`]: crate::domain::models::auth::authenticated_user::AuthenticatedUser

pub mod auth_inner;
pub mod auth_middleware;

pub use auth_middleware::AuthMiddleware;
