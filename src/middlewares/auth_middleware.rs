//! JWT 인증 미들웨어 (Transform 팩토리)
//!
//! actix-web의 미들웨어는 Transform(팩토리)과 Service(실행부)의
//! 2단 구조입니다. 이 파일은 팩토리를, [`auth_inner`]는 실행부를
//! 담당합니다.
//!
//! ## 사용 예
//!
//! ```ignore
//! web::scope("/users")
//!     .wrap(AuthMiddleware::new(token_service.clone()))
//!     .service(get_user)
//! ```
//!
//! [`auth_inner`]: crate::middlewares::auth_inner
use std::future::{ready, Ready};
use std::rc::Rc;
use std::sync::Arc;

use actix_web::body::EitherBody;
use actix_web::dev::{Service, ServiceRequest, ServiceResponse, Transform};
use actix_web::Error;

use crate::middlewares::auth_inner::AuthInner;
use crate::services::auth::TokenService;

/// JWT 인증 미들웨어 팩토리
///
/// 토큰이 없거나 유효하지 않으면 401을 반환합니다.
pub struct AuthMiddleware {
    token_service: Arc<TokenService>,
}

impl AuthMiddleware {
    /// 새 인증 미들웨어를 생성합니다.
    pub fn new(token_service: Arc<TokenService>) -> Self {
        Self { token_service }
    }
}

impl<S, B> Transform<S, ServiceRequest> for AuthMiddleware
where
    S: Service<ServiceRequest, Response = ServiceResponse<B>, Error = Error> + 'static,
    B: 'static,
{
    type Response = ServiceResponse<EitherBody<B>>;
    type Error = Error;
    type Transform = AuthInner<S>;
    type InitError = ();
    type Future = Ready<Result<Self::Transform, Self::InitError>>;

    fn new_transform(&self, service: S) -> Self::Future {
        ready(Ok(AuthInner {
            service: Rc::new(service),
            token_service: Arc::clone(&self.token_service),
        }))
    }
}
