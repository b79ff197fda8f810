//! JWT 인증 미들웨어 (Service 실행부)
//!
//! 요청마다 Authorization 헤더의 Bearer 토큰을 검증하고,
//! 성공 시 [`AuthenticatedUser`]를 요청 확장에 삽입합니다.
use std::rc::Rc;
use std::sync::Arc;

use actix_web::body::EitherBody;
use actix_web::dev::{forward_ready, Service, ServiceRequest, ServiceResponse};
use actix_web::{Error, HttpMessage, HttpResponse};
use futures_util::future::LocalBoxFuture;
use serde_json::json;

use crate::domain::models::auth::authenticated_user::AuthenticatedUser;
use crate::services::auth::token_service::extract_bearer_token;
use crate::services::auth::TokenService;

/// 인증 미들웨어 실행부
pub struct AuthInner<S> {
    pub(crate) service: Rc<S>,
    pub(crate) token_service: Arc<TokenService>,
}

impl<S, B> Service<ServiceRequest> for AuthInner<S>
where
    S: Service<ServiceRequest, Response = ServiceResponse<B>, Error = Error> + 'static,
    B: 'static,
{
    type Response = ServiceResponse<EitherBody<B>>;
    type Error = Error;
    type Future = LocalBoxFuture<'static, Result<Self::Response, Self::Error>>;

    forward_ready!(service);

    fn call(&self, req: ServiceRequest) -> Self::Future {
        let service = Rc::clone(&self.service);
        let token_service = Arc::clone(&self.token_service);

        Box::pin(async move {
            match authenticate(&req, &token_service) {
                Ok(user) => {
                    req.extensions_mut().insert(user);
                    service.call(req).await.map(|res| res.map_into_left_body())
                }
                Err(message) => {
                    let (request, _) = req.into_parts();
                    let response = HttpResponse::Unauthorized()
                        .json(json!({
                            "success": false,
                            "error": message,
                        }))
                        .map_into_right_body();

                    Ok(ServiceResponse::new(request, response))
                }
            }
        })
    }
}

/// 요청 헤더에서 토큰을 추출해 검증합니다.
fn authenticate(
    req: &ServiceRequest,
    token_service: &TokenService,
) -> Result<AuthenticatedUser, String> {
    let header = req
        .headers()
        .get("Authorization")
        .and_then(|value| value.to_str().ok())
        .ok_or_else(|| "인증 토큰이 필요합니다".to_string())?;

    let token =
        extract_bearer_token(header).ok_or_else(|| "Bearer 토큰 형식이 아닙니다".to_string())?;

    let claims = token_service
        .verify_access_token(token)
        .map_err(|e| e.to_string())?;

    Ok(AuthenticatedUser {
        user_id: claims.sub,
        username: claims.username,
    })
}
