use std::future::{ready, Ready};
use actix_web::{Error, FromRequest, HttpMessage, HttpRequest};
use serde::{Deserialize, Serialize};

use crate::errors::{AppError, AppResult};

/// JWT 토큰에서 추출된 사용자 정보
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AuthenticatedUser {
    /// 사용자 고유 ID
    pub user_id: String,

    /// 사용자명
    pub username: String,
}

impl AuthenticatedUser {
    /// 요청 경로의 사용자 ID가 토큰 주체와 일치하는지 확인합니다.
    ///
    /// 다른 계정의 리소스에 접근하려는 경우
    /// [`AppError::AuthorizationError`](403)를 반환합니다.
    pub fn ensure_owns(&self, user_id: &str) -> AppResult<()> {
        if self.user_id == user_id {
            Ok(())
        } else {
            Err(AppError::AuthorizationError(
                "본인 계정에만 접근할 수 있습니다".to_string(),
            ))
        }
    }
}

/// ActixWeb FromRequest trait 구현
impl FromRequest for AuthenticatedUser {
    type Error = Error;
    type Future = Ready<actix_web::Result<Self, Self::Error>>;

    fn from_request(req: &HttpRequest, _payload: &mut actix_web::dev::Payload) -> Self::Future {
        match req.extensions().get::<AuthenticatedUser>() {
            Some(user) => ready(Ok(user.clone())),
            None => ready(Err(actix_web::error::ErrorUnauthorized(
                "인증되지 않은 요청입니다"
            ))),
        }
    }
}
