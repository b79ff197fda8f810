//! 사용자 서비스 (User Service)
//!
//! 회원가입, 자격 증명 검증, 프로필 조회/수정의 비즈니스 로직을
//! 담당합니다. Spring의 `UserService` @Service 빈에 해당합니다.
//!
//! ## 보안 특성
//!
//! - 비밀번호는 bcrypt 해시로만 저장됩니다
//! - 해싱/검증은 `web::block`으로 블로킹 스레드 풀에서 수행됩니다
//! - 로그인 실패 시 "사용자 없음"과 "비밀번호 불일치"를 같은
//!   메시지로 응답하고, 없는 사용자에 대해서도 더미 해시 검증을
//!   수행해 응답 시간 차이를 줄입니다
use std::sync::Arc;

use actix_web::web;

use crate::config::PasswordConfig;
use crate::domain::dto::users::request::create_user_request::CreateUserRequest;
use crate::domain::dto::users::request::update_user_request::UpdateUserRequest;
use crate::domain::dto::users::response::user_response::{SignupResponse, UserResponse};
use crate::domain::entities::users::user::User;
use crate::errors::{AppError, AppResult};
use crate::repositories::users::UserStore;
use crate::services::users::VerificationService;

/// 로그인 실패 시 공통 응답 메시지
const LOGIN_FAILED_MESSAGE: &str = "이메일 또는 비밀번호가 올바르지 않습니다";

/// 존재하지 않는 사용자의 로그인 시도에 검증할 더미 해시 ("dummy")
const DUMMY_HASH: &str = "$2a$12$R9h/cIPz0gi.URNNX3kh2OPST9/PgBkqquzi.Ss7KIUgO2t0jWMUW";

/// 사용자 서비스
pub struct UserService {
    user_repo: Arc<dyn UserStore>,
    verification: Arc<VerificationService>,
}

impl UserService {
    /// 의존성을 주입받아 서비스를 생성합니다.
    pub fn new(user_repo: Arc<dyn UserStore>, verification: Arc<VerificationService>) -> Self {
        Self {
            user_repo,
            verification,
        }
    }

    /// 회원가입을 처리합니다.
    ///
    /// 1. 비밀번호를 bcrypt로 해싱
    /// 2. 미활성 상태의 사용자 문서 저장 (중복 시 409)
    /// 3. 인증 토큰 발급 및 인증 메일 발송
    pub async fn create_user(&self, request: CreateUserRequest) -> AppResult<SignupResponse> {
        let password = request.password.clone();
        let cost = PasswordConfig::bcrypt_cost();

        let password_hash = web::block(move || bcrypt::hash(password, cost))
            .await
            .map_err(|e| AppError::InternalError(format!("해시 작업 실패: {}", e)))?
            .map_err(|e| AppError::InternalError(format!("비밀번호 해시 실패: {}", e)))?;

        let user = User::new_local(
            request.email,
            request.username,
            request.display_name,
            password_hash,
        );

        let user = self.user_repo.insert(user).await?;
        log::info!("👤 사용자 생성: {}", user.username);

        let verification_token = self.verification.request_verification(&user).await?;

        Ok(SignupResponse {
            user: UserResponse::from(user),
            verification_token,
        })
    }

    /// 이메일/비밀번호 자격 증명을 검증하고 사용자를 반환합니다.
    ///
    /// 사용자가 없거나 비밀번호가 틀린 경우 모두 같은
    /// [`AppError::AuthenticationError`] 메시지를 반환합니다.
    pub async fn verify_password(&self, email: &str, password: &str) -> AppResult<User> {
        let user = self.user_repo.find_by_email(email).await?;

        let (hash, user) = match user {
            Some(user) => (user.password_hash.clone(), Some(user)),
            None => (DUMMY_HASH.to_string(), None),
        };

        let password = password.to_string();
        let matches = web::block(move || bcrypt::verify(password, &hash))
            .await
            .map_err(|e| AppError::InternalError(format!("해시 작업 실패: {}", e)))?
            .unwrap_or(false);

        match user {
            Some(user) if matches => Ok(user),
            _ => Err(AppError::AuthenticationError(LOGIN_FAILED_MESSAGE.to_string())),
        }
    }

    /// ID로 사용자를 조회합니다.
    pub async fn get_user(&self, user_id: &str) -> AppResult<UserResponse> {
        let user = self
            .user_repo
            .find_by_id(user_id)
            .await?
            .ok_or_else(|| AppError::NotFound("사용자를 찾을 수 없습니다".to_string()))?;

        Ok(UserResponse::from(user))
    }

    /// 프로필을 부분 수정합니다.
    pub async fn update_user(
        &self,
        user_id: &str,
        request: UpdateUserRequest,
    ) -> AppResult<UserResponse> {
        let update = request
            .into_update_doc()
            .ok_or_else(|| AppError::ValidationError("변경할 필드가 없습니다".to_string()))?;

        let user = self
            .user_repo
            .update_by_id(user_id, update)
            .await?
            .ok_or_else(|| AppError::NotFound("사용자를 찾을 수 없습니다".to_string()))?;

        log::info!("✏️ 프로필 수정: {}", user.username);
        Ok(UserResponse::from(user))
    }
}
