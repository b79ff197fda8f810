//! 이메일 인증 플로우 서비스
//!
//! 가입 시 인증 토큰 발급/메일 발송과, 인증 링크 클릭 시의
//! 토큰 소비(계정 활성화)를 담당합니다.
//!
//! ## 일회성 보장
//!
//! 활성화는 저장소의 `is_active: false` 조건부 수정으로만 성공하므로,
//! 같은 링크를 두 번 클릭하면 두 번째 요청은 409로 거부됩니다.
//! 별도의 토큰 블랙리스트는 두지 않습니다.
use std::sync::Arc;

use crate::config::MailConfig;
use crate::domain::dto::users::response::user_response::UserResponse;
use crate::domain::entities::users::user::User;
use crate::errors::{AppError, AppResult};
use crate::repositories::users::UserStore;
use crate::services::auth::TokenService;
use crate::services::email::{templates, MailSender};

/// 이메일 인증 서비스
pub struct VerificationService {
    user_repo: Arc<dyn UserStore>,
    token_service: Arc<TokenService>,
    mailer: Arc<dyn MailSender>,
}

impl VerificationService {
    /// 의존성을 주입받아 서비스를 생성합니다.
    pub fn new(
        user_repo: Arc<dyn UserStore>,
        token_service: Arc<TokenService>,
        mailer: Arc<dyn MailSender>,
    ) -> Self {
        Self {
            user_repo,
            token_service,
            mailer,
        }
    }

    /// 인증 토큰을 발급하고 인증 안내 메일을 발송합니다.
    ///
    /// 메일 발송 실패는 가입을 실패시키지 않습니다. 토큰이 응답에
    /// 포함되므로 사용자는 재발송 없이도 인증을 진행할 수 있습니다.
    pub async fn request_verification(&self, user: &User) -> AppResult<String> {
        let user_id = user
            .id_string()
            .ok_or_else(|| AppError::InternalError("저장되지 않은 사용자입니다".to_string()))?;
        let token = self.token_service.issue_verification_token(&user_id)?;
        let link = verification_link(&MailConfig::public_base_url(), &token);

        let body = templates::verification_body(&user.display_name, &link);
        if let Err(e) = self
            .mailer
            .send(&user.email, templates::VERIFICATION_SUBJECT, &body)
            .await
        {
            log::error!("인증 메일 발송 실패 ({}): {}", user.email, e);
        }

        Ok(token)
    }

    /// 인증 토큰을 소비해 계정을 활성화합니다.
    ///
    /// - 토큰이 위조/만료되었으면 401
    /// - 사용자가 존재하지 않으면 404
    /// - 이미 활성화된 계정이면 409
    pub async fn redeem(&self, token: &str) -> AppResult<UserResponse> {
        let claims = self.token_service.decode_verification_token(token)?;

        match self.user_repo.activate(&claims.sub).await? {
            Some(user) => {
                log::info!("✅ 이메일 인증 완료: {}", user.username);

                let body = templates::verified_body(&user.display_name);
                if let Err(e) = self
                    .mailer
                    .send(&user.email, templates::VERIFIED_SUBJECT, &body)
                    .await
                {
                    log::error!("인증 완료 메일 발송 실패 ({}): {}", user.email, e);
                }

                Ok(UserResponse::from(user))
            }
            // 매치 실패 원인을 구분: 사용자 부재 vs 이미 활성화됨
            None => match self.user_repo.find_by_id(&claims.sub).await? {
                None => Err(AppError::NotFound("사용자를 찾을 수 없습니다".to_string())),
                Some(_) => Err(AppError::ConflictError(
                    "이미 인증이 완료된 계정입니다".to_string(),
                )),
            },
        }
    }
}

/// 인증 링크 URL을 생성합니다.
fn verification_link(base_url: &str, token: &str) -> String {
    format!("{}/api/v1/verify/{}", base_url.trim_end_matches('/'), token)
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::sync::Mutex;

    use async_trait::async_trait;
    use mongodb::bson::oid::ObjectId;

    use crate::config::JwtSettings;
    use crate::repositories::users::memory_store::InMemoryUserStore;

    /// 발송된 메일을 기록만 하는 발송기
    struct RecordingMailer {
        sent: Mutex<Vec<(String, String)>>,
    }

    impl RecordingMailer {
        fn new() -> Self {
            Self {
                sent: Mutex::new(Vec::new()),
            }
        }

        fn sent_count(&self) -> usize {
            self.sent.lock().unwrap().len()
        }
    }

    #[async_trait]
    impl MailSender for RecordingMailer {
        async fn send(&self, to: &str, subject: &str, _body: &str) -> AppResult<()> {
            self.sent
                .lock()
                .unwrap()
                .push((to.to_string(), subject.to_string()));
            Ok(())
        }
    }

    /// 항상 발송에 실패하는 발송기
    struct FailingMailer;

    #[async_trait]
    impl MailSender for FailingMailer {
        async fn send(&self, _to: &str, _subject: &str, _body: &str) -> AppResult<()> {
            Err(AppError::ExternalServiceError("SMTP 연결 실패".to_string()))
        }
    }

    fn test_token_service() -> Arc<TokenService> {
        Arc::new(TokenService::new(JwtSettings {
            secret: "test-secret-key".to_string(),
            access_expiry_secs: 3000,
            verification_expiry_secs: 86400,
        }))
    }

    fn pending_user() -> User {
        let mut user = User::new_local(
            "hong@example.com".to_string(),
            "hong_gildong".to_string(),
            "홍길동".to_string(),
            "hash".to_string(),
        );
        user.id = Some(ObjectId::new());
        user
    }

    fn service_with(
        store: Arc<InMemoryUserStore>,
        mailer: Arc<dyn MailSender>,
    ) -> VerificationService {
        VerificationService::new(store, test_token_service(), mailer)
    }

    #[actix_web::test]
    async fn test_first_redeem_activates_and_sends_one_mail() {
        let user = pending_user();
        let user_id = user.id_string().unwrap();
        let store = Arc::new(InMemoryUserStore::with_users(vec![user]));
        let mailer = Arc::new(RecordingMailer::new());
        let service = service_with(store.clone(), mailer.clone());

        let token = test_token_service().issue_verification_token(&user_id).unwrap();
        let response = service.redeem(&token).await.unwrap();

        assert!(response.is_active);
        assert!(store.get(&user_id).unwrap().is_active);
        assert_eq!(mailer.sent_count(), 1);
    }

    #[actix_web::test]
    async fn test_second_redeem_returns_conflict_without_mutation() {
        let user = pending_user();
        let user_id = user.id_string().unwrap();
        let store = Arc::new(InMemoryUserStore::with_users(vec![user]));
        let mailer = Arc::new(RecordingMailer::new());
        let service = service_with(store.clone(), mailer.clone());

        let token = test_token_service().issue_verification_token(&user_id).unwrap();
        service.redeem(&token).await.unwrap();

        let second = service.redeem(&token).await;
        assert!(matches!(second, Err(AppError::ConflictError(_))));

        // 상태는 그대로, 확인 메일도 추가 발송되지 않음
        assert!(store.get(&user_id).unwrap().is_active);
        assert_eq!(mailer.sent_count(), 1);
    }

    #[actix_web::test]
    async fn test_redeem_unknown_user_returns_not_found() {
        let store = Arc::new(InMemoryUserStore::new());
        let mailer = Arc::new(RecordingMailer::new());
        let service = service_with(store, mailer.clone());

        let token = test_token_service()
            .issue_verification_token(&ObjectId::new().to_hex())
            .unwrap();

        let result = service.redeem(&token).await;
        assert!(matches!(result, Err(AppError::NotFound(_))));
        assert_eq!(mailer.sent_count(), 0);
    }

    #[actix_web::test]
    async fn test_redeem_rejects_access_token() {
        let user = pending_user();
        let user_id = user.id_string().unwrap();
        let store = Arc::new(InMemoryUserStore::with_users(vec![user]));
        let service = service_with(store.clone(), Arc::new(RecordingMailer::new()));

        let access_token = test_token_service()
            .issue_access_token(&user_id, "hong_gildong")
            .unwrap();

        let result = service.redeem(&access_token).await;
        assert!(matches!(result, Err(AppError::AuthenticationError(_))));
        assert!(!store.get(&user_id).unwrap().is_active);
    }

    #[actix_web::test]
    async fn test_request_verification_survives_mail_failure() {
        let user = pending_user();
        let store = Arc::new(InMemoryUserStore::with_users(vec![user.clone()]));
        let service = service_with(store, Arc::new(FailingMailer));

        let token = service.request_verification(&user).await.unwrap();

        // 발급된 토큰은 그대로 사용 가능해야 함
        let claims = test_token_service().decode_verification_token(&token).unwrap();
        assert_eq!(claims.sub, user.id_string().unwrap());
    }

    #[test]
    fn test_verification_link_format() {
        let link = verification_link("http://localhost:8080", "tok123");
        assert_eq!(link, "http://localhost:8080/api/v1/verify/tok123");
    }

    #[test]
    fn test_verification_link_strips_trailing_slash() {
        let link = verification_link("https://example.com/", "tok123");
        assert_eq!(link, "https://example.com/api/v1/verify/tok123");
    }
}
