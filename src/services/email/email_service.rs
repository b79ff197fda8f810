//! SMTP 이메일 발송 서비스
//!
//! Spring의 `JavaMailSender`에 해당합니다. [`MailSender`] trait 뒤에
//! 실제 전송을 숨겨 테스트에서는 가짜 구현으로 대체할 수 있습니다.
use std::time::Duration;

use async_trait::async_trait;
use lettre::message::header::ContentType;
use lettre::transport::smtp::authentication::Credentials;
use lettre::transport::smtp::PoolConfig;
use lettre::{AsyncSmtpTransport, AsyncTransport, Message, Tokio1Executor};

use crate::config::MailConfig;
use crate::errors::{AppError, AppResult};

/// 이메일 발송 인터페이스
#[async_trait]
pub trait MailSender: Send + Sync {
    /// 평문 이메일 한 통을 발송합니다.
    async fn send(&self, to: &str, subject: &str, body: &str) -> AppResult<()>;
}

/// SMTP 기반 발송 구현
pub struct SmtpMailer {
    transport: AsyncSmtpTransport<Tokio1Executor>,
    from: String,
}

impl SmtpMailer {
    /// 환경 변수 설정으로 SMTP 커넥션 풀을 구성합니다.
    pub fn from_env() -> AppResult<Self> {
        let host = MailConfig::smtp_host();

        let transport = AsyncSmtpTransport::<Tokio1Executor>::relay(&host)
            .map_err(|e| AppError::InternalError(format!("SMTP 설정 오류: {}", e)))?
            .credentials(Credentials::new(
                MailConfig::smtp_username(),
                MailConfig::smtp_password(),
            ))
            .port(MailConfig::smtp_port())
            .pool_config(PoolConfig::new().max_size(4))
            .timeout(Some(Duration::from_secs(10)))
            .build();

        Ok(Self {
            transport,
            from: MailConfig::mail_from(),
        })
    }
}

#[async_trait]
impl MailSender for SmtpMailer {
    async fn send(&self, to: &str, subject: &str, body: &str) -> AppResult<()> {
        let message = Message::builder()
            .from(
                self.from
                    .parse()
                    .map_err(|e| AppError::InternalError(format!("발신 주소 오류: {}", e)))?,
            )
            .to(to
                .parse()
                .map_err(|e| AppError::ValidationError(format!("수신 주소 오류: {}", e)))?)
            .subject(subject)
            .header(ContentType::TEXT_PLAIN)
            .body(body.to_string())
            .map_err(|e| AppError::InternalError(format!("메일 생성 실패: {}", e)))?;

        self.transport
            .send(message)
            .await
            .map_err(|e| AppError::ExternalServiceError(format!("메일 발송 실패: {}", e)))?;

        log::debug!("📧 메일 발송 완료: {}", subject);
        Ok(())
    }
}
