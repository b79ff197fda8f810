//! 메일 발송 설정 관리 모듈
//!
//! SMTP 서버 연결 정보와 인증 링크 생성에 필요한 공개 URL을 관리합니다.
//!
//! ## 환경 변수 설정
//!
//! ```bash
//! export SMTP_HOST="smtp.example.com"
//! export SMTP_PORT="587"
//! export SMTP_USERNAME="noreply@example.com"
//! export SMTP_PASSWORD="smtp-password"
//! export MAIL_FROM="Account Service <noreply@example.com>"
//! export PUBLIC_BASE_URL="https://yourdomain.com"
//! ```

use std::env;

/// SMTP 메일 발송 설정
pub struct MailConfig;

impl MailConfig {
    /// SMTP 서버 호스트를 반환합니다.
    ///
    /// # 기본값
    ///
    /// "localhost" (개발 환경용)
    pub fn smtp_host() -> String {
        env::var("SMTP_HOST").unwrap_or_else(|_| "localhost".to_string())
    }

    /// SMTP 서버 포트를 반환합니다. 기본값: 587 (STARTTLS)
    pub fn smtp_port() -> u16 {
        env::var("SMTP_PORT")
            .unwrap_or_else(|_| "587".to_string())
            .parse()
            .unwrap_or(587)
    }

    /// SMTP 인증 사용자명을 반환합니다.
    pub fn smtp_username() -> String {
        env::var("SMTP_USERNAME").unwrap_or_default()
    }

    /// SMTP 인증 비밀번호를 반환합니다.
    ///
    /// 이 값을 로그에 출력하지 마세요.
    pub fn smtp_password() -> String {
        env::var("SMTP_PASSWORD").unwrap_or_default()
    }

    /// 발신자 주소를 반환합니다.
    ///
    /// # 기본값
    ///
    /// "Account Service <noreply@localhost>"
    pub fn mail_from() -> String {
        env::var("MAIL_FROM")
            .unwrap_or_else(|_| "Account Service <noreply@localhost>".to_string())
    }

    /// 인증 링크 생성에 사용할 공개 베이스 URL을 반환합니다.
    ///
    /// 인증 메일에 포함되는 링크는
    /// `{PUBLIC_BASE_URL}/api/v1/verify/{token}` 형식으로 생성됩니다.
    ///
    /// # 기본값
    ///
    /// "http://localhost:8080" (개발 환경용)
    pub fn public_base_url() -> String {
        env::var("PUBLIC_BASE_URL").unwrap_or_else(|_| "http://localhost:8080".to_string())
    }
}
