//! # Authentication Configuration Module
//!
//! JWT 토큰 관련 설정을 관리하는 모듈입니다.
//! Spring Security의 JWT 설정과 유사한 역할을 수행합니다.
//!
//! ## 토큰 종류
//!
//! 1. **액세스 토큰**: API 접근용 단기 토큰 (기본 3000초)
//! 2. **인증 토큰**: 이메일 계정 인증용 일회성 토큰 (기본 24시간)
//!
//! ## 필수 환경 변수 설정
//!
//! ```bash
//! export JWT_SECRET="your-super-secret-jwt-key"
//! export JWT_EXPIRATION_SECONDS="3000"
//! export VERIFICATION_TOKEN_EXPIRATION_SECONDS="86400"
//! ```
//!
//! ## 사용 예제
//!
//! ```rust,ignore
//! use crate::config::{JwtConfig, JwtSettings};
//!
//! // 기동 시점에 한 번 캡처하여 서비스에 주입
//! let settings = JwtSettings::from_env();
//! let token_service = TokenService::new(settings);
//! ```

use std::env;

/// JSON Web Token (JWT) 관련 설정을 관리하는 구조체
///
/// Spring Security JWT의 설정과 유사한 역할을 수행하며,
/// 토큰 생성, 검증, 만료 시간 등을 관리합니다.
///
/// ## JWT 보안 모범 사례
///
/// 1. **강력한 비밀키 사용**: 최소 256비트 (32바이트) 랜덤 키
/// 2. **적절한 만료 시간**: 액세스 토큰은 짧게, 인증 토큰은 용도에 맞게
/// 3. **환경별로 다른 키 사용**: 개발/운영 키 분리
pub struct JwtConfig;

impl JwtConfig {
    /// JWT 서명에 사용할 비밀키를 반환합니다.
    ///
    /// 이 키는 JWT 토큰의 무결성을 보장하는 핵심 요소입니다.
    /// 강력한 암호화 키를 사용해야 하며, 절대 노출되어서는 안 됩니다.
    ///
    /// # 기본값
    ///
    /// 환경 변수가 설정되지 않은 경우 "your-secret-key"를 사용하지만,
    /// 이는 개발 환경에서만 안전하며 경고 로그가 출력됩니다.
    ///
    /// # 키 생성 예제
    ///
    /// ```bash
    /// # 안전한 JWT 키 생성
    /// openssl rand -base64 32
    /// ```
    ///
    /// # 환경 변수 설정
    ///
    /// ```bash
    /// export JWT_SECRET="your-super-secret-256-bit-key-generated-securely"
    /// ```
    pub fn secret() -> String {
        env::var("JWT_SECRET")
            .unwrap_or_else(|_| {
                log::warn!("JWT_SECRET not set, using default (not secure for production!)");
                "your-secret-key".to_string()
            })
    }

    /// JWT 액세스 토큰의 만료 시간을 초 단위로 반환합니다.
    ///
    /// # 기본값
    ///
    /// 3000초 (50분)
    ///
    /// # 환경 변수 설정
    ///
    /// ```bash
    /// export JWT_EXPIRATION_SECONDS="900"
    /// ```
    pub fn expiration_seconds() -> i64 {
        env::var("JWT_EXPIRATION_SECONDS")
            .unwrap_or_else(|_| "3000".to_string())
            .parse()
            .unwrap_or(3000)
    }

    /// 이메일 인증 토큰의 만료 시간을 초 단위로 반환합니다.
    ///
    /// 가입 시 발송되는 인증 링크의 유효 기간입니다.
    /// 액세스 토큰보다 긴 유효 기간을 가집니다.
    ///
    /// # 기본값
    ///
    /// 86400초 (24시간)
    pub fn verification_expiration_seconds() -> i64 {
        env::var("VERIFICATION_TOKEN_EXPIRATION_SECONDS")
            .unwrap_or_else(|_| "86400".to_string())
            .parse()
            .unwrap_or(86400)
    }
}

/// 기동 시점에 한 번 캡처되는 JWT 설정 스냅샷
///
/// `TokenService`에 생성자로 주입되어, 요청 처리 중에는
/// 환경 변수를 다시 읽지 않습니다.
#[derive(Debug, Clone)]
pub struct JwtSettings {
    /// HMAC-SHA256 서명 비밀키
    pub secret: String,
    /// 액세스 토큰 만료 시간 (초)
    pub access_expiry_secs: i64,
    /// 이메일 인증 토큰 만료 시간 (초)
    pub verification_expiry_secs: i64,
}

impl JwtSettings {
    /// 환경 변수에서 JWT 설정을 읽어옵니다.
    pub fn from_env() -> Self {
        Self {
            secret: JwtConfig::secret(),
            access_expiry_secs: JwtConfig::expiration_seconds(),
            verification_expiry_secs: JwtConfig::verification_expiration_seconds(),
        }
    }
}
