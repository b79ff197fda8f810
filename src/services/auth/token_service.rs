//! JWT 토큰 발급/검증 서비스
//!
//! Spring Security의 `JwtTokenProvider`에 해당합니다.
//! 두 종류의 HS256 서명 토큰을 다룹니다.
//!
//! - 액세스 토큰: API 접근용 단기 토큰
//! - 인증 토큰: 이메일 인증 링크에 포함되는 일회성 토큰
//!
//! 서명 비밀키와 만료 시간은 환경 변수에서 읽은 [`JwtSettings`]로
//! 주입되며, 코드에 하드코딩되지 않습니다.
use chrono::Utc;
use jsonwebtoken::{decode, encode, DecodingKey, EncodingKey, Header, Validation};

use crate::config::JwtSettings;
use crate::domain::models::token::token::{AccessClaims, VerificationClaims, VERIFICATION_PURPOSE};
use crate::errors::{AppError, AppResult};

/// JWT 토큰 서비스
pub struct TokenService {
    settings: JwtSettings,
}

impl TokenService {
    /// 설정 스냅샷으로 서비스를 생성합니다.
    pub fn new(settings: JwtSettings) -> Self {
        Self { settings }
    }

    /// 액세스 토큰 유효 기간 (초)
    pub fn access_expiry_secs(&self) -> i64 {
        self.settings.access_expiry_secs
    }

    /// 액세스 토큰을 발급합니다.
    pub fn issue_access_token(&self, user_id: &str, username: &str) -> AppResult<String> {
        let now = Utc::now().timestamp();
        let claims = AccessClaims {
            sub: user_id.to_string(),
            username: username.to_string(),
            iat: now,
            exp: now + self.settings.access_expiry_secs,
        };

        encode(
            &Header::default(),
            &claims,
            &EncodingKey::from_secret(self.settings.secret.as_bytes()),
        )
        .map_err(|e| AppError::InternalError(format!("토큰 생성 실패: {}", e)))
    }

    /// 이메일 인증용 일회성 토큰을 발급합니다.
    pub fn issue_verification_token(&self, user_id: &str) -> AppResult<String> {
        let now = Utc::now().timestamp();
        let claims = VerificationClaims {
            sub: user_id.to_string(),
            purpose: VERIFICATION_PURPOSE.to_string(),
            iat: now,
            exp: now + self.settings.verification_expiry_secs,
        };

        encode(
            &Header::default(),
            &claims,
            &EncodingKey::from_secret(self.settings.secret.as_bytes()),
        )
        .map_err(|e| AppError::InternalError(format!("토큰 생성 실패: {}", e)))
    }

    /// 액세스 토큰을 검증하고 클레임을 반환합니다.
    pub fn verify_access_token(&self, token: &str) -> AppResult<AccessClaims> {
        decode::<AccessClaims>(
            token,
            &DecodingKey::from_secret(self.settings.secret.as_bytes()),
            &Validation::default(),
        )
        .map(|data| data.claims)
        .map_err(|e| match e.kind() {
            jsonwebtoken::errors::ErrorKind::ExpiredSignature => {
                AppError::AuthenticationError("토큰이 만료되었습니다".to_string())
            }
            _ => AppError::AuthenticationError("유효하지 않은 토큰입니다".to_string()),
        })
    }

    /// 이메일 인증 토큰을 검증하고 클레임을 반환합니다.
    ///
    /// `purpose` 클레임이 [`VERIFICATION_PURPOSE`]가 아니면 거부합니다.
    /// 액세스 토큰으로 계정을 활성화할 수 없게 하는 방어선입니다.
    pub fn decode_verification_token(&self, token: &str) -> AppResult<VerificationClaims> {
        let claims = decode::<VerificationClaims>(
            token,
            &DecodingKey::from_secret(self.settings.secret.as_bytes()),
            &Validation::default(),
        )
        .map(|data| data.claims)
        .map_err(|e| match e.kind() {
            jsonwebtoken::errors::ErrorKind::ExpiredSignature => {
                AppError::AuthenticationError("인증 링크가 만료되었습니다".to_string())
            }
            _ => AppError::AuthenticationError("유효하지 않은 인증 링크입니다".to_string()),
        })?;

        if claims.purpose != VERIFICATION_PURPOSE {
            return Err(AppError::AuthenticationError(
                "유효하지 않은 인증 링크입니다".to_string(),
            ));
        }

        Ok(claims)
    }
}

/// Authorization 헤더에서 Bearer 토큰을 추출합니다.
pub fn extract_bearer_token(auth_header: &str) -> Option<&str> {
    if auth_header.starts_with("Bearer ") {
        Some(&auth_header[7..])
    } else {
        None
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn test_service() -> TokenService {
        TokenService::new(JwtSettings {
            secret: "test-secret-key".to_string(),
            access_expiry_secs: 3000,
            verification_expiry_secs: 86400,
        })
    }

    #[test]
    fn test_issue_and_verify_access_token() {
        let service = test_service();
        let token = service.issue_access_token("user123", "hong").unwrap();
        let claims = service.verify_access_token(&token).unwrap();

        assert_eq!(claims.sub, "user123");
        assert_eq!(claims.username, "hong");
        assert!(claims.exp > claims.iat);
    }

    #[test]
    fn test_verify_rejects_tampered_token() {
        let service = test_service();
        let token = service.issue_access_token("user123", "hong").unwrap();
        let tampered = format!("{}x", token);

        let result = service.verify_access_token(&tampered);
        assert!(matches!(result, Err(AppError::AuthenticationError(_))));
    }

    #[test]
    fn test_verify_rejects_wrong_secret() {
        let service = test_service();
        let other = TokenService::new(JwtSettings {
            secret: "another-secret".to_string(),
            access_expiry_secs: 3000,
            verification_expiry_secs: 86400,
        });

        let token = service.issue_access_token("user123", "hong").unwrap();
        assert!(other.verify_access_token(&token).is_err());
    }

    #[test]
    fn test_verification_token_round_trip() {
        let service = test_service();
        let token = service.issue_verification_token("user123").unwrap();
        let claims = service.decode_verification_token(&token).unwrap();

        assert_eq!(claims.sub, "user123");
        assert_eq!(claims.purpose, VERIFICATION_PURPOSE);
    }

    #[test]
    fn test_access_token_rejected_as_verification_token() {
        let service = test_service();
        let token = service.issue_access_token("user123", "hong").unwrap();

        let result = service.decode_verification_token(&token);
        assert!(matches!(result, Err(AppError::AuthenticationError(_))));
    }

    #[test]
    fn test_expired_token_rejected() {
        // 기본 검증의 60초 leeway를 넘겨 확실히 만료시킴
        let service = TokenService::new(JwtSettings {
            secret: "test-secret-key".to_string(),
            access_expiry_secs: -120,
            verification_expiry_secs: 86400,
        });

        let token = service.issue_access_token("user123", "hong").unwrap();
        let result = service.verify_access_token(&token);
        assert!(matches!(result, Err(AppError::AuthenticationError(_))));
    }

    #[test]
    fn test_extract_bearer_token() {
        assert_eq!(extract_bearer_token("Bearer abc.def.ghi"), Some("abc.def.ghi"));
        assert_eq!(extract_bearer_token("Basic abc"), None);
        assert_eq!(extract_bearer_token(""), None);
    }
}
