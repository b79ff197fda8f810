//! JWT 인증 토큰 클레임 구조체
//!
//! RFC 7519 JWT 표준 클레임과 용도별 애플리케이션 클레임을 정의합니다.
use serde::{Deserialize, Serialize};

/// 이메일 인증 토큰의 용도 식별자
///
/// 액세스 토큰으로 계정 인증을 수행할 수 없도록,
/// 인증 토큰에만 이 값이 포함되며 사용 시 반드시 검사됩니다.
pub const VERIFICATION_PURPOSE: &str = "account_verify";

/// 액세스 토큰의 클레임(Payload) 구조체
///
/// API 접근용 단기 토큰의 페이로드입니다.
/// 개인정보 보호를 위해 최소한의 정보만 포함합니다.
///
/// ## 클레임 구성
///
/// - `sub`: 토큰의 주체 (사용자 ID)
/// - `username`: 사용자명 (표시 및 로깅용)
/// - `iat`: 토큰 발급 시간 (Unix timestamp)
/// - `exp`: 토큰 만료 시간 (Unix timestamp)
#[derive(Debug, Serialize, Deserialize)]
pub struct AccessClaims {
    /// 토큰의 주체 (사용자 ID)
    pub sub: String,
    /// 사용자명
    pub username: String,
    /// 토큰 발급 시간 (Unix timestamp)
    pub iat: i64,
    /// 토큰 만료 시간 (Unix timestamp)
    pub exp: i64,
}

/// 이메일 인증 토큰의 클레임 구조체
///
/// 가입 시 발송되는 인증 링크에 포함되는 일회성 토큰의 페이로드입니다.
/// `purpose` 클레임으로 액세스 토큰과 구분됩니다.
#[derive(Debug, Serialize, Deserialize)]
pub struct VerificationClaims {
    /// 토큰의 주체 (사용자 ID)
    pub sub: String,
    /// 토큰 용도 ([`VERIFICATION_PURPOSE`]여야 함)
    pub purpose: String,
    /// 토큰 발급 시간 (Unix timestamp)
    pub iat: i64,
    /// 토큰 만료 시간 (Unix timestamp)
    pub exp: i64,
}
