//! 실행 환경, 비밀번호 해싱, 서버 바인딩 설정
//!
//! 계정 서비스의 기반 설정을 관리합니다. 모든 값은 환경 변수에서
//! 읽으며, 설정되지 않은 경우 안전한 기본값을 사용합니다.

use std::env;

/// 애플리케이션 실행 환경
#[derive(Debug, Clone, PartialEq)]
pub enum Environment {
    /// 개발 환경
    Development,
    /// 자동화 테스트 환경
    Test,
    /// 스테이징 환경
    Staging,
    /// 프로덕션 환경
    Production,
}

impl Environment {
    /// `ENVIRONMENT` 환경 변수로 현재 실행 환경을 판별합니다.
    ///
    /// 설정되지 않았거나 알 수 없는 값이면 가장 보수적인
    /// `Production`으로 간주합니다.
    pub fn current() -> Self {
        match env::var("ENVIRONMENT") {
            Ok(value) => Self::from_str(&value),
            Err(_) => Environment::Production,
        }
    }

    /// 환경 이름 문자열을 파싱합니다. 대소문자를 구분하지 않습니다.
    pub fn from_str(s: &str) -> Self {
        match s.to_lowercase().as_str() {
            "development" | "dev" => Environment::Development,
            "test" | "testing" => Environment::Test,
            "staging" | "stage" => Environment::Staging,
            _ => Environment::Production,
        }
    }
}

/// 비밀번호 해싱 설정
///
/// bcrypt cost는 보안과 로그인 지연 사이의 트레이드오프입니다.
/// 운영 환경은 높은 cost를, 테스트 환경은 빠른 실행을 위해
/// 최소 cost를 사용합니다.
pub struct PasswordConfig;

impl PasswordConfig {
    /// 현재 환경에 적용할 bcrypt cost를 반환합니다.
    ///
    /// `BCRYPT_COST` 환경 변수가 4..=15 범위의 값이면 그 값을
    /// 우선 사용하고, 아니면 환경별 기본값으로 돌아갑니다.
    pub fn bcrypt_cost() -> u32 {
        let override_cost = env::var("BCRYPT_COST")
            .ok()
            .and_then(|s| s.parse::<u32>().ok())
            .filter(|cost| (4..=15).contains(cost));

        override_cost.unwrap_or_else(|| Self::bcrypt_cost_for_env(&Environment::current()))
    }

    /// 환경별 기본 bcrypt cost
    ///
    /// - Development/Test: 4
    /// - Staging: 10
    /// - Production: 12
    pub fn bcrypt_cost_for_env(env: &Environment) -> u32 {
        match env {
            Environment::Development | Environment::Test => 4,
            Environment::Staging => 10,
            Environment::Production => 12,
        }
    }
}

/// HTTP 서버 바인딩 설정
pub struct ServerConfig;

impl ServerConfig {
    /// 바인딩할 포트. `PORT` 환경 변수, 기본값 8080.
    pub fn port() -> u16 {
        env::var("PORT")
            .unwrap_or_else(|_| "8080".to_string())
            .parse()
            .unwrap_or(8080)
    }

    /// 바인딩할 호스트 주소. `HOST` 환경 변수, 기본값 "0.0.0.0".
    pub fn host() -> String {
        env::var("HOST").unwrap_or_else(|_| "0.0.0.0".to_string())
    }
}
