//! 회원가입 요청 DTO
//!
//! Spring의 `@Valid @RequestBody SignupRequest`에 해당하는 구조체입니다.
//! validator 크레이트의 derive 매크로로 선언적 검증을 수행합니다.
use serde::Deserialize;
use validator::{Validate, ValidationError};

/// 회원가입 요청 데이터
///
/// ## 검증 규칙
///
/// - `email`: 이메일 형식
/// - `username`: 3~30자, 영문/숫자/밑줄/하이픈만 허용
/// - `display_name`: 1~50자
/// - `password`: 8자 이상, 영문자와 숫자를 모두 포함
/// - `password_confirm`: `password`와 일치해야 함
#[derive(Debug, Deserialize, Validate)]
#[validate(schema(function = "validate_password_match"))]
pub struct CreateUserRequest {
    /// 이메일 주소 (로그인 ID로 사용)
    #[validate(email(message = "유효한 이메일 형식이 아닙니다"))]
    pub email: String,

    /// 사용자명 (고유해야 함)
    #[validate(
        length(min = 3, max = 30, message = "사용자명은 3자 이상 30자 이하여야 합니다"),
        custom(function = "validate_username_charset")
    )]
    pub username: String,

    /// 표시 이름
    #[validate(length(min = 1, max = 50, message = "표시 이름은 1자 이상 50자 이하여야 합니다"))]
    pub display_name: String,

    /// 비밀번호 (평문, 저장 전 bcrypt 해싱됨)
    #[validate(
        length(min = 8, message = "비밀번호는 8자 이상이어야 합니다"),
        custom(function = "validate_password_strength")
    )]
    pub password: String,

    /// 비밀번호 확인
    pub password_confirm: String,
}

/// 사용자명 문자 집합 검증
///
/// URL 경로와 로그에 안전하게 쓸 수 있는 문자만 허용합니다.
fn validate_username_charset(username: &str) -> Result<(), ValidationError> {
    let valid = username
        .chars()
        .all(|c| c.is_ascii_alphanumeric() || c == '_' || c == '-');

    if valid {
        Ok(())
    } else {
        Err(ValidationError::new("username_charset")
            .with_message("사용자명은 영문, 숫자, 밑줄(_), 하이픈(-)만 사용할 수 있습니다".into()))
    }
}

/// 비밀번호 강도 검증
fn validate_password_strength(password: &str) -> Result<(), ValidationError> {
    let has_letter = password.chars().any(|c| c.is_ascii_alphabetic());
    let has_digit = password.chars().any(|c| c.is_ascii_digit());

    if has_letter && has_digit {
        Ok(())
    } else {
        Err(ValidationError::new("password_strength")
            .with_message("비밀번호는 영문자와 숫자를 모두 포함해야 합니다".into()))
    }
}

/// 비밀번호 일치 검증 (스키마 레벨)
fn validate_password_match(req: &CreateUserRequest) -> Result<(), ValidationError> {
    if req.password == req.password_confirm {
        Ok(())
    } else {
        Err(ValidationError::new("password_mismatch")
            .with_message("비밀번호와 비밀번호 확인이 일치하지 않습니다".into()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn valid_request() -> CreateUserRequest {
        CreateUserRequest {
            email: "hong@example.com".to_string(),
            username: "hong_gildong".to_string(),
            display_name: "홍길동".to_string(),
            password: "secret1234".to_string(),
            password_confirm: "secret1234".to_string(),
        }
    }

    #[test]
    fn test_valid_request_passes() {
        assert!(valid_request().validate().is_ok());
    }

    #[test]
    fn test_invalid_email_fails() {
        let mut req = valid_request();
        req.email = "not-an-email".to_string();
        assert!(req.validate().is_err());
    }

    #[test]
    fn test_short_username_fails() {
        let mut req = valid_request();
        req.username = "ab".to_string();
        assert!(req.validate().is_err());
    }

    #[test]
    fn test_username_with_space_fails() {
        let mut req = valid_request();
        req.username = "hong gildong".to_string();
        assert!(req.validate().is_err());
    }

    #[test]
    fn test_password_without_digit_fails() {
        let mut req = valid_request();
        req.password = "onlyletters".to_string();
        req.password_confirm = "onlyletters".to_string();
        assert!(req.validate().is_err());
    }

    #[test]
    fn test_password_mismatch_fails() {
        let mut req = valid_request();
        req.password_confirm = "different1234".to_string();
        assert!(req.validate().is_err());
    }

    #[test]
    fn test_empty_display_name_fails() {
        let mut req = valid_request();
        req.display_name = "".to_string();
        assert!(req.validate().is_err());
    }
}
