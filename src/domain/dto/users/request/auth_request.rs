//! 로그인 요청 DTO
use serde::Deserialize;
use validator::Validate;

/// 자격 증명 로그인 요청 데이터
#[derive(Debug, Deserialize, Validate)]
pub struct LoginRequest {
    /// 이메일 주소
    #[validate(email(message = "유효한 이메일 형식이 아닙니다"))]
    pub email: String,

    /// 비밀번호 (평문)
    #[validate(length(min = 1, message = "비밀번호를 입력해주세요"))]
    pub password: String,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_valid_login_request() {
        let req = LoginRequest {
            email: "hong@example.com".to_string(),
            password: "secret1234".to_string(),
        };
        assert!(req.validate().is_ok());
    }

    #[test]
    fn test_empty_password_fails() {
        let req = LoginRequest {
            email: "hong@example.com".to_string(),
            password: "".to_string(),
        };
        assert!(req.validate().is_err());
    }
}
