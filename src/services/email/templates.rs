//! 이메일 본문 템플릿
//!
//! 발송되는 모든 메일의 제목/본문을 한곳에서 관리합니다.

/// 인증 안내 메일 제목
pub const VERIFICATION_SUBJECT: &str = "[계정 서비스] 이메일 인증을 완료해주세요";

/// 인증 완료 안내 메일 제목
pub const VERIFIED_SUBJECT: &str = "[계정 서비스] 이메일 인증이 완료되었습니다";

/// 가입 직후 발송되는 인증 안내 메일 본문
pub fn verification_body(display_name: &str, verification_link: &str) -> String {
    format!(
        "{display_name}님, 안녕하세요.\n\
         \n\
         계정 서비스에 가입해주셔서 감사합니다.\n\
         아래 링크를 열어 이메일 인증을 완료해주세요.\n\
         \n\
         {verification_link}\n\
         \n\
         링크는 24시간 동안 유효합니다.\n\
         본인이 가입하지 않았다면 이 메일을 무시하셔도 됩니다.\n"
    )
}

/// 인증 완료 후 발송되는 안내 메일 본문
pub fn verified_body(display_name: &str) -> String {
    format!(
        "{display_name}님, 안녕하세요.\n\
         \n\
         이메일 인증이 완료되어 계정이 활성화되었습니다.\n\
         이제 모든 기능을 사용하실 수 있습니다.\n"
    )
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_verification_body_contains_link() {
        let body = verification_body("홍길동", "http://localhost:8080/api/v1/verify/tok123");
        assert!(body.contains("홍길동"));
        assert!(body.contains("http://localhost:8080/api/v1/verify/tok123"));
        assert!(body.contains("24시간"));
    }

    #[test]
    fn test_verified_body_contains_name() {
        let body = verified_body("홍길동");
        assert!(body.contains("홍길동"));
        assert!(body.contains("활성화"));
    }
}
