//! 사용자 응답 DTO 모듈
//!
//! 모든 핸들러는 [`ApiResponse`] 봉투로 감싼 JSON을 반환합니다.
use serde::Serialize;

pub mod user_response;

/// 표준 API 응답 봉투
///
/// Spring의 공통 `ApiResponse<T>` 래퍼에 해당합니다.
///
/// ```json
/// {
///   "success": true,
///   "message": "사용자 생성 완료",
///   "data": { ... }
/// }
/// ```
#[derive(Debug, Serialize)]
pub struct ApiResponse<T: Serialize> {
    /// 요청 성공 여부
    pub success: bool,
    /// 사람이 읽을 수 있는 결과 메시지
    pub message: String,
    /// 응답 페이로드
    #[serde(skip_serializing_if = "Option::is_none")]
    pub data: Option<T>,
}

impl<T: Serialize> ApiResponse<T> {
    /// 성공 응답을 생성합니다.
    pub fn ok(message: impl Into<String>, data: T) -> Self {
        Self {
            success: true,
            message: message.into(),
            data: Some(data),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_ok_response_serializes_with_data() {
        let response = ApiResponse::ok("완료", serde_json::json!({"id": "abc"}));
        let json = serde_json::to_value(&response).unwrap();
        assert_eq!(json["success"], true);
        assert_eq!(json["message"], "완료");
        assert_eq!(json["data"]["id"], "abc");
    }
}
