//! 프로필 수정 요청 DTO
//!
//! 모든 필드가 선택사항인 부분 업데이트(PATCH) 요청입니다.
//! 제공된 필드만 `$set` 문서로 변환되어 저장소에 전달됩니다.
use mongodb::bson::{doc, Document};
use serde::Deserialize;
use validator::Validate;

use crate::utils::string_utils::deserialize_optional_string;

/// 프로필 수정 요청 데이터
///
/// `None`인 필드는 변경하지 않습니다. 빈 문자열이나 공백만 있는
/// 값은 역직렬화 단계에서 `None`으로 정규화됩니다.
#[derive(Debug, Deserialize, Validate)]
pub struct UpdateUserRequest {
    /// 변경할 표시 이름
    #[serde(default, deserialize_with = "deserialize_optional_string")]
    #[validate(length(min = 1, max = 50, message = "표시 이름은 1자 이상 50자 이하여야 합니다"))]
    pub display_name: Option<String>,

    /// 변경할 사용자명
    #[serde(default, deserialize_with = "deserialize_optional_string")]
    #[validate(length(min = 3, max = 30, message = "사용자명은 3자 이상 30자 이하여야 합니다"))]
    pub username: Option<String>,
}

impl UpdateUserRequest {
    /// 제공된 필드만 포함하는 `$set` 대상 문서를 생성합니다.
    ///
    /// 변경할 필드가 하나도 없으면 `None`을 반환합니다.
    pub fn into_update_doc(self) -> Option<Document> {
        let mut update = doc! {};

        if let Some(display_name) = self.display_name {
            update.insert("display_name", display_name);
        }
        if let Some(username) = self.username {
            update.insert("username", username);
        }

        if update.is_empty() { None } else { Some(update) }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_into_update_doc_with_all_fields() {
        let req = UpdateUserRequest {
            display_name: Some("새 이름".to_string()),
            username: Some("new_name".to_string()),
        };
        let update = req.into_update_doc().unwrap();
        assert_eq!(update.get_str("display_name").unwrap(), "새 이름");
        assert_eq!(update.get_str("username").unwrap(), "new_name");
    }

    #[test]
    fn test_into_update_doc_with_partial_fields() {
        let req = UpdateUserRequest {
            display_name: Some("새 이름".to_string()),
            username: None,
        };
        let update = req.into_update_doc().unwrap();
        assert!(update.get_str("display_name").is_ok());
        assert!(update.get_str("username").is_err());
    }

    #[test]
    fn test_into_update_doc_with_no_fields() {
        let req = UpdateUserRequest {
            display_name: None,
            username: None,
        };
        assert!(req.into_update_doc().is_none());
    }

    #[test]
    fn test_blank_field_deserializes_to_none() {
        let req: UpdateUserRequest =
            serde_json::from_str(r#"{"display_name": "   "}"#).unwrap();
        assert!(req.display_name.is_none());
    }
}
