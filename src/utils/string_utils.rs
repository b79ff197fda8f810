//! 문자열 처리 유틸리티
use serde::{Deserialize, Deserializer};

use crate::errors::{AppError, AppResult};

/// 필수 문자열 필드 검증
///
/// 빈 문자열이나 공백만 있는 값은 [`AppError::ValidationError`]를
/// 반환합니다.
pub fn validate_required_string(value: &str, field_name: &str) -> AppResult<()> {
    if value.trim().is_empty() {
        Err(AppError::ValidationError(format!(
            "{}은(는) 필수 입력 항목입니다",
            field_name
        )))
    } else {
        Ok(())
    }
}

/// 선택적 문자열 정리
///
/// 공백을 제거하고, 빈 값이면 `None`을 반환합니다.
pub fn clean_optional_string(value: Option<String>) -> Option<String> {
    value.and_then(|s| {
        let trimmed = s.trim();
        if trimmed.is_empty() {
            None
        } else {
            Some(trimmed.to_string())
        }
    })
}

/// serde 역직렬화 시 공백/빈 문자열을 `None`으로 정규화합니다.
///
/// ```ignore
/// #[serde(default, deserialize_with = "deserialize_optional_string")]
/// pub display_name: Option<String>,
/// ```
pub fn deserialize_optional_string<'de, D>(deserializer: D) -> Result<Option<String>, D::Error>
where
    D: Deserializer<'de>,
{
    let value = Option::<String>::deserialize(deserializer)?;
    Ok(clean_optional_string(value))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_validate_required_string_rejects_blank() {
        assert!(validate_required_string("", "이름").is_err());
        assert!(validate_required_string("   ", "이름").is_err());
        assert!(validate_required_string("홍길동", "이름").is_ok());
    }

    #[test]
    fn test_clean_optional_string() {
        assert_eq!(clean_optional_string(None), None);
        assert_eq!(clean_optional_string(Some("".to_string())), None);
        assert_eq!(clean_optional_string(Some("  ".to_string())), None);
        assert_eq!(
            clean_optional_string(Some("  hello  ".to_string())),
            Some("hello".to_string())
        );
    }
}
