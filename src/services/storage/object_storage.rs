//! HTTP 객체 스토리지 클라이언트
//!
//! S3 호환 게이트웨이나 MinIO처럼 `PUT {endpoint}/{bucket}/{key}`
//! 형태로 객체를 받는 스토리지에 파일을 업로드합니다.
//! 인증은 Bearer 토큰으로 요청 헤더에 포함됩니다.
use std::time::Duration;

use reqwest::Client;

use crate::config::StorageConfig;
use crate::errors::{AppError, AppResult};

/// 업로드 요청 타임아웃 (초)
const UPLOAD_TIMEOUT_SECS: u64 = 30;

/// 객체 스토리지 클라이언트
pub struct ObjectStorageClient {
    client: Client,
    endpoint: String,
    bucket: String,
    access_key: String,
}

impl ObjectStorageClient {
    /// 환경 변수 설정으로 클라이언트를 생성합니다.
    pub fn from_env() -> AppResult<Self> {
        let client = Client::builder()
            .timeout(Duration::from_secs(UPLOAD_TIMEOUT_SECS))
            .build()
            .map_err(|e| AppError::InternalError(format!("HTTP 클라이언트 생성 실패: {}", e)))?;

        Ok(Self {
            client,
            endpoint: StorageConfig::endpoint(),
            bucket: StorageConfig::bucket(),
            access_key: StorageConfig::access_key(),
        })
    }

    /// 객체를 업로드하고 접근 가능한 URL을 반환합니다.
    ///
    /// 2xx가 아닌 응답은 [`AppError::ExternalServiceError`]로
    /// 변환됩니다. 상태 코드는 서버 로그에만 남습니다.
    pub async fn put_object(
        &self,
        key: &str,
        content_type: &str,
        bytes: Vec<u8>,
    ) -> AppResult<String> {
        let url = object_url(&self.endpoint, &self.bucket, key);

        let response = self
            .client
            .put(&url)
            .header("Authorization", format!("Bearer {}", self.access_key))
            .header("Content-Type", content_type)
            .body(bytes)
            .send()
            .await
            .map_err(|e| AppError::ExternalServiceError(format!("스토리지 요청 실패: {}", e)))?;

        if !response.status().is_success() {
            return Err(AppError::ExternalServiceError(format!(
                "스토리지 업로드 실패: HTTP {}",
                response.status()
            )));
        }

        Ok(url)
    }
}

/// 원본 파일명에 UUID 접두어를 붙여 객체 키를 생성합니다.
///
/// 같은 이름의 파일을 여러 번 업로드해도 기존 객체를 덮어쓰지
/// 않습니다.
pub fn object_key(original_name: &str) -> String {
    format!("{}-{}", uuid::Uuid::new_v4(), original_name)
}

/// 객체의 접근 URL을 생성합니다.
pub fn object_url(endpoint: &str, bucket: &str, key: &str) -> String {
    format!("{}/{}/{}", endpoint.trim_end_matches('/'), bucket, key)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_object_key_is_unique_per_call() {
        let a = object_key("photo.png");
        let b = object_key("photo.png");
        assert_ne!(a, b);
        assert!(a.ends_with("photo.png"));
    }

    #[test]
    fn test_object_url_format() {
        let url = object_url("http://localhost:9000", "attachments", "abc-photo.png");
        assert_eq!(url, "http://localhost:9000/attachments/abc-photo.png");
    }

    #[test]
    fn test_object_url_strips_trailing_slash() {
        let url = object_url("http://localhost:9000/", "attachments", "k");
        assert_eq!(url, "http://localhost:9000/attachments/k");
    }
}
