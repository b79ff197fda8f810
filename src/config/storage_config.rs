//! 파일 저장소 설정 관리 모듈
//!
//! 외부 오브젝트 스토리지 연결 정보와 로컬 업로드 디렉토리를 관리합니다.
//!
//! ## 환경 변수 설정
//!
//! ```bash
//! export STORAGE_ENDPOINT="https://storage.example.com"
//! export STORAGE_BUCKET="attachments"
//! export STORAGE_ACCESS_KEY="storage-access-key"
//! export UPLOAD_DIR="./uploads"
//! ```

use std::env;

/// 오브젝트 스토리지 및 로컬 업로드 설정
pub struct StorageConfig;

impl StorageConfig {
    /// 오브젝트 스토리지 HTTP 엔드포인트를 반환합니다.
    ///
    /// # 기본값
    ///
    /// "http://localhost:9000" (개발 환경용)
    pub fn endpoint() -> String {
        env::var("STORAGE_ENDPOINT").unwrap_or_else(|_| "http://localhost:9000".to_string())
    }

    /// 업로드 대상 버킷 이름을 반환합니다. 기본값: "attachments"
    pub fn bucket() -> String {
        env::var("STORAGE_BUCKET").unwrap_or_else(|_| "attachments".to_string())
    }

    /// 스토리지 접근 키를 반환합니다.
    ///
    /// Bearer 토큰으로 요청 헤더에 포함됩니다.
    /// 이 값을 로그에 출력하지 마세요.
    pub fn access_key() -> String {
        env::var("STORAGE_ACCESS_KEY").unwrap_or_default()
    }

    /// 로컬 업로드 디렉토리 경로를 반환합니다. 기본값: "./uploads"
    pub fn upload_dir() -> String {
        env::var("UPLOAD_DIR").unwrap_or_else(|_| "./uploads".to_string())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_storage_config_defaults() {
        if env::var("STORAGE_BUCKET").is_err() {
            assert_eq!(StorageConfig::bucket(), "attachments");
        }

        if env::var("UPLOAD_DIR").is_err() {
            assert_eq!(StorageConfig::upload_dir(), "./uploads");
        }
    }
}
