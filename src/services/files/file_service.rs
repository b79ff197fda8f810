//! 파일 업로드 서비스
//!
//! 업로드된 바이트를 저장소(원격 객체 스토리지 또는 로컬 디스크)에
//! 기록하고, 사용자 문서의 `files` 배열에 업로드 기록을 추가합니다.
//!
//! 저장 성공 후 기록 추가가 실패하면 저장소에 고아 객체가 남을 수
//! 있습니다. 업로드 기록에 키가 남으므로 별도 정리 작업으로 회수
//! 가능합니다.
use std::path::{Path, PathBuf};
use std::sync::Arc;

use actix_web::web;
use mongodb::bson::DateTime;

use crate::config::StorageConfig;
use crate::domain::dto::users::response::user_response::UserResponse;
use crate::domain::entities::users::user::{FileBackend, FileRecord};
use crate::errors::{AppError, AppResult};
use crate::repositories::users::UserStore;
use crate::services::storage::{object_storage, ObjectStorageClient};
use crate::utils::string_utils::validate_required_string;

/// 업로드 크기 상한 (10MB)
pub const MAX_UPLOAD_BYTES: usize = 10 * 1024 * 1024;

/// 파일 업로드 서비스
pub struct FileService {
    user_repo: Arc<dyn UserStore>,
    storage: Arc<ObjectStorageClient>,
}

impl FileService {
    /// 의존성을 주입받아 서비스를 생성합니다.
    pub fn new(user_repo: Arc<dyn UserStore>, storage: Arc<ObjectStorageClient>) -> Self {
        Self { user_repo, storage }
    }

    /// 원격 객체 스토리지에 업로드하고 사용자 기록에 추가합니다.
    pub async fn upload_remote(
        &self,
        user_id: &str,
        original_name: &str,
        content_type: &str,
        bytes: Vec<u8>,
    ) -> AppResult<UserResponse> {
        validate_upload(original_name, &bytes)?;
        self.ensure_user_exists(user_id).await?;

        let key = object_storage::object_key(original_name);
        let size = bytes.len() as u64;
        let location = self.storage.put_object(&key, content_type, bytes).await?;

        let record = FileRecord {
            key,
            location,
            original_name: original_name.to_string(),
            content_type: content_type.to_string(),
            size,
            backend: FileBackend::Remote,
            uploaded_at: DateTime::now(),
        };

        self.record_upload(user_id, record).await
    }

    /// 로컬 디스크에 저장하고 사용자 기록에 추가합니다.
    ///
    /// 개발 환경이나 객체 스토리지가 없는 배포에서 사용합니다.
    pub async fn upload_local(
        &self,
        user_id: &str,
        original_name: &str,
        content_type: &str,
        bytes: Vec<u8>,
    ) -> AppResult<UserResponse> {
        validate_upload(original_name, &bytes)?;
        self.ensure_user_exists(user_id).await?;

        let key = object_storage::object_key(original_name);
        let size = bytes.len() as u64;
        let path = local_path(&StorageConfig::upload_dir(), &key);

        let location = web::block(move || write_local_file(&path, &bytes))
            .await
            .map_err(|e| AppError::InternalError(format!("파일 저장 작업 실패: {}", e)))??;

        let record = FileRecord {
            key,
            location,
            original_name: original_name.to_string(),
            content_type: content_type.to_string(),
            size,
            backend: FileBackend::Local,
            uploaded_at: DateTime::now(),
        };

        self.record_upload(user_id, record).await
    }

    /// 업로드 대상 사용자가 존재하는지 먼저 확인합니다.
    ///
    /// 스토리지에 쓰기 전에 확인해 존재하지 않는 사용자에 대한
    /// 고아 객체 생성을 줄입니다.
    async fn ensure_user_exists(&self, user_id: &str) -> AppResult<()> {
        self.user_repo
            .find_by_id(user_id)
            .await?
            .ok_or_else(|| AppError::NotFound("사용자를 찾을 수 없습니다".to_string()))?;
        Ok(())
    }

    async fn record_upload(&self, user_id: &str, record: FileRecord) -> AppResult<UserResponse> {
        let user = self
            .user_repo
            .append_file(user_id, &record)
            .await?
            .ok_or_else(|| AppError::NotFound("사용자를 찾을 수 없습니다".to_string()))?;

        log::info!("📎 파일 업로드 완료: {} ({})", record.original_name, user.username);
        Ok(UserResponse::from(user))
    }
}

/// 업로드 공통 검증
fn validate_upload(original_name: &str, bytes: &[u8]) -> AppResult<()> {
    validate_required_string(original_name, "파일명")?;

    if original_name.contains('/') || original_name.contains('\\') || original_name.contains("..") {
        return Err(AppError::ValidationError(
            "파일명에 경로 문자를 사용할 수 없습니다".to_string(),
        ));
    }

    if bytes.is_empty() {
        return Err(AppError::ValidationError("빈 파일은 업로드할 수 없습니다".to_string()));
    }

    if bytes.len() > MAX_UPLOAD_BYTES {
        return Err(AppError::ValidationError(format!(
            "파일 크기는 {}MB를 초과할 수 없습니다",
            MAX_UPLOAD_BYTES / (1024 * 1024)
        )));
    }

    Ok(())
}

fn local_path(upload_dir: &str, key: &str) -> PathBuf {
    Path::new(upload_dir).join(key)
}

fn write_local_file(path: &Path, bytes: &[u8]) -> AppResult<String> {
    if let Some(parent) = path.parent() {
        std::fs::create_dir_all(parent)
            .map_err(|e| AppError::InternalError(format!("업로드 디렉토리 생성 실패: {}", e)))?;
    }

    std::fs::write(path, bytes)
        .map_err(|e| AppError::InternalError(format!("파일 쓰기 실패: {}", e)))?;

    Ok(path.to_string_lossy().into_owned())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_validate_upload_rejects_empty_filename() {
        assert!(validate_upload("", b"data").is_err());
        assert!(validate_upload("   ", b"data").is_err());
    }

    #[test]
    fn test_validate_upload_rejects_path_traversal() {
        assert!(validate_upload("../etc/passwd", b"data").is_err());
        assert!(validate_upload("a/b.txt", b"data").is_err());
        assert!(validate_upload("a\\b.txt", b"data").is_err());
    }

    #[test]
    fn test_validate_upload_rejects_empty_body() {
        assert!(validate_upload("photo.png", b"").is_err());
    }

    #[test]
    fn test_validate_upload_rejects_oversized_body() {
        let bytes = vec![0u8; MAX_UPLOAD_BYTES + 1];
        assert!(validate_upload("big.bin", &bytes).is_err());
    }

    #[test]
    fn test_validate_upload_accepts_normal_file() {
        assert!(validate_upload("photo.png", b"data").is_ok());
    }

    #[test]
    fn test_local_path_joins_upload_dir() {
        let path = local_path("./uploads", "abc-photo.png");
        assert!(path.to_string_lossy().ends_with("abc-photo.png"));
    }
}
