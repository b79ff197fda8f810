//! User Entity Implementation
//!
//! 사용자 엔티티의 핵심 구현체입니다.
//! 이메일 인증 상태와 첨부 파일 기록을 포함하는 통합된 사용자 모델을 제공합니다.

use mongodb::bson::{oid::ObjectId, DateTime};
use serde::{Deserialize, Serialize};

/// 파일이 저장된 백엔드 종류
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum FileBackend {
    /// 외부 오브젝트 스토리지
    Remote,
    /// 서버 로컬 디스크
    Local,
}

/// 사용자 계정에 첨부된 파일 기록
///
/// 업로드가 성공한 뒤에만 생성되며, `files` 배열에 업로드 순서대로 추가됩니다.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct FileRecord {
    /// 저장소 내 고유 키 (uuid 접두사 포함)
    pub key: String,
    /// 파일 접근 위치 (URL 또는 로컬 경로)
    pub location: String,
    /// 업로드 당시의 원본 파일명
    pub original_name: String,
    /// MIME 타입
    pub content_type: String,
    /// 파일 크기 (바이트)
    pub size: u64,
    /// 저장 백엔드
    pub backend: FileBackend,
    /// 업로드 시간
    pub uploaded_at: DateTime,
}

/// 사용자 엔티티
///
/// 시스템의 모든 사용자를 표현하는 핵심 도메인 엔티티입니다.
/// 가입 직후에는 미인증(`is_active: false`) 상태로 시작하며,
/// 이메일 인증 링크 사용 시 정확히 한 번 활성화됩니다.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct User {
    #[serde(rename = "_id", skip_serializing_if = "Option::is_none")]
    pub id: Option<ObjectId>,
    /// 사용자 이메일 (unique)
    pub email: String,
    /// 사용자 이름 (unique)
    pub username: String,
    /// 표시 이름
    pub display_name: String,
    /// 해시된 비밀번호
    pub password_hash: String,
    /// 첨부 파일 기록 (추가만 가능, 업로드 순서 유지)
    pub files: Vec<FileRecord>,
    /// 계정 활성화 여부 (이메일 인증 완료 시 true)
    pub is_active: bool,
    /// 생성 시간
    pub created_at: DateTime,
    /// 수정 시간
    pub updated_at: DateTime,
}

impl User {
    /// 새 로컬 사용자 생성 (이메일/패스워드)
    ///
    /// 이메일 인증이 필요한 미활성 상태로 시작됩니다.
    pub fn new_local(email: String, username: String, display_name: String, password_hash: String) -> Self {
        let now = DateTime::now();

        Self {
            id: None,
            email,
            username,
            display_name,
            password_hash,
            files: Vec::new(),
            is_active: false, // 이메일 인증 전까지 미활성
            created_at: now,
            updated_at: now,
        }
    }

    /// ID 문자열로 변환
    pub fn id_string(&self) -> Option<String> {
        self.id.as_ref().map(|id| id.to_hex())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_new_local_user_starts_inactive() {
        let user = User::new_local(
            "alice@example.com".to_string(),
            "alice_smith".to_string(),
            "Alice Smith".to_string(),
            "hashed".to_string(),
        );

        assert!(!user.is_active);
        assert!(user.files.is_empty());
        assert!(user.id.is_none());
        assert_eq!(user.created_at, user.updated_at);
    }

    #[test]
    fn test_id_string_round_trip() {
        let mut user = User::new_local(
            "bob@example.com".to_string(),
            "bob_smith".to_string(),
            "Bob Smith".to_string(),
            "hashed".to_string(),
        );

        assert_eq!(user.id_string(), None);

        let oid = ObjectId::new();
        user.id = Some(oid);
        assert_eq!(user.id_string(), Some(oid.to_hex()));
    }

    #[test]
    fn test_file_backend_serializes_lowercase() {
        assert_eq!(
            serde_json::to_string(&FileBackend::Remote).unwrap(),
            "\"remote\""
        );
        assert_eq!(
            serde_json::to_string(&FileBackend::Local).unwrap(),
            "\"local\""
        );
    }
}
