//! 사용자 응답 DTO
//!
//! 엔티티를 외부 노출용 구조체로 변환합니다.
//! 비밀번호 해시는 절대 응답에 포함되지 않습니다.
use mongodb::bson::DateTime;
use serde::Serialize;

use crate::domain::entities::users::user::{FileRecord, User};

/// 외부 노출용 사용자 정보
#[derive(Debug, Serialize)]
pub struct UserResponse {
    /// 사용자 고유 ID (ObjectId hex 문자열)
    pub id: String,
    /// 이메일 주소
    pub email: String,
    /// 사용자명
    pub username: String,
    /// 표시 이름
    pub display_name: String,
    /// 이메일 인증 완료 여부
    pub is_active: bool,
    /// 첨부 파일 목록
    pub files: Vec<FileRecordResponse>,
    /// 생성 시각 (RFC 3339)
    pub created_at: String,
    /// 마지막 수정 시각 (RFC 3339)
    pub updated_at: String,
}

/// 외부 노출용 첨부 파일 정보
#[derive(Debug, Serialize)]
pub struct FileRecordResponse {
    /// 저장소 내 객체 키
    pub key: String,
    /// 접근 가능한 위치 (URL 또는 로컬 경로)
    pub location: String,
    /// 업로드 당시 원본 파일명
    pub original_name: String,
    /// MIME 타입
    pub content_type: String,
    /// 파일 크기 (바이트)
    pub size: u64,
    /// 업로드 시각 (RFC 3339)
    pub uploaded_at: String,
}

impl From<FileRecord> for FileRecordResponse {
    fn from(record: FileRecord) -> Self {
        Self {
            key: record.key,
            location: record.location,
            original_name: record.original_name,
            content_type: record.content_type,
            size: record.size,
            uploaded_at: format_datetime(record.uploaded_at),
        }
    }
}

impl From<User> for UserResponse {
    fn from(user: User) -> Self {
        Self {
            id: user.id_string().unwrap_or_default(),
            email: user.email,
            username: user.username,
            display_name: user.display_name,
            is_active: user.is_active,
            files: user.files.into_iter().map(FileRecordResponse::from).collect(),
            created_at: format_datetime(user.created_at),
            updated_at: format_datetime(user.updated_at),
        }
    }
}

/// 회원가입 결과
///
/// `verification_token`은 이메일 발송과 별개로 응답에도 포함되어
/// 개발 환경에서 인증 링크를 바로 확인할 수 있게 합니다.
#[derive(Debug, Serialize)]
pub struct SignupResponse {
    /// 생성된 사용자 정보
    pub user: UserResponse,
    /// 이메일 인증용 일회성 토큰
    pub verification_token: String,
}

/// 로그인 결과
#[derive(Debug, Serialize)]
pub struct LoginResponse {
    /// 인증된 사용자 정보
    pub user: UserResponse,
    /// JWT 액세스 토큰
    pub access_token: String,
    /// 토큰 타입 (항상 "Bearer")
    pub token_type: String,
    /// 토큰 유효 기간 (초)
    pub expires_in: i64,
}

fn format_datetime(dt: DateTime) -> String {
    dt.try_to_rfc3339_string().unwrap_or_default()
}
