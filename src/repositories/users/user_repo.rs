//! 사용자 저장소 (User Repository)
//!
//! `users` 컬렉션에 대한 모든 데이터 접근을 담당합니다.
//! Spring Data MongoDB의 `MongoRepository<User, ObjectId>`에 해당합니다.
//!
//! 서비스 계층은 [`UserStore`] trait을 통해서만 저장소를 사용하므로,
//! 테스트에서는 인메모리 구현으로 대체할 수 있습니다.
//!
//! ## 주요 특징
//!
//! - 이메일/사용자명 고유 인덱스 기반 중복 방지
//! - `find_one_and_update`를 이용한 원자적 수정
//! - 인증 활성화는 `is_active: false` 조건부 CAS로 1회만 성공
use std::sync::Arc;

use async_trait::async_trait;
use mongodb::bson::{doc, oid::ObjectId, to_bson, DateTime, Document};
use mongodb::error::{ErrorKind, WriteFailure};
use mongodb::options::{FindOneAndUpdateOptions, IndexOptions, ReturnDocument};
use mongodb::{Collection, IndexModel};

use crate::db::Database;
use crate::domain::entities::users::user::{FileRecord, User};
use crate::errors::{AppError, AppResult};

/// 컬렉션 이름
const COLLECTION_NAME: &str = "users";

/// 사용자 저장소 연산 인터페이스
///
/// 서비스 계층이 필요로 하는 저장소 계약입니다. 운영 환경에서는
/// [`UserRepository`]가, 테스트에서는 인메모리 구현이 사용됩니다.
#[async_trait]
pub trait UserStore: Send + Sync {
    /// 사용자를 삽입하고 생성된 문서를 반환합니다.
    /// 이메일/사용자명 중복 시 [`AppError::ConflictError`]를 반환합니다.
    async fn insert(&self, user: User) -> AppResult<User>;

    /// 이메일로 사용자를 조회합니다.
    async fn find_by_email(&self, email: &str) -> AppResult<Option<User>>;

    /// ID로 사용자를 조회합니다.
    async fn find_by_id(&self, user_id: &str) -> AppResult<Option<User>>;

    /// 사용자 문서를 부분 수정하고 수정된 문서를 반환합니다.
    async fn update_by_id(&self, user_id: &str, update: Document) -> AppResult<Option<User>>;

    /// 사용자의 `files` 배열에 업로드 기록을 추가합니다.
    async fn append_file(&self, user_id: &str, record: &FileRecord) -> AppResult<Option<User>>;

    /// 미활성 사용자를 활성화합니다. 이미 활성화되었거나 없으면 `None`.
    async fn activate(&self, user_id: &str) -> AppResult<Option<User>>;
}

/// MongoDB 기반 사용자 저장소
pub struct UserRepository {
    db: Arc<Database>,
}

impl UserRepository {
    /// 새 저장소 인스턴스를 생성합니다.
    pub fn new(db: Arc<Database>) -> Self {
        Self { db }
    }

    /// users 컬렉션 핸들
    fn collection(&self) -> Collection<User> {
        self.db.get_database().collection(COLLECTION_NAME)
    }

    /// 고유 인덱스를 생성합니다. 서버 기동 시 1회 호출됩니다.
    ///
    /// - `email_unique`: 이메일 중복 가입 방지
    /// - `username_unique`: 사용자명 중복 방지
    /// - `created_at_desc`: 최신순 조회용
    pub async fn create_indexes(&self) -> AppResult<()> {
        let email_index = IndexModel::builder()
            .keys(doc! { "email": 1 })
            .options(
                IndexOptions::builder()
                    .unique(true)
                    .name("email_unique".to_string())
                    .build(),
            )
            .build();

        let username_index = IndexModel::builder()
            .keys(doc! { "username": 1 })
            .options(
                IndexOptions::builder()
                    .unique(true)
                    .name("username_unique".to_string())
                    .build(),
            )
            .build();

        let created_at_index = IndexModel::builder()
            .keys(doc! { "created_at": -1 })
            .options(IndexOptions::builder().name("created_at_desc".to_string()).build())
            .build();

        self.collection()
            .create_indexes(vec![email_index, username_index, created_at_index])
            .await
            .map_err(|e| AppError::DatabaseError(format!("인덱스 생성 실패: {}", e)))?;

        log::info!("✅ users 컬렉션 인덱스 생성 완료");
        Ok(())
    }
}

#[async_trait]
impl UserStore for UserRepository {
    /// 고유 인덱스 위반(11000)은 [`AppError::ConflictError`]로 변환됩니다.
    async fn insert(&self, mut user: User) -> AppResult<User> {
        let result = self.collection().insert_one(&user).await.map_err(|e| {
            if is_duplicate_key(&e) {
                AppError::ConflictError("이미 사용 중인 이메일 또는 사용자명입니다".to_string())
            } else {
                AppError::DatabaseError(format!("사용자 저장 실패: {}", e))
            }
        })?;

        user.id = result.inserted_id.as_object_id();
        Ok(user)
    }

    async fn find_by_email(&self, email: &str) -> AppResult<Option<User>> {
        self.collection()
            .find_one(doc! { "email": email })
            .await
            .map_err(|e| AppError::DatabaseError(format!("사용자 조회 실패: {}", e)))
    }

    async fn find_by_id(&self, user_id: &str) -> AppResult<Option<User>> {
        let oid = parse_object_id(user_id)?;

        self.collection()
            .find_one(doc! { "_id": oid })
            .await
            .map_err(|e| AppError::DatabaseError(format!("사용자 조회 실패: {}", e)))
    }

    /// `update`는 `$set`의 대상 필드 문서입니다. `updated_at`은
    /// 항상 현재 시각으로 갱신됩니다.
    async fn update_by_id(&self, user_id: &str, mut update: Document) -> AppResult<Option<User>> {
        let oid = parse_object_id(user_id)?;
        update.insert("updated_at", DateTime::now());

        let options = FindOneAndUpdateOptions::builder()
            .return_document(ReturnDocument::After)
            .build();

        self.collection()
            .find_one_and_update(doc! { "_id": oid }, doc! { "$set": update })
            .with_options(options)
            .await
            .map_err(|e| {
                if is_duplicate_key(&e) {
                    AppError::ConflictError("이미 사용 중인 사용자명입니다".to_string())
                } else {
                    AppError::DatabaseError(format!("사용자 수정 실패: {}", e))
                }
            })
    }

    async fn append_file(&self, user_id: &str, record: &FileRecord) -> AppResult<Option<User>> {
        let oid = parse_object_id(user_id)?;
        let record_bson = to_bson(record)
            .map_err(|e| AppError::InternalError(format!("파일 기록 직렬화 실패: {}", e)))?;

        let options = FindOneAndUpdateOptions::builder()
            .return_document(ReturnDocument::After)
            .build();

        self.collection()
            .find_one_and_update(
                doc! { "_id": oid },
                doc! {
                    "$push": { "files": record_bson },
                    "$set": { "updated_at": DateTime::now() },
                },
            )
            .with_options(options)
            .await
            .map_err(|e| AppError::DatabaseError(format!("파일 기록 추가 실패: {}", e)))
    }

    /// 필터에 `is_active: false`를 포함해 이미 활성화된 계정에는
    /// 매치되지 않습니다. 반환값이 `None`이면 사용자가 없거나
    /// 이미 활성화된 경우이며, 구분은 호출자가 수행합니다.
    async fn activate(&self, user_id: &str) -> AppResult<Option<User>> {
        let oid = parse_object_id(user_id)?;

        let options = FindOneAndUpdateOptions::builder()
            .return_document(ReturnDocument::After)
            .build();

        self.collection()
            .find_one_and_update(
                doc! { "_id": oid, "is_active": false },
                doc! { "$set": { "is_active": true, "updated_at": DateTime::now() } },
            )
            .with_options(options)
            .await
            .map_err(|e| AppError::DatabaseError(format!("계정 활성화 실패: {}", e)))
    }
}

/// ObjectId hex 문자열 파싱
pub(crate) fn parse_object_id(user_id: &str) -> AppResult<ObjectId> {
    ObjectId::parse_str(user_id)
        .map_err(|_| AppError::ValidationError("유효하지 않은 ID 형식입니다".to_string()))
}

/// MongoDB 중복 키 오류(코드 11000) 여부 판별
fn is_duplicate_key(err: &mongodb::error::Error) -> bool {
    match err.kind.as_ref() {
        ErrorKind::Write(WriteFailure::WriteError(we)) => we.code == 11000,
        ErrorKind::Command(ce) => ce.code == 11000,
        _ => false,
    }
}
