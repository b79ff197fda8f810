//! 테스트용 인메모리 사용자 저장소
//!
//! [`UserStore`] 계약을 메모리 상에서 구현해, 서비스 계층 테스트가
//! 실제 MongoDB 없이 동작하도록 합니다. 활성화는 운영 구현과 같은
//! 조건부 CAS 의미론(미활성일 때만 매치)을 따릅니다.
use std::sync::Mutex;

use async_trait::async_trait;
use mongodb::bson::{oid::ObjectId, DateTime, Document};

use crate::domain::entities::users::user::{FileRecord, User};
use crate::errors::{AppError, AppResult};
use crate::repositories::users::user_repo::{parse_object_id, UserStore};

/// 인메모리 사용자 저장소
pub struct InMemoryUserStore {
    users: Mutex<Vec<User>>,
}

impl InMemoryUserStore {
    /// 빈 저장소를 생성합니다.
    pub fn new() -> Self {
        Self {
            users: Mutex::new(Vec::new()),
        }
    }

    /// 주어진 사용자들이 이미 저장된 상태로 시작합니다.
    pub fn with_users(users: Vec<User>) -> Self {
        Self {
            users: Mutex::new(users),
        }
    }

    /// 저장된 사용자를 ID로 꺼내봅니다 (검증용).
    pub fn get(&self, user_id: &str) -> Option<User> {
        self.users
            .lock()
            .unwrap()
            .iter()
            .find(|u| u.id_string().as_deref() == Some(user_id))
            .cloned()
    }
}

#[async_trait]
impl UserStore for InMemoryUserStore {
    async fn insert(&self, mut user: User) -> AppResult<User> {
        let mut users = self.users.lock().unwrap();

        if users
            .iter()
            .any(|u| u.email == user.email || u.username == user.username)
        {
            return Err(AppError::ConflictError(
                "이미 사용 중인 이메일 또는 사용자명입니다".to_string(),
            ));
        }

        user.id = Some(ObjectId::new());
        users.push(user.clone());
        Ok(user)
    }

    async fn find_by_email(&self, email: &str) -> AppResult<Option<User>> {
        Ok(self
            .users
            .lock()
            .unwrap()
            .iter()
            .find(|u| u.email == email)
            .cloned())
    }

    async fn find_by_id(&self, user_id: &str) -> AppResult<Option<User>> {
        let oid = parse_object_id(user_id)?;
        Ok(self
            .users
            .lock()
            .unwrap()
            .iter()
            .find(|u| u.id == Some(oid))
            .cloned())
    }

    async fn update_by_id(&self, user_id: &str, update: Document) -> AppResult<Option<User>> {
        let oid = parse_object_id(user_id)?;
        let mut users = self.users.lock().unwrap();

        let Some(user) = users.iter_mut().find(|u| u.id == Some(oid)) else {
            return Ok(None);
        };

        if let Ok(display_name) = update.get_str("display_name") {
            user.display_name = display_name.to_string();
        }
        if let Ok(username) = update.get_str("username") {
            user.username = username.to_string();
        }
        user.updated_at = DateTime::now();

        Ok(Some(user.clone()))
    }

    async fn append_file(&self, user_id: &str, record: &FileRecord) -> AppResult<Option<User>> {
        let oid = parse_object_id(user_id)?;
        let mut users = self.users.lock().unwrap();

        let Some(user) = users.iter_mut().find(|u| u.id == Some(oid)) else {
            return Ok(None);
        };

        user.files.push(record.clone());
        user.updated_at = DateTime::now();

        Ok(Some(user.clone()))
    }

    async fn activate(&self, user_id: &str) -> AppResult<Option<User>> {
        let oid = parse_object_id(user_id)?;
        let mut users = self.users.lock().unwrap();

        let Some(user) = users
            .iter_mut()
            .find(|u| u.id == Some(oid) && !u.is_active)
        else {
            return Ok(None);
        };

        user.is_active = true;
        user.updated_at = DateTime::now();

        Ok(Some(user.clone()))
    }
}
