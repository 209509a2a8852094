//! 테스트용 인메모리 저장소
//!
//! MongoDB 없이 서비스와 HTTP 계층을 끝까지 실행하기 위한 [`UserStore`] 구현입니다.
//! username과 public_id 유일성은 실제 저장소와 같이 불투명 실패로 보고합니다.

use std::sync::Mutex;

use async_trait::async_trait;
use mongodb::bson::DateTime;
use uuid::Uuid;

use crate::domain::entities::users::{NewUser, User, UserPatch};
use crate::repositories::StoreError;
use crate::repositories::users::UserStore;

#[derive(Default)]
pub struct InMemoryUserStore {
    users: Mutex<Vec<User>>,
}

impl InMemoryUserStore {
    fn lock(&self) -> Result<std::sync::MutexGuard<'_, Vec<User>>, StoreError> {
        self.users
            .lock()
            .map_err(|_| StoreError::Database("in-memory store poisoned".to_string()))
    }

    fn find_by<F>(&self, predicate: F) -> Result<Option<User>, StoreError>
    where
        F: Fn(&User) -> bool,
    {
        Ok(self.lock()?.iter().find(|u| predicate(u)).cloned())
    }
}

#[async_trait]
impl UserStore for InMemoryUserStore {
    async fn find_all(&self) -> Result<Vec<User>, StoreError> {
        Ok(self.lock()?.clone())
    }

    async fn find_by_username(&self, username: &str) -> Result<Option<User>, StoreError> {
        self.find_by(|u| u.username == username)
    }

    async fn find_by_id(&self, id: i64) -> Result<Option<User>, StoreError> {
        self.find_by(|u| u.id == id)
    }

    async fn find_by_public_id(&self, public_id: &str) -> Result<Option<User>, StoreError> {
        self.find_by(|u| u.public_id == public_id)
    }

    async fn create(&self, user: NewUser) -> Result<User, StoreError> {
        let mut users = self.lock()?;
        if users.iter().any(|u| u.username == user.username) {
            return Err(StoreError::Database("duplicate key: username".to_string()));
        }

        let next_id = users.iter().map(|u| u.id).max().unwrap_or(0) + 1;
        let user = user.into_user(next_id, Uuid::new_v4().to_string(), DateTime::now());
        users.push(user.clone());
        Ok(user)
    }

    async fn update(&self, public_id: &str, patch: UserPatch) -> Result<Option<User>, StoreError> {
        let mut users = self.lock()?;

        if let Some(username) = patch.username.as_deref() {
            if users.iter().any(|u| u.username == username && u.public_id != public_id) {
                return Err(StoreError::Database("duplicate key: username".to_string()));
            }
        }

        Ok(users.iter_mut().find(|u| u.public_id == public_id).map(|user| {
            patch.apply_to(user, DateTime::now());
            user.clone()
        }))
    }

    async fn delete(&self, public_id: &str) -> Result<(), StoreError> {
        let mut users = self.lock()?;
        let before = users.len();
        users.retain(|u| u.public_id != public_id);

        if users.len() == before {
            return Err(StoreError::NoRowsAffected);
        }
        Ok(())
    }
}
