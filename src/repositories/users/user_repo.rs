//! MongoDB 기반 사용자 저장소
//!
//! `users` 컬렉션에 사용자 문서를 저장합니다. 정수 ID는 `counters` 컬렉션의
//! 시퀀스 문서를 원자적으로 증가시켜 부여하고, 외부 식별자는 UUID v4로 생성합니다.

use std::sync::Arc;

use async_trait::async_trait;
use futures_util::TryStreamExt;
use mongodb::bson::{doc, DateTime, Document};
use mongodb::options::{FindOneAndUpdateOptions, IndexOptions, ReturnDocument};
use mongodb::{Collection, IndexModel};
use uuid::Uuid;

use crate::db::Database;
use crate::domain::entities::users::{NewUser, User, UserPatch};
use crate::repositories::users::UserStore;
use crate::repositories::StoreError;

const USERS_COLLECTION: &str = "users";
const COUNTERS_COLLECTION: &str = "counters";
const USER_SEQUENCE: &str = "users";

pub struct MongoUserRepository {
    db: Arc<Database>,
}

impl MongoUserRepository {
    pub fn new(db: Arc<Database>) -> Self {
        Self { db }
    }

    fn users(&self) -> Collection<User> {
        self.db.get_database().collection::<User>(USERS_COLLECTION)
    }

    fn counters(&self) -> Collection<Document> {
        self.db.get_database().collection::<Document>(COUNTERS_COLLECTION)
    }

    /// 인덱스를 생성합니다. 서버 시작 시 한 번 호출합니다.
    ///
    /// username, public_id, id에 유니크 인덱스를 두어 동시 요청 간 중복을 저장소에서 차단합니다.
    pub async fn init(&self) -> Result<(), StoreError> {
        self.users()
            .create_indexes([
                unique_index("id"),
                unique_index("public_id"),
                unique_index("username"),
            ])
            .await?;

        log::info!("✅ users 컬렉션 인덱스 준비 완료");
        Ok(())
    }

    /// 다음 정수 ID를 발급합니다. 시퀀스 문서가 없으면 만들어서 1부터 시작합니다.
    async fn next_id(&self) -> Result<i64, StoreError> {
        let options = FindOneAndUpdateOptions::builder()
            .upsert(true)
            .return_document(ReturnDocument::After)
            .build();

        let counter = self
            .counters()
            .find_one_and_update(
                doc! { "_id": USER_SEQUENCE },
                doc! { "$inc": { "seq": 1_i64 } },
            )
            .with_options(options)
            .await?
            .ok_or_else(|| StoreError::Database("user sequence was not returned".to_string()))?;

        counter
            .get_i64("seq")
            .map_err(|e| StoreError::Database(format!("user sequence is malformed: {}", e)))
    }
}

#[async_trait]
impl UserStore for MongoUserRepository {
    async fn find_all(&self) -> Result<Vec<User>, StoreError> {
        let cursor = self.users().find(doc! {}).sort(doc! { "id": 1 }).await?;
        let users = cursor.try_collect().await?;
        Ok(users)
    }

    async fn find_by_username(&self, username: &str) -> Result<Option<User>, StoreError> {
        Ok(self.users().find_one(doc! { "username": username }).await?)
    }

    async fn find_by_id(&self, id: i64) -> Result<Option<User>, StoreError> {
        Ok(self.users().find_one(doc! { "id": id }).await?)
    }

    async fn find_by_public_id(&self, public_id: &str) -> Result<Option<User>, StoreError> {
        Ok(self.users().find_one(doc! { "public_id": public_id }).await?)
    }

    async fn create(&self, user: NewUser) -> Result<User, StoreError> {
        let id = self.next_id().await?;
        let user = user.into_user(id, Uuid::new_v4().to_string(), DateTime::now());

        self.users().insert_one(&user).await?;

        log::debug!("사용자 문서 생성: id={}, public_id={}", user.id, user.public_id);
        Ok(user)
    }

    async fn update(&self, public_id: &str, patch: UserPatch) -> Result<Option<User>, StoreError> {
        let options = FindOneAndUpdateOptions::builder()
            .return_document(ReturnDocument::After)
            .build();

        let updated = self
            .users()
            .find_one_and_update(
                doc! { "public_id": public_id },
                doc! { "$set": patch.to_set_document(DateTime::now()) },
            )
            .with_options(options)
            .await?;

        Ok(updated)
    }

    async fn delete(&self, public_id: &str) -> Result<(), StoreError> {
        let result = self.users().delete_one(doc! { "public_id": public_id }).await?;

        if result.deleted_count == 0 {
            return Err(StoreError::NoRowsAffected);
        }
        Ok(())
    }
}

fn unique_index(field: &str) -> IndexModel {
    let mut keys = Document::new();
    keys.insert(field, 1);

    IndexModel::builder()
        .keys(keys)
        .options(
            IndexOptions::builder()
                .unique(true)
                .name(format!("{}_unique", field))
                .build(),
        )
        .build()
}
