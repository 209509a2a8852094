//! # 사용자 관리 서비스 구현
//!
//! 검증 → 저장소 위임 → 결과 매핑의 한 단계로 이루어진 사용자 CRUD 오케스트레이션입니다.
//!
//! ```text
//! HTTP handler ──▶ UserService ──▶ user_validator (순수 함수)
//!                       │
//!                       ▼
//!                 dyn UserStore (MongoDB / 테스트 픽스처)
//! ```
//!
//! ## 결과 매핑 규칙
//!
//! | 상황 | 반환 |
//! |------|------|
//! | 입력 검증 실패 | `AppError::ValidationError` (저장소 호출 없음) |
//! | 조회/수정 대상 없음 | `AppError::ValidationError("user not found")` |
//! | 삭제 대상 없음 | `AppError::StorageError(StoreError::NoRowsAffected)` 그대로 |
//! | 그 외 저장소 실패 | `AppError::StorageError(..)` 그대로 |
//!
//! 재시도, 중복 사전 확인, 캐싱은 하지 않습니다.

use std::sync::Arc;

use log::{debug, info};

use crate::core::errors::{AppError, AppResult};
use crate::domain::dto::users::request::{CreateUserRequest, UpdateUserRequest};
use crate::domain::entities::users::{NewUser, User, UserPatch};
use crate::repositories::users::UserStore;
use crate::validation::{
    normalize_public_id, validate_create_input, validate_id, validate_update_input,
    validate_username,
};

/// 사용자 관리 비즈니스 로직 서비스
///
/// 상태를 갖지 않으며 저장소 핸들만 공유합니다. `web::Data`로 감싸 모든 워커에서
/// 같은 인스턴스를 사용합니다.
///
/// ```rust,ignore
/// let repo = Arc::new(MongoUserRepository::new(db));
/// let service = UserService::new(repo);
///
/// let user = service.get_by_username("jdoe").await?;
/// ```
#[derive(Clone)]
pub struct UserService {
    store: Arc<dyn UserStore>,
}

impl UserService {
    pub fn new(store: Arc<dyn UserStore>) -> Self {
        Self { store }
    }

    /// 전체 사용자 목록 조회
    ///
    /// 빈 목록도 정상 결과입니다. "user not found"를 만들어내지 않습니다.
    pub async fn get_all(&self) -> AppResult<Vec<User>> {
        let users = self.store.find_all().await?;
        debug!("사용자 목록 조회: {}건", users.len());
        Ok(users)
    }

    pub async fn get_by_username(&self, username: &str) -> AppResult<User> {
        validate_username(username)?;

        debug!("사용자명으로 조회: {}", username);
        self.store
            .find_by_username(username)
            .await?
            .ok_or_else(AppError::user_not_found)
    }

    pub async fn get_by_id(&self, id: i64) -> AppResult<User> {
        validate_id(id)?;

        debug!("ID로 조회: {}", id);
        self.store
            .find_by_id(id)
            .await?
            .ok_or_else(AppError::user_not_found)
    }

    /// 대소문자와 무관하게 조회합니다. UUID는 소문자로 바꿔 저장소에 전달합니다.
    pub async fn get_by_public_id(&self, public_id: &str) -> AppResult<User> {
        let public_id = normalize_public_id(public_id)?;

        debug!("UUID로 조회: {}", public_id);
        self.store
            .find_by_public_id(&public_id)
            .await?
            .ok_or_else(AppError::user_not_found)
    }

    /// 새 사용자 생성
    ///
    /// 세 필드를 username → email → full_name 순서로 검증한 뒤 저장소에 위임합니다.
    ///
    /// # Errors
    ///
    /// * `AppError::ValidationError` - 첫 번째로 실패한 필드의 메시지
    /// * `AppError::StorageError` - 중복 키를 포함한 저장소 실패 (변환 없음)
    pub async fn create(&self, request: CreateUserRequest) -> AppResult<User> {
        validate_create_input(&request.username, &request.email, &request.full_name)?;

        let user = self.store.create(NewUser::from(request)).await?;

        info!("✅ 사용자 생성: id={}, username={}", user.id, user.username);
        Ok(user)
    }

    /// 부분 수정
    ///
    /// 요청에 없거나 빈 문자열인 필드는 기존 값을 유지합니다.
    ///
    /// # Errors
    ///
    /// * `AppError::ValidationError` - UUID/필드 검증 실패, 또는 대상 없음("user not found")
    /// * `AppError::StorageError` - 저장소 실패 (변환 없음)
    pub async fn update(&self, public_id: &str, request: UpdateUserRequest) -> AppResult<User> {
        let public_id = normalize_public_id(public_id)?;
        validate_update_input(
            request.username.as_deref(),
            request.email.as_deref(),
            request.full_name.as_deref(),
        )?;

        let user = self
            .store
            .update(&public_id, UserPatch::from(request))
            .await?
            .ok_or_else(AppError::user_not_found)?;

        info!("✅ 사용자 수정: {}", public_id);
        Ok(user)
    }

    /// 사용자 삭제
    ///
    /// 대상이 없을 때의 `StoreError::NoRowsAffected`는 검증 에러로 바꾸지 않고
    /// 그대로 전달합니다. 전송 계층에서 404로 매핑됩니다.
    pub async fn delete(&self, public_id: &str) -> AppResult<()> {
        let public_id = normalize_public_id(public_id)?;

        self.store.delete(&public_id).await?;

        info!("🗑️ 사용자 삭제: {}", public_id);
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use mockall::predicate::eq;
    use mongodb::bson::DateTime;

    use crate::repositories::StoreError;
    use crate::repositories::users::MockUserStore;
    use crate::test_support::InMemoryUserStore;

    const PUBLIC_ID: &str = "123e4567-e89b-12d3-a456-426614174000";

    fn sample_user() -> User {
        NewUser {
            username: "jdoe".to_string(),
            email: "jdoe@example.com".to_string(),
            full_name: "John Doe".to_string(),
        }
        .into_user(1, PUBLIC_ID.to_string(), DateTime::from_millis(0))
    }

    fn service_with(store: MockUserStore) -> UserService {
        UserService::new(Arc::new(store))
    }

    fn create_request(username: &str, email: &str, full_name: &str) -> CreateUserRequest {
        CreateUserRequest {
            username: username.to_string(),
            email: email.to_string(),
            full_name: full_name.to_string(),
        }
    }

    fn validation_message(result: AppResult<impl std::fmt::Debug>) -> String {
        match result {
            Err(AppError::ValidationError(msg)) => msg,
            other => panic!("expected ValidationError, got {:?}", other),
        }
    }

    #[actix_web::test]
    async fn test_get_by_id_rejects_non_positive_without_storage() {
        let mut store = MockUserStore::new();
        store.expect_find_by_id().never();

        let service = service_with(store);

        assert_eq!(validation_message(service.get_by_id(-5).await), "id must be positive");
    }

    #[actix_web::test]
    async fn test_delete_rejects_malformed_uuid_without_storage() {
        let mut store = MockUserStore::new();
        store.expect_delete().never();

        let service = service_with(store);

        assert_eq!(validation_message(service.delete("not-a-uuid").await), "uuid is invalid");
    }

    #[actix_web::test]
    async fn test_lookup_absence_becomes_user_not_found() {
        let mut store = MockUserStore::new();
        store
            .expect_find_by_username()
            .with(eq("ghost"))
            .times(1)
            .returning(|_| Ok(None));
        store.expect_find_by_id().returning(|_| Ok(None));
        store.expect_find_by_public_id().returning(|_| Ok(None));

        let service = service_with(store);

        assert_eq!(validation_message(service.get_by_username("ghost").await), "user not found");
        assert_eq!(validation_message(service.get_by_id(42).await), "user not found");
        assert_eq!(
            validation_message(service.get_by_public_id(PUBLIC_ID).await),
            "user not found"
        );
    }

    #[actix_web::test]
    async fn test_lookup_storage_failure_passes_through() {
        let mut store = MockUserStore::new();
        store
            .expect_find_by_id()
            .returning(|_| Err(StoreError::Database("connection reset".to_string())));

        let service = service_with(store);

        match service.get_by_id(1).await {
            Err(AppError::StorageError(StoreError::Database(msg))) => {
                assert_eq!(msg, "connection reset")
            }
            other => panic!("expected storage failure, got {:?}", other),
        }
    }

    #[actix_web::test]
    async fn test_get_all_returns_empty_list() {
        let mut store = MockUserStore::new();
        store.expect_find_all().times(1).returning(|| Ok(Vec::new()));

        let service = service_with(store);

        assert!(service.get_all().await.unwrap().is_empty());
    }

    #[actix_web::test]
    async fn test_create_validates_before_storage() {
        let mut store = MockUserStore::new();
        store.expect_create().never();

        let service = service_with(store);

        assert_eq!(
            validation_message(service.create(create_request("jdoe", "not-an-email", "John")).await),
            "email is invalid"
        );
    }

    #[actix_web::test]
    async fn test_create_passes_duplicate_failure_through() {
        let mut store = MockUserStore::new();
        store
            .expect_create()
            .returning(|_| Err(StoreError::Database("E11000 duplicate key".to_string())));

        let service = service_with(store);
        let result = service
            .create(create_request("jdoe", "jdoe@example.com", "John Doe"))
            .await;

        assert!(matches!(result, Err(AppError::StorageError(StoreError::Database(_)))));
    }

    #[actix_web::test]
    async fn test_create_assigns_identifiers() {
        let service = UserService::new(Arc::new(InMemoryUserStore::default()));

        let user = service
            .create(create_request("jdoe", "jdoe@example.com", "John Doe"))
            .await
            .unwrap();

        assert!(user.id > 0);
        assert!(!user.public_id.is_empty());
        assert_eq!(user.username, "jdoe");
        assert!(crate::validation::validate_public_id(&user.public_id).is_ok());
    }

    #[actix_web::test]
    async fn test_update_requires_a_field() {
        let mut store = MockUserStore::new();
        store.expect_update().never();

        let service = service_with(store);
        let request = UpdateUserRequest {
            username: Some(String::new()),
            ..UpdateUserRequest::default()
        };

        assert_eq!(
            validation_message(service.update(PUBLIC_ID, request).await),
            "no fields to update"
        );
    }

    #[actix_web::test]
    async fn test_update_sends_only_provided_fields() {
        let mut store = MockUserStore::new();
        store
            .expect_update()
            .withf(|public_id, patch| {
                public_id == PUBLIC_ID
                    && patch.username.is_none()
                    && patch.email.is_none()
                    && patch.full_name.as_deref() == Some("Johnny Doe")
            })
            .times(1)
            .returning(|_, patch| {
                let mut user = sample_user();
                patch.apply_to(&mut user, DateTime::from_millis(1));
                Ok(Some(user))
            });

        let service = service_with(store);
        let request = UpdateUserRequest {
            username: Some(String::new()),
            email: None,
            full_name: Some("Johnny Doe".to_string()),
        };

        let user = service.update(PUBLIC_ID, request).await.unwrap();
        assert_eq!(user.full_name, "Johnny Doe");
        assert_eq!(user.email, "jdoe@example.com");
    }

    #[actix_web::test]
    async fn test_update_never_clears_omitted_fields() {
        let service = UserService::new(Arc::new(InMemoryUserStore::default()));
        let created = service
            .create(create_request("jdoe", "jdoe@example.com", "John Doe"))
            .await
            .unwrap();

        let updated = service
            .update(
                &created.public_id,
                UpdateUserRequest {
                    email: Some("john@example.org".to_string()),
                    ..UpdateUserRequest::default()
                },
            )
            .await
            .unwrap();

        assert_eq!(updated.email, "john@example.org");
        assert_eq!(updated.username, "jdoe");
        assert_eq!(updated.full_name, "John Doe");
        assert_eq!(updated.created_at, created.created_at);
    }

    #[actix_web::test]
    async fn test_update_absence_becomes_user_not_found() {
        let mut store = MockUserStore::new();
        store.expect_update().returning(|_, _| Ok(None));

        let service = service_with(store);
        let request = UpdateUserRequest {
            full_name: Some("Nobody".to_string()),
            ..UpdateUserRequest::default()
        };

        assert_eq!(validation_message(service.update(PUBLIC_ID, request).await), "user not found");
    }

    #[actix_web::test]
    async fn test_delete_keeps_no_rows_affected() {
        let mut store = MockUserStore::new();
        store
            .expect_delete()
            .with(eq(PUBLIC_ID))
            .times(1)
            .returning(|_| Err(StoreError::NoRowsAffected));

        let service = service_with(store);

        match service.delete(PUBLIC_ID).await {
            Err(AppError::StorageError(StoreError::NoRowsAffected)) => {}
            other => panic!("expected NoRowsAffected, got {:?}", other),
        }
    }

    #[actix_web::test]
    async fn test_uppercase_uuid_reaches_the_same_user() {
        let service = UserService::new(Arc::new(InMemoryUserStore::default()));
        let created = service
            .create(create_request("jdoe", "jdoe@example.com", "John Doe"))
            .await
            .unwrap();
        let upper = created.public_id.to_uppercase();

        let found = service.get_by_public_id(&upper).await.unwrap();
        assert_eq!(found.id, created.id);

        let updated = service
            .update(
                &upper,
                UpdateUserRequest {
                    full_name: Some("Johnny Doe".to_string()),
                    ..UpdateUserRequest::default()
                },
            )
            .await
            .unwrap();
        assert_eq!(updated.full_name, "Johnny Doe");

        service.delete(&upper).await.unwrap();
        assert_eq!(
            validation_message(service.get_by_public_id(&created.public_id).await),
            "user not found"
        );
    }

    #[actix_web::test]
    async fn test_uuid_is_lowercased_before_storage() {
        let mut store = MockUserStore::new();
        store
            .expect_find_by_public_id()
            .with(eq(PUBLIC_ID))
            .times(1)
            .returning(|_| Ok(Some(sample_user())));

        let service = service_with(store);

        assert!(service.get_by_public_id(&PUBLIC_ID.to_uppercase()).await.is_ok());
    }

    #[actix_web::test]
    async fn test_get_by_username_rejects_bad_format_without_storage() {
        let mut store = MockUserStore::new();
        store.expect_find_by_username().never();

        let service = service_with(store);

        assert_eq!(validation_message(service.get_by_username("x").await), "username is invalid");
    }

    #[actix_web::test]
    async fn test_get_by_public_id_rejects_bad_format_without_storage() {
        let mut store = MockUserStore::new();
        store.expect_find_by_public_id().never();

        let service = service_with(store);

        assert_eq!(
            validation_message(service.get_by_public_id("not-a-uuid").await),
            "uuid is invalid"
        );
    }

    #[actix_web::test]
    async fn test_update_rejects_malformed_uuid_without_storage() {
        let mut store = MockUserStore::new();
        store.expect_update().never();

        let service = service_with(store);
        let request = UpdateUserRequest {
            full_name: Some("John".to_string()),
            ..UpdateUserRequest::default()
        };

        assert_eq!(
            validation_message(service.update("not-a-uuid", request).await),
            "uuid is invalid"
        );
    }

    #[actix_web::test]
    async fn test_update_storage_failure_passes_through() {
        let mut store = MockUserStore::new();
        store
            .expect_update()
            .returning(|_, _| Err(StoreError::Database("write conflict".to_string())));

        let service = service_with(store);
        let request = UpdateUserRequest {
            full_name: Some("John".to_string()),
            ..UpdateUserRequest::default()
        };

        match service.update(PUBLIC_ID, request).await {
            Err(AppError::StorageError(StoreError::Database(msg))) => assert_eq!(msg, "write conflict"),
            other => panic!("expected storage failure, got {:?}", other),
        }
    }

    #[actix_web::test]
    async fn test_delete_storage_failure_passes_through() {
        let mut store = MockUserStore::new();
        store
            .expect_delete()
            .returning(|_| Err(StoreError::Database("connection reset".to_string())));

        let service = service_with(store);

        match service.delete(PUBLIC_ID).await {
            Err(AppError::StorageError(StoreError::Database(msg))) => assert_eq!(msg, "connection reset"),
            other => panic!("expected storage failure, got {:?}", other),
        }
    }

    #[actix_web::test]
    async fn test_get_all_storage_failure_passes_through() {
        let mut store = MockUserStore::new();
        store
            .expect_find_all()
            .times(1)
            .returning(|| Err(StoreError::Database("connection refused".to_string())));

        let service = service_with(store);

        match service.get_all().await {
            Err(AppError::StorageError(StoreError::Database(msg))) => assert_eq!(msg, "connection refused"),
            other => panic!("expected storage failure, got {:?}", other),
        }
    }
}
