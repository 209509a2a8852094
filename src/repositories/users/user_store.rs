//! 사용자 저장소 포트
//!
//! 서비스 계층이 의존하는 저장소 추상화입니다. 구현체는 다음 계약을 지켜야 합니다.
//!
//! | 연산 | 성공 | 대상 없음 | 실패 |
//! |------|------|-----------|------|
//! | `find_all` | `Vec<User>` (빈 목록 포함) | - | `StoreError::Database` |
//! | `find_by_*` | `Some(User)` | `None` | `StoreError::Database` |
//! | `create` | 식별자/시간이 채워진 `User` | - | `StoreError::Database` (중복 키 포함) |
//! | `update` | `Some(User)` (수정 후 상태) | `None` | `StoreError::Database` |
//! | `delete` | `()` | `StoreError::NoRowsAffected` | `StoreError::Database` |
//!
//! 유일성(username, public_id)은 구현체가 보장하며 서비스는 사전 확인을 하지 않습니다.

use async_trait::async_trait;

use crate::domain::entities::users::{NewUser, User, UserPatch};
use crate::repositories::StoreError;

#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait UserStore: Send + Sync {
    /// 전체 사용자 조회
    async fn find_all(&self) -> Result<Vec<User>, StoreError>;

    async fn find_by_username(&self, username: &str) -> Result<Option<User>, StoreError>;

    async fn find_by_id(&self, id: i64) -> Result<Option<User>, StoreError>;

    async fn find_by_public_id(&self, public_id: &str) -> Result<Option<User>, StoreError>;

    /// 사용자 생성
    ///
    /// `id`, `public_id`, `created_at`, `updated_at`을 부여한 완전한 엔티티를 반환합니다.
    async fn create(&self, user: NewUser) -> Result<User, StoreError>;

    /// 부분 수정
    ///
    /// 패치에 없는 필드는 변경하지 않으며 `updated_at`은 갱신합니다.
    async fn update(&self, public_id: &str, patch: UserPatch) -> Result<Option<User>, StoreError>;

    /// 사용자 삭제, 대상이 없으면 [`StoreError::NoRowsAffected`]
    async fn delete(&self, public_id: &str) -> Result<(), StoreError>;
}
