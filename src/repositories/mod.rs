//! 데이터 액세스 계층을 담당하는 리포지토리 모듈
//!
//! 서비스 계층은 [`UserStore`](users::UserStore) trait(저장소 포트)에만 의존하고,
//! 실제 저장 방식은 구현체가 결정합니다.
//!
//! # Features
//!
//! - MongoDB 기반 사용자 저장소 ([`MongoUserRepository`](users::MongoUserRepository))
//! - 저장소 에러 분류 ([`StoreError`]): "영향받은 행 없음"과 불투명 실패 구분
//!
//! # Examples
//!
//! ```rust,ignore
//! use std::sync::Arc;
//! use crate::repositories::users::{MongoUserRepository, UserStore};
//!
//! let store: Arc<dyn UserStore> = Arc::new(MongoUserRepository::new(database));
//! let users = store.find_all().await?;
//! ```

pub mod store_error;
pub mod users;

pub use store_error::StoreError;
