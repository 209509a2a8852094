//! 사용자 데이터 액세스 계층을 담당하는 리포지토리 모듈
//!
//! - [`UserStore`](user_store::UserStore): 서비스가 사용하는 저장소 포트
//! - [`MongoUserRepository`](user_repo::MongoUserRepository): MongoDB 구현체
//!
//! # Examples
//!
//! ```rust,ignore
//! use crate::repositories::users::{MongoUserRepository, UserStore};
//!
//! let repo = MongoUserRepository::new(database);
//! repo.init().await?;
//! let user = repo.find_by_username("jdoe").await?;
//! ```

pub mod user_repo;
pub mod user_store;

pub use user_repo::MongoUserRepository;
pub use user_store::UserStore;

#[cfg(test)]
pub use user_store::MockUserStore;
