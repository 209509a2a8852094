//! 사용자 관리 서비스 모듈
//!
//! 입력 검증 후 저장소 포트에 위임하는 사용자 CRUD 오케스트레이션을 제공합니다.
//!
//! # Examples
//!
//! ```rust,ignore
//! use crate::services::users::UserService;
//!
//! let service = UserService::new(Arc::new(MongoUserRepository::new(db)));
//! let users = service.get_all().await?;
//! ```

pub mod user_service;

pub use user_service::UserService;
