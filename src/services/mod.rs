//! 비즈니스 로직을 담당하는 서비스 계층 모듈
//!
//! 서비스는 생성 시 저장소 포트를 주입받으며 상태를 갖지 않습니다.
//!
//! # Examples
//!
//! ```rust,ignore
//! use crate::services::users::UserService;
//!
//! let user_service = UserService::new(store);
//! let user = user_service.get_by_id(1).await?;
//! ```

pub mod users;
