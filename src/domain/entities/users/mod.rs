//! Users Entity Module
//!
//! 사용자 도메인의 핵심 엔티티를 정의하는 모듈입니다.
//!
//! # 주요 구성 요소
//!
//! - [`User`](user::User): 저장된 사용자
//! - [`NewUser`](user::NewUser): 생성 시 저장소에 전달되는 골격
//! - [`UserPatch`](user::UserPatch): 부분 수정 내용
//!
//! # 사용 예제
//!
//! ```rust,ignore
//! use crate::domain::entities::users::{NewUser, UserPatch};
//!
//! let skeleton = NewUser {
//!     username: "jdoe".to_string(),
//!     email: "jdoe@example.com".to_string(),
//!     full_name: "John Doe".to_string(),
//! };
//! let patch = UserPatch { full_name: Some("Johnny".to_string()), ..Default::default() };
//! ```

pub mod user;

pub use user::{NewUser, User, UserPatch};
