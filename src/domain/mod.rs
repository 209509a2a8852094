//! # Domain Layer Module
//!
//! 도메인 계층을 구성하는 모듈로, 사용자 엔티티와 HTTP 요청/응답 DTO를 담당합니다.
//!
//! ## 아키텍처 개요
//!
//! ```text
//! Domain Layer (이 모듈)
//! ├── Entities      - 저장소에 기록되는 사용자 엔티티와 생성/수정 입력
//! └── DTOs          - 데이터 전송 객체 (Request/Response)
//!      │
//!      ▼
//! Application Layer (Services)
//!      │
//!      ▼
//! Infrastructure Layer (Repositories, DB)
//! ```
//!
//! ## 모듈 구성
//!
//! ### [`entities`] - 핵심 도메인 엔티티
//!
//! - [`User`](entities::users::User): 저장된 사용자. `id`, `public_id`, 타임스탬프는 저장소가 부여
//! - [`NewUser`](entities::users::NewUser): 생성 요청으로부터 만든 골격
//! - [`UserPatch`](entities::users::UserPatch): 부분 수정 내용
//!
//! ### [`dto`] - API 계약
//!
//! - `CreateUserRequest` / `UpdateUserRequest`: 클라이언트 입력 (저장되지 않음)
//! - `UserResponse`: 응답 본문 (`id`, `uuid`, `username`, `email`, `full_name`, 타임스탬프)
//!
//! ## 사용 예제
//!
//! ```rust,ignore
//! use crate::domain::dto::users::request::CreateUserRequest;
//! use crate::domain::dto::users::response::UserResponse;
//!
//! let request: CreateUserRequest = serde_json::from_str(body)?;
//! let user = user_service.create(request).await?;
//! let body = UserResponse::from(user);
//! ```

pub mod entities;
pub mod dto;

pub use entities::users::{NewUser, User, UserPatch};
