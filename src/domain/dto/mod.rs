//! # Data Transfer Objects (DTO) Module
//!
//! HTTP API의 요청/응답 데이터 구조를 정의합니다.
//! 요청 DTO는 JSON 역직렬화만 담당하고, 형식 검증은 서비스 계층에서
//! [`validation`](crate::validation) 모듈을 통해 수행합니다.
//!
//! ## 요청/응답 흐름
//!
//! ```text
//! JSON Body ──serde──▶ CreateUserRequest ──UserService──▶ User ──From──▶ UserResponse ──serde──▶ JSON
//! ```

pub mod users;

pub use users::*;
