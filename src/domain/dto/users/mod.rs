//! # 사용자 DTO 모듈
//!
//! 사용자 리소스의 요청/응답 DTO를 묶습니다.
//!
//! | 방향 | 타입 | 용도 |
//! |------|------|------|
//! | 요청 | `CreateUserRequest` | `POST /api/v1/users` |
//! | 요청 | `UpdateUserRequest` | `PATCH /api/v1/users/{uuid}` |
//! | 응답 | `UserResponse` | 모든 사용자 조회/생성/수정 응답 |

pub mod request;
pub mod response;

pub use request::*;
pub use response::*;
