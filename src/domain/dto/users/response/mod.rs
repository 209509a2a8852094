//! # 사용자 응답 DTO 모듈
//!
//! 엔티티를 API 응답 형식으로 변환합니다.
//! 타임스탬프는 RFC 3339 문자열로 직렬화되며, 외부 식별자는 `uuid` 키로 노출됩니다.
//!
//! ```json
//! {
//!   "id": 1,
//!   "uuid": "123e4567-e89b-12d3-a456-426614174000",
//!   "username": "jdoe",
//!   "email": "jdoe@example.com",
//!   "full_name": "John Doe",
//!   "created_at": "2024-01-01T00:00:00Z",
//!   "updated_at": "2024-01-01T00:00:00Z"
//! }
//! ```

pub mod user_response;

pub use user_response::UserResponse;
