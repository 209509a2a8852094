//! HTTP 미들웨어 모듈
//!
//! - [`api_key_middleware`] - `X-API-Key` 공유 키 인증
//! - [`request_id`] - 요청별 ID 발급 및 전달

pub mod api_key_middleware;
mod api_key_inner;
pub mod request_id;

pub use api_key_middleware::ApiKeyMiddleware;
pub use request_id::{RequestId, RequestIdMiddleware};
