//! # Core Module
//!
//! 서비스 전 계층이 공유하는 에러 체계를 제공합니다.
//!
//! ### [`errors`] - 통합 에러 처리
//! - **AppError**: 애플리케이션 전역 에러 타입
//! - **HTTP 통합**: Actix-Web `ResponseError` 구현으로 상태 코드 자동 매핑
//! - **부류 보존**: 검증 실패와 저장소 실패를 변형으로 구분

pub mod errors;

pub use errors::*;
