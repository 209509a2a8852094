//! 입력 검증 모듈
//!
//! 사용자 필드 형식과 제약 조건을 검사하는 상태 없는 함수들을 제공합니다.
//! 정규식은 최초 사용 시 한 번만 컴파일되어 모든 호출에서 읽기 전용으로 공유됩니다.
//!
//! # Examples
//!
//! ```rust,ignore
//! use user_crud_service::validation::validate_create_input;
//!
//! validate_create_input("jdoe", "jdoe@example.com", "John Doe")?;
//! ```

pub mod user_validator;

pub use user_validator::*;
