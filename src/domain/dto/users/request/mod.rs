//! # 사용자 관련 요청 DTO 모듈
//!
//! 클라이언트로부터 받은 JSON 데이터를 구조화된 Rust 타입으로 변환합니다.
//!
//! ## 검증 계층
//!
//! 1. **구문 검증**: JSON 구조와 타입 일치성 (`serde`, 실패 시 400)
//! 2. **형식 검증**: 사용자명/이메일/이름 규칙 (서비스 계층, 실패 시 400)
//!
//! 생성 요청은 세 필드 모두 필수이고, 수정 요청은 모두 선택이지만 최소 하나가 필요합니다.
//! 누락된 필드는 빈 문자열로 역직렬화되어 형식 검증 단계에서 "required" 메시지로 보고됩니다.

pub mod create_user;
pub mod update_user;

pub use create_user::CreateUserRequest;
pub use update_user::UpdateUserRequest;
