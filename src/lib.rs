//! 사용자 CRUD 서비스
//!
//! 사용자 계정을 생성/조회/수정/삭제하는 REST API 서비스입니다.
//! 입력 검증과 저장소 위임을 담당하는 서비스 계층이 중심이며,
//! 저장소는 [`repositories::users::UserStore`] 트레이트 뒤에 숨겨져 있습니다.
//!
//! # Features
//!
//! - **사용자 관리**: 정수 ID / UUID / 사용자명 기반 조회, 부분 수정, 삭제
//! - **입력 검증**: 정규식 기반 사용자명/이메일/UUID 형식 검사
//! - **API 키 인증**: `X-API-Key` 공유 키
//! - **MongoDB**: 사용자 데이터 영구 저장, 유니크 인덱스로 중복 차단
//!
//! # Architecture
//!
//! ```text
//! ┌─────────────────┐
//! │   HTTP Routes   │ ← REST API 엔드포인트, API 키 / 요청 ID 미들웨어
//! └─────────────────┘
//!          │
//!          ▼
//! ┌─────────────────┐
//! │    Handlers     │ ← 요청/응답 처리
//! └─────────────────┘
//!          │
//!          ▼
//! ┌─────────────────┐
//! │    Services     │ ← 검증 → 저장소 위임 → 결과 매핑
//! └─────────────────┘
//!          │
//!          ▼
//! ┌─────────────────┐
//! │  Repositories   │ ← UserStore 포트
//! └─────────────────┘
//!          │
//!          ▼
//! ┌─────────────────┐
//! │     MongoDB     │ ← 저장소
//! └─────────────────┘
//! ```
//!
//! # Examples
//!
//! ```rust,ignore
//! use user_crud_service::repositories::users::MongoUserRepository;
//! use user_crud_service::services::users::UserService;
//!
//! let service = UserService::new(Arc::new(MongoUserRepository::new(database)));
//! let user = service.get_by_username("jdoe").await?;
//! ```

pub mod core;
pub mod config;
pub mod db;
pub mod domain;
pub mod repositories;
pub mod services;
pub mod validation;
pub mod utils;
pub mod routes;
pub mod handlers;
pub mod middlewares;

#[cfg(test)]
pub(crate) mod test_support;
