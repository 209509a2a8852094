//! # Domain Entities Module
//!
//! 비즈니스 도메인의 핵심 엔티티들을 정의합니다.
//! 엔티티는 MongoDB 문서와 직접 매핑되며 `serde`를 통해 BSON으로 직렬화됩니다.
//!
//! ## 엔티티 설계 원칙
//!
//! - **저장소 부여 필드**: `id`, `public_id`, `created_at`, `updated_at`은 저장소만 채웁니다
//! - **불변 식별자**: 생성 이후 `id`와 `public_id`는 바뀌지 않습니다
//! - **부분 수정**: 수정은 [`UserPatch`](users::UserPatch)로만 이루어지며 생략된 필드는 보존됩니다

pub mod users;

pub use users::*;
