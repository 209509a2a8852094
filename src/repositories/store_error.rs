//! 저장소 계층 에러

use thiserror::Error;

/// 저장소 구현체가 반환하는 에러
///
/// 조회 결과 없음은 에러가 아니라 `Ok(None)`으로 표현합니다.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum StoreError {
    /// 삭제 대상이 없어 아무 문서도 영향받지 않음
    #[error("no rows affected")]
    NoRowsAffected,

    /// 연결 실패, 제약 조건 위반 등 분류되지 않은 실패
    #[error("Database error: {0}")]
    Database(String),
}

impl From<mongodb::error::Error> for StoreError {
    fn from(error: mongodb::error::Error) -> Self {
        StoreError::Database(error.to_string())
    }
}
