//! # 애플리케이션 에러 체계
//!
//! 서비스 전 계층에서 공유하는 에러 타입을 정의합니다.
//! 에러는 두 가지 부류로 나뉘며, 전송 계층(HTTP)에 도달할 때까지
//! 부류가 바뀌지 않고 그대로 전달됩니다.
//!
//! | 부류 | 변형 | HTTP |
//! |------|------|------|
//! | 입력/부재 | [`AppError::ValidationError`] | 400 |
//! | 삭제 대상 없음 | [`AppError::StorageError`] + [`StoreError::NoRowsAffected`] | 404 |
//! | 불투명 실패 | [`AppError::StorageError`] + [`StoreError::Database`] | 500 |
//! | API 키 누락 | [`AppError::AuthenticationError`] | 401 |
//! | API 키 불일치 | [`AppError::AuthorizationError`] | 403 |
//!
//! 호출자는 문자열 비교가 아니라 열거형 변형으로 부류를 구분합니다.
//!
//! ```rust,ignore
//! use user_crud_service::core::errors::AppError;
//!
//! match service.get_by_id(-5).await {
//!     Err(AppError::ValidationError(msg)) => assert_eq!(msg, "id must be positive"),
//!     other => panic!("unexpected: {:?}", other),
//! }
//! ```

use actix_web::http::StatusCode;
use actix_web::{HttpResponse, ResponseError};
use thiserror::Error;

use crate::repositories::StoreError;

/// 클라이언트에 노출되는 불투명 실패의 고정 메시지
const INTERNAL_ERROR_MESSAGE: &str = "internal server error";

/// 애플리케이션 전역 에러 타입
#[derive(Error, Debug)]
pub enum AppError {
    /// 입력값 검증 실패 또는 조회 대상 부재 (400 Bad Request)
    ///
    /// 메시지는 항상 클라이언트에 그대로 보여줄 수 있습니다.
    #[error("{0}")]
    ValidationError(String),

    /// 저장소 계층에서 올라온 에러, 변환 없이 그대로 보존됩니다
    #[error(transparent)]
    StorageError(#[from] StoreError),

    /// API 키 헤더 누락 (401 Unauthorized)
    #[error("{0}")]
    AuthenticationError(String),

    /// API 키 불일치 (403 Forbidden)
    #[error("{0}")]
    AuthorizationError(String),

    /// 설정값 로드/검증 실패
    #[error("Configuration error: {0}")]
    ConfigError(String),

    /// 내부 서버 에러 (500 Internal Server Error)
    #[error("Internal server error: {0}")]
    InternalError(String),
}

impl AppError {
    /// 검증 에러 생성 헬퍼
    pub fn validation(message: impl Into<String>) -> Self {
        AppError::ValidationError(message.into())
    }

    /// 조회 대상이 없을 때 사용하는 검증 에러
    pub fn user_not_found() -> Self {
        Self::validation("user not found")
    }

    /// 클라이언트 오류(4xx)로 분류되는 에러인지 확인
    pub fn is_client_error(&self) -> bool {
        self.status_code().is_client_error()
    }

    /// 응답 본문에 실을 메시지
    ///
    /// 불투명 실패는 상세 내용을 숨기고 고정 메시지를 반환합니다.
    fn client_message(&self) -> String {
        match self {
            AppError::ValidationError(msg)
            | AppError::AuthenticationError(msg)
            | AppError::AuthorizationError(msg) => msg.clone(),
            AppError::StorageError(StoreError::NoRowsAffected) => "user not found".to_string(),
            _ => INTERNAL_ERROR_MESSAGE.to_string(),
        }
    }
}

impl ResponseError for AppError {
    fn status_code(&self) -> StatusCode {
        match self {
            AppError::ValidationError(_) => StatusCode::BAD_REQUEST,
            AppError::StorageError(StoreError::NoRowsAffected) => StatusCode::NOT_FOUND,
            AppError::AuthenticationError(_) => StatusCode::UNAUTHORIZED,
            AppError::AuthorizationError(_) => StatusCode::FORBIDDEN,
            _ => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }

    /// HTTP 에러 응답을 생성합니다.
    ///
    /// 본문 형식은 모든 에러에 대해 `{"error": "..."}` 입니다.
    fn error_response(&self) -> HttpResponse {
        if !self.is_client_error() {
            log::error!("요청 처리 실패: {}", self);
        }

        HttpResponse::build(self.status_code()).json(serde_json::json!({
            "error": self.client_message()
        }))
    }
}

/// 편의성을 위한 Result 타입 별칭
pub type AppResult<T> = Result<T, AppError>;

/// 외부 라이브러리 에러를 AppError로 변환하는 확장 trait
pub trait ErrorContext<T> {
    /// 컨텍스트 정보와 함께 에러를 변환합니다.
    fn context(self, msg: &str) -> AppResult<T>;

    /// 클로저를 사용하여 지연 평가된 컨텍스트를 제공합니다.
    fn with_context<F>(self, f: F) -> AppResult<T>
    where
        F: FnOnce() -> String;
}

impl<T, E> ErrorContext<T> for Result<T, E>
where
    E: std::fmt::Display,
{
    fn context(self, msg: &str) -> AppResult<T> {
        self.map_err(|e| AppError::InternalError(format!("{}: {}", msg, e)))
    }

    fn with_context<F>(self, f: F) -> AppResult<T>
    where
        F: FnOnce() -> String,
    {
        self.map_err(|e| AppError::InternalError(format!("{}: {}", f(), e)))
    }
}
