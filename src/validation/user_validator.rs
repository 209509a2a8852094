//! 사용자 입력 검증 규칙
//!
//! 모든 함수는 순수 함수이며 I/O를 수행하지 않습니다.
//! 실패 시 [`AppError::ValidationError`]를 반환하고, 메시지는
//! 클라이언트 응답 본문에 그대로 실립니다.

use once_cell::sync::Lazy;
use regex::Regex;

use crate::core::errors::{AppError, AppResult};

/// 표시 이름 최대 길이 (문자 수 기준)
pub const FULL_NAME_MAX_CHARS: usize = 100;

static USERNAME_PATTERN: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"^[a-zA-Z0-9._-]{3,32}$").expect("username pattern is valid"));

static EMAIL_PATTERN: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"^[a-zA-Z0-9._%+-]+@[a-zA-Z0-9.-]+\.[a-zA-Z]{2,}$").expect("email pattern is valid")
});

static UUID_PATTERN: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"^[0-9a-fA-F]{8}-[0-9a-fA-F]{4}-[0-9a-fA-F]{4}-[0-9a-fA-F]{4}-[0-9a-fA-F]{12}$")
        .expect("uuid pattern is valid")
});

/// 사용자명 검증 (3-32자, 영문/숫자/`.`/`_`/`-`)
pub fn validate_username(username: &str) -> AppResult<()> {
    if username.is_empty() {
        return Err(AppError::validation("username is required"));
    }
    if !USERNAME_PATTERN.is_match(username) {
        return Err(AppError::validation("username is invalid"));
    }
    Ok(())
}

/// 이메일 형식 검증
///
/// `local@domain.tld` 형태만 확인하며 DNS나 메일함 존재 여부는 확인하지 않습니다.
pub fn validate_email(email: &str) -> AppResult<()> {
    if email.is_empty() {
        return Err(AppError::validation("email is required"));
    }
    if !EMAIL_PATTERN.is_match(email) {
        return Err(AppError::validation("email is invalid"));
    }
    Ok(())
}

/// 표시 이름 검증 (1-100자)
pub fn validate_full_name(full_name: &str) -> AppResult<()> {
    if full_name.is_empty() {
        return Err(AppError::validation("full name is required"));
    }
    if full_name.chars().count() > FULL_NAME_MAX_CHARS {
        return Err(AppError::validation("full name is too long"));
    }
    Ok(())
}

/// 외부 식별자(UUID) 형식 검증, 8-4-4-4-12 16진수 표기만 허용
pub fn validate_public_id(public_id: &str) -> AppResult<()> {
    if public_id.is_empty() {
        return Err(AppError::validation("uuid is required"));
    }
    if !UUID_PATTERN.is_match(public_id) {
        return Err(AppError::validation("uuid is invalid"));
    }
    Ok(())
}

/// 외부 식별자를 검증하고 저장소 표기(소문자)로 바꿉니다.
///
/// 저장소는 발급한 UUID를 소문자로 보관하므로 대문자 입력도 같은 사용자를 가리킵니다.
pub fn normalize_public_id(public_id: &str) -> AppResult<String> {
    validate_public_id(public_id)?;
    Ok(public_id.to_ascii_lowercase())
}

pub fn validate_id(id: i64) -> AppResult<()> {
    if id < 1 {
        return Err(AppError::validation("id must be positive"));
    }
    Ok(())
}

/// 생성 요청 검증
///
/// username → email → full_name 순서로 검사하며 첫 번째 실패에서 중단합니다.
pub fn validate_create_input(username: &str, email: &str, full_name: &str) -> AppResult<()> {
    validate_username(username)?;
    validate_email(email)?;
    validate_full_name(full_name)?;
    Ok(())
}

/// 수정 요청 검증
///
/// 빈 문자열은 "제공되지 않음"으로 취급합니다. 세 필드가 모두 비어 있으면
/// 실패하고, 그 외에는 제공된 필드만 username → email → full_name 순서로 검사합니다.
pub fn validate_update_input(
    username: Option<&str>,
    email: Option<&str>,
    full_name: Option<&str>,
) -> AppResult<()> {
    let username = provided(username);
    let email = provided(email);
    let full_name = provided(full_name);

    if username.is_none() && email.is_none() && full_name.is_none() {
        return Err(AppError::validation("no fields to update"));
    }
    if let Some(username) = username {
        validate_username(username)?;
    }
    if let Some(email) = email {
        validate_email(email)?;
    }
    if let Some(full_name) = full_name {
        validate_full_name(full_name)?;
    }
    Ok(())
}

fn provided(value: Option<&str>) -> Option<&str> {
    value.filter(|v| !v.is_empty())
}
