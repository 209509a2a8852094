//! API 키 인증 설정

use serde::Deserialize;

/// 공유 API 키 설정
///
/// 키가 비어 있으면 인증을 수행하지 않습니다.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default)]
pub struct ApiConfig {
    pub key: String,
}

impl ApiConfig {
    pub fn is_enabled(&self) -> bool {
        !self.key.is_empty()
    }
}
