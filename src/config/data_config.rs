//! 데이터 및 서버 설정 관리 모듈
//!
//! 실행 환경, HTTP 서버, MongoDB, 요청 속도 제한 설정 구조체를 정의합니다.
//! 모든 구조체는 `#[serde(default)]`로 YAML 파일에서 일부 필드만 지정할 수 있습니다.

use std::env;

use serde::Deserialize;
use validator::Validate;

/// 애플리케이션 실행 환경
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Deserialize)]
#[serde(from = "String")]
pub enum Environment {
    /// 개발 환경 - 빠른 개발을 위한 설정
    #[default]
    Development,
    /// 테스트 환경 - 자동화된 테스트용 설정
    Test,
    /// 스테이징 환경 - 프로덕션 유사 환경
    Staging,
    /// 프로덕션 환경
    Production,
}

impl Environment {
    /// `APP_ENV` 환경 변수로 현재 실행 환경을 감지합니다.
    ///
    /// 설정 파일을 읽기 전에 로그 필터를 정하는 용도입니다.
    pub fn current() -> Self {
        Self::from_value(env::var("APP_ENV").ok())
    }

    /// 값이 없거나 비어 있으면 기본값(`Development`)을 사용합니다.
    pub fn from_value(value: Option<String>) -> Self {
        value
            .filter(|v| !v.trim().is_empty())
            .map(|v| Environment::parse(&v))
            .unwrap_or_default()
    }

    /// 문자열에서 Environment를 생성합니다.
    ///
    /// 대소문자를 구분하지 않으며 알 수 없는 값은 `Production`으로 취급합니다.
    pub fn parse(s: &str) -> Self {
        match s.trim().to_lowercase().as_str() {
            "development" | "dev" => Environment::Development,
            "test" | "testing" => Environment::Test,
            "staging" | "stage" => Environment::Staging,
            _ => Environment::Production,
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            Environment::Development => "development",
            Environment::Test => "test",
            Environment::Staging => "staging",
            Environment::Production => "production",
        }
    }

    /// 기본 로그 필터
    ///
    /// 개발/테스트 환경에서는 디버그 로그까지 출력합니다.
    pub fn default_log_filter(&self) -> &'static str {
        match self {
            Environment::Development | Environment::Test => "debug,actix_web=debug,mongodb=info",
            Environment::Staging | Environment::Production => "info,actix_web=info",
        }
    }
}

impl From<String> for Environment {
    fn from(value: String) -> Self {
        Environment::parse(&value)
    }
}

/// HTTP 서버 설정
#[derive(Debug, Clone, Deserialize, Validate)]
#[serde(default)]
pub struct ServerConfig {
    #[validate(length(min = 1, message = "server host is required"))]
    pub host: String,

    #[validate(range(min = 1, message = "server port must be positive"))]
    pub port: u16,

    pub env: Environment,
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self {
            host: "0.0.0.0".to_string(),
            port: 8080,
            env: Environment::Development,
        }
    }
}

impl ServerConfig {
    /// `host:port` 형태의 바인딩 주소
    pub fn bind_address(&self) -> String {
        format!("{}:{}", self.host, self.port)
    }
}

/// MongoDB 연결 설정
#[derive(Debug, Clone, Deserialize, Validate)]
#[serde(default)]
pub struct DatabaseConfig {
    #[validate(length(min = 1, message = "database uri is required"))]
    pub uri: String,

    #[validate(length(min = 1, message = "database name is required"))]
    pub name: String,

    /// 서버 측 모니터링에 표시되는 클라이언트 이름
    pub app_name: String,
}

impl Default for DatabaseConfig {
    fn default() -> Self {
        Self {
            uri: "mongodb://localhost:27017".to_string(),
            name: "users_dev".to_string(),
            app_name: env!("CARGO_PKG_NAME").to_string(),
        }
    }
}

/// 요청 속도 제한 설정 (actix-governor)
#[derive(Debug, Clone, Deserialize, Validate)]
#[serde(default)]
pub struct RateLimitConfig {
    #[validate(range(min = 1, message = "rate limit per second must be positive"))]
    pub per_second: u64,

    #[validate(range(min = 1, message = "rate limit burst size must be positive"))]
    pub burst_size: u32,
}

impl Default for RateLimitConfig {
    fn default() -> Self {
        Self {
            per_second: 100,
            burst_size: 200,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_environment_from_string() {
        assert_eq!(Environment::parse("development"), Environment::Development);
        assert_eq!(Environment::parse("DEV"), Environment::Development);
        assert_eq!(Environment::parse("test"), Environment::Test);
        assert_eq!(Environment::parse("stage"), Environment::Staging);
        assert_eq!(Environment::parse("production"), Environment::Production);
        assert_eq!(Environment::parse("unknown"), Environment::Production);
    }

    #[test]
    fn test_unset_app_env_matches_config_default() {
        assert_eq!(Environment::from_value(None), Environment::Development);
        assert_eq!(Environment::from_value(Some(" ".to_string())), Environment::Development);
        assert_eq!(Environment::from_value(None), ServerConfig::default().env);
        assert_eq!(Environment::from_value(Some("test".to_string())), Environment::Test);
    }

    #[test]
    fn test_log_filter_for_each_environment() {
        assert!(Environment::Development.default_log_filter().starts_with("debug"));
        assert!(Environment::Test.default_log_filter().starts_with("debug"));
        assert!(Environment::Production.default_log_filter().starts_with("info"));
    }

    #[test]
    fn test_server_config_defaults() {
        let server = ServerConfig::default();

        assert_eq!(server.bind_address(), "0.0.0.0:8080");
        assert_eq!(server.env, Environment::Development);
        assert!(server.validate().is_ok());
    }

    #[test]
    fn test_zero_rate_limit_is_rejected() {
        let rate_limit = RateLimitConfig {
            per_second: 0,
            burst_size: 200,
        };

        assert!(rate_limit.validate().is_err());
    }
}
