//! # Configuration Module
//!
//! 서비스 설정을 한 곳에서 읽어 [`AppConfig`]로 제공합니다.
//!
//! ## 모듈 구성
//!
//! - [`data_config`] - 실행 환경, 서버, 데이터베이스, 속도 제한 설정
//! - [`auth_config`] - API 키 설정
//!
//! ## 로드 순서
//!
//! 1. 기본값
//! 2. YAML 파일 (없으면 건너뜀, 파싱 실패 시 에러)
//! 3. 환경 변수 (비어 있지 않은 값만 적용)
//! 4. `validator` 검증
//!
//! ```yaml
//! server:
//!   host: 0.0.0.0
//!   port: 8080
//!   env: production
//! database:
//!   uri: mongodb://mongo:27017
//!   name: users
//! api:
//!   key: change-me
//! rate_limit:
//!   per_second: 100
//!   burst_size: 200
//! ```
//!
//! ## 환경 변수
//!
//! ```bash
//! export CONFIG_PATH="config.yaml"
//! export SERVER_HOST="0.0.0.0"
//! export SERVER_PORT="8080"          # 숫자가 아니면 무시
//! export APP_ENV="production"        # development, test, staging, production
//! export MONGODB_URI="mongodb://localhost:27017"
//! export DATABASE_NAME="users"
//! export API_KEY="secret"            # 비어 있으면 인증 비활성화
//! export RATE_LIMIT_PER_SECOND="100"
//! export RATE_LIMIT_BURST_SIZE="200"
//! ```

pub mod data_config;
pub mod auth_config;

pub use data_config::*;
pub use auth_config::*;

use std::path::Path;
use std::{env, fs, io};

use log::{info, warn};
use serde::Deserialize;
use validator::{Validate, ValidationErrors, ValidationErrorsKind};

use crate::core::errors::{AppError, AppResult};

/// 설정 파일 경로 기본값
pub const DEFAULT_CONFIG_PATH: &str = "config.yaml";

/// 애플리케이션 전체 설정
#[derive(Debug, Clone, Default, Deserialize, Validate)]
#[serde(default)]
pub struct AppConfig {
    #[validate(nested)]
    pub server: ServerConfig,

    #[validate(nested)]
    pub database: DatabaseConfig,

    pub api: ApiConfig,

    #[validate(nested)]
    pub rate_limit: RateLimitConfig,
}

impl AppConfig {
    /// `CONFIG_PATH` 환경 변수(기본 `config.yaml`)가 가리키는 파일로 설정을 읽습니다.
    pub fn from_env() -> AppResult<Self> {
        let path = env::var("CONFIG_PATH").unwrap_or_else(|_| DEFAULT_CONFIG_PATH.to_string());
        Self::load(path)
    }

    /// 설정 파일과 프로세스 환경 변수로 설정을 구성합니다.
    ///
    /// # Errors
    ///
    /// * `AppError::ConfigError` - 파일 파싱 실패 또는 검증 실패
    pub fn load(path: impl AsRef<Path>) -> AppResult<Self> {
        Self::load_with(path, |key| env::var(key).ok())
    }

    /// 환경 변수 조회 함수를 주입받는 로더
    pub fn load_with<F>(path: impl AsRef<Path>, lookup: F) -> AppResult<Self>
    where
        F: Fn(&str) -> Option<String>,
    {
        let mut config = Self::from_file(path.as_ref())?;
        config.apply_env_overrides(lookup);
        config.check()?;
        Ok(config)
    }

    fn from_file(path: &Path) -> AppResult<Self> {
        let contents = match fs::read_to_string(path) {
            Ok(contents) => contents,
            Err(e) if e.kind() == io::ErrorKind::NotFound => {
                warn!("설정 파일 없음, 기본값 사용: {}", path.display());
                return Ok(Self::default());
            }
            Err(e) => {
                return Err(AppError::ConfigError(format!(
                    "failed to read config {}: {}",
                    path.display(),
                    e
                )));
            }
        };

        if contents.trim().is_empty() {
            return Ok(Self::default());
        }

        let config = serde_yaml::from_str(&contents)
            .map_err(|e| AppError::ConfigError(format!("failed to unmarshal config: {}", e)))?;

        info!("설정 파일 로드 됨: {}", path.display());
        Ok(config)
    }

    fn apply_env_overrides<F>(&mut self, lookup: F)
    where
        F: Fn(&str) -> Option<String>,
    {
        let get = |key: &str| lookup(key).filter(|value| !value.is_empty());

        if let Some(port) = get("SERVER_PORT") {
            match port.parse() {
                Ok(port) => self.server.port = port,
                Err(_) => warn!("SERVER_PORT 파싱 실패, 무시: {}", port),
            }
        }
        if let Some(host) = get("SERVER_HOST") {
            self.server.host = host;
        }
        if let Some(app_env) = get("APP_ENV") {
            self.server.env = Environment::parse(&app_env);
        }

        if let Some(uri) = get("MONGODB_URI") {
            self.database.uri = uri;
        }
        if let Some(name) = get("DATABASE_NAME") {
            self.database.name = name;
        }

        if let Some(key) = get("API_KEY") {
            self.api.key = key;
        }

        if let Some(per_second) = get("RATE_LIMIT_PER_SECOND") {
            match per_second.parse() {
                Ok(value) => self.rate_limit.per_second = value,
                Err(_) => warn!("RATE_LIMIT_PER_SECOND 파싱 실패, 무시: {}", per_second),
            }
        }
        if let Some(burst_size) = get("RATE_LIMIT_BURST_SIZE") {
            match burst_size.parse() {
                Ok(value) => self.rate_limit.burst_size = value,
                Err(_) => warn!("RATE_LIMIT_BURST_SIZE 파싱 실패, 무시: {}", burst_size),
            }
        }
    }

    fn check(&self) -> AppResult<()> {
        self.validate()
            .map_err(|errors| AppError::ConfigError(collect_messages(&errors).join("; ")))
    }
}

/// 중첩 구조를 따라가며 검증 메시지를 모읍니다. 필드 순서와 무관하게 정렬됩니다.
fn collect_messages(errors: &ValidationErrors) -> Vec<String> {
    let mut messages = Vec::new();

    for kind in errors.errors().values() {
        match kind {
            ValidationErrorsKind::Field(field_errors) => {
                messages.extend(field_errors.iter().map(|e| match &e.message {
                    Some(message) => message.to_string(),
                    None => e.code.to_string(),
                }));
            }
            ValidationErrorsKind::Struct(nested) => messages.extend(collect_messages(nested)),
            ValidationErrorsKind::List(items) => {
                for nested in items.values() {
                    messages.extend(collect_messages(nested));
                }
            }
        }
    }

    messages.sort();
    messages
}
