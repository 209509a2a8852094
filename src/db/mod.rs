//! MongoDB 연결 관리 모듈
//!
//! 애플리케이션 시작 시 한 번 연결하고 `Arc<Database>`로 공유합니다.
//! 연결 직후 `ping` 명령으로 서버 가용성을 확인합니다.

use mongodb::{Client, options::ClientOptions};
use log::info;

use crate::config::DatabaseConfig;
use crate::core::errors::{AppResult, ErrorContext};

/// MongoDB 클라이언트와 대상 데이터베이스 이름을 묶은 핸들
#[derive(Clone)]
pub struct Database {
    client: Client,
    database_name: String,
}

impl Database {
    /// 설정값으로 MongoDB에 연결합니다.
    ///
    /// # Errors
    ///
    /// * URI 파싱 실패, 클라이언트 생성 실패, `ping` 실패 시 `AppError::InternalError`
    pub async fn connect(config: &DatabaseConfig) -> AppResult<Self> {
        let mut client_options = ClientOptions::parse(&config.uri)
            .await
            .context("MongoDB URI 파싱 실패")?;

        // 애플리케이션 이름 설정 (서버 측 모니터링에 표시됨)
        client_options.app_name = Some(config.app_name.clone());

        let client = Client::with_options(client_options).context("MongoDB 클라이언트 생성 실패")?;

        client
            .database(&config.name)
            .run_command(mongodb::bson::doc! { "ping": 1 })
            .await
            .with_context(|| format!("MongoDB ping 실패 ({})", config.name))?;

        info!("✅ MongoDB 연결 성공: {}", config.name);

        Ok(Self {
            client,
            database_name: config.name.clone(),
        })
    }

    pub fn get_database(&self) -> mongodb::Database {
        self.client.database(&self.database_name)
    }
}
