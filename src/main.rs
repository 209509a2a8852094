//! 사용자 CRUD 서비스 메인 애플리케이션
//!
//! 설정을 읽고 MongoDB에 연결한 뒤 Actix-web HTTP 서버를 구동합니다.

use std::io;
use std::sync::Arc;

use actix_cors::Cors;
use actix_governor::{Governor, GovernorConfigBuilder};
use actix_web::http::header::{self, HeaderName};
use actix_web::{middleware, web, App, HttpServer};
use dotenv::dotenv;
use env_logger::Env;
use log::{error, info, warn};

use user_crud_service::config::{AppConfig, Environment};
use user_crud_service::db::Database;
use user_crud_service::middlewares::{RequestId, RequestIdMiddleware};
use user_crud_service::repositories::users::MongoUserRepository;
use user_crud_service::routes::configure_all_routes;
use user_crud_service::services::users::UserService;
use user_crud_service::utils::string_utils::mask_secret;

/// 액세스 로그 형식: 요청 ID, 클라이언트, 요청 라인, 상태, 크기, User-Agent, 처리 시간
const ACCESS_LOG_FORMAT: &str = r#"%{request_id}xi %a "%r" %s %b "%{User-Agent}i" %Dms"#;

#[actix_web::main]
async fn main() -> io::Result<()> {
    load_env_file();

    // 설정 로드 중 경고도 출력되도록 로거를 먼저 초기화
    init_logging(Environment::current());

    let config = AppConfig::from_env().map_err(|e| {
        error!("❌ 설정 로드 실패: {}", e);
        io::Error::other(e.to_string())
    })?;

    info!("🚀 사용자 CRUD 서비스 시작중... (env: {})", config.server.env.as_str());
    if config.api.is_enabled() {
        info!("🔑 API 키 인증 활성화: {}", mask_secret(&config.api.key));
    } else {
        warn!("⚠️ API 키가 설정되지 않아 인증 없이 요청을 받습니다");
    }

    let user_service = initialize_user_service(&config).await.map_err(|e| {
        error!("❌ 서비스 초기화 실패: {}", e);
        io::Error::other(e)
    })?;

    info!("✅ 모든 서비스가 성공적으로 초기화되었습니다!");

    start_http_server(config, user_service).await
}

/// HTTP 서버를 구성하고 실행합니다
///
/// 속도 제한, CORS, 요청 ID, 액세스 로그, 경로 정규화 미들웨어를 포함합니다.
///
/// # Errors
///
/// * `std::io::Error` - 포트 바인딩 실패 또는 서버 실행 오류
async fn start_http_server(config: AppConfig, user_service: web::Data<UserService>) -> io::Result<()> {
    let bind_address = config.server.bind_address();

    info!("🌐 서버가 http://{} 에서 실행중입니다", bind_address);
    info!("📍 Health check: http://{}/health", bind_address);
    info!("📍 Users API: http://{}/api/v1/users", bind_address);

    let governor_conf = GovernorConfigBuilder::default()
        .requests_per_second(config.rate_limit.per_second)
        .burst_size(config.rate_limit.burst_size)
        .use_headers()
        .finish()
        .ok_or_else(|| io::Error::other("잘못된 Rate Limiting 설정"))?;

    info!(
        "🛡️ Rate Limiting 활성화: 초당 {}요청, 버스트 {}개",
        config.rate_limit.per_second,
        config.rate_limit.burst_size
    );

    let api_config = config.api.clone();

    HttpServer::new(move || {
        let cors = configure_cors();
        let api_config = api_config.clone();

        App::new()
            .app_data(user_service.clone())
            .wrap(Governor::new(&governor_conf))
            .wrap(cors)
            .wrap(
                middleware::Logger::new(ACCESS_LOG_FORMAT)
                    .custom_request_replace("request_id", RequestId::of),
            )
            .wrap(RequestIdMiddleware)
            .wrap(middleware::NormalizePath::trim())
            .configure(move |cfg| configure_all_routes(cfg, &api_config))
    })
    .bind(&bind_address)?
    .workers(4) // 워커 스레드 수
    .run()
    .await
}

/// 환경별 설정 파일을 로드합니다
///
/// * `PROFILE=dev` - .env.dev 파일 로드 (기본값)
/// * `PROFILE=prod` - .env.prod 파일 로드
/// * 기타 - 기본 .env 파일 로드
///
/// 로거 초기화 전에 호출되므로 결과는 표준 에러로 출력합니다.
fn load_env_file() {
    let profile = std::env::var("PROFILE").unwrap_or_else(|_| "dev".to_string());

    let loaded = match profile.as_str() {
        "prod" => dotenv::from_filename(".env.prod").map(|_| ".env.prod"),
        "dev" => dotenv::from_filename(".env.dev").map(|_| ".env.dev"),
        _ => dotenv().map(|_| ".env"),
    };

    match loaded {
        Ok(file) => eprintln!("[{}] {} 파일 로드 됨", profile, file),
        Err(e) => eprintln!("[{}] env 파일 로드 건너뜀: {}", profile, e),
    }
}

/// `RUST_LOG`가 없으면 실행 환경별 기본 필터를 사용합니다.
fn init_logging(environment: Environment) {
    env_logger::init_from_env(Env::default().default_filter_or(environment.default_log_filter()));
}

async fn initialize_user_service(config: &AppConfig) -> Result<web::Data<UserService>, String> {
    info!("📡 데이터베이스 연결 중... ({})", config.database.name);

    let database = Arc::new(Database::connect(&config.database).await.map_err(|e| e.to_string())?);

    let repository = Arc::new(MongoUserRepository::new(database));
    repository.init().await.map_err(|e| e.to_string())?;

    Ok(web::Data::new(UserService::new(repository)))
}

fn configure_cors() -> Cors {
    Cors::default()
        .allowed_origin("http://localhost:3000")
        .allowed_origin("http://127.0.0.1:3000")
        .allowed_origin("http://localhost:8080")
        .allowed_origin("http://127.0.0.1:8080")
        .allowed_methods(vec!["GET", "POST", "PATCH", "DELETE", "OPTIONS"])
        .allowed_headers(vec![
            header::ACCEPT,
            header::CONTENT_TYPE,
            HeaderName::from_static("x-api-key"),
            HeaderName::from_static("x-request-id"),
        ])
        .expose_headers(vec![HeaderName::from_static("x-request-id")])
        .max_age(3600)
}
