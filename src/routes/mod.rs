//! 라우트 설정 모듈
//!
//! 애플리케이션의 모든 엔드포인트를 등록합니다.
//!
//! ```text
//! GET  /health                 (인증 없음)
//! /api/v1/users/...            (X-API-Key)
//! ```

use actix_web::{get, web, HttpResponse};
use serde_json::json;

use crate::config::ApiConfig;
use crate::core::errors::AppError;
use crate::handlers;
use crate::middlewares::ApiKeyMiddleware;

pub fn configure_all_routes(cfg: &mut web::ServiceConfig, api: &ApiConfig) {
    cfg.service(health_check);

    configure_user_routes(cfg, api);
}

fn configure_user_routes(cfg: &mut web::ServiceConfig, api: &ApiConfig) {
    cfg.service(
        web::scope("/api/v1/users")
            .wrap(ApiKeyMiddleware::new(api))
            .app_data(json_config())
            .service(handlers::users::list_users)
            .service(handlers::users::create_user)
            .service(handlers::users::get_user_by_username)
            .service(handlers::users::get_user_by_id)
            .service(handlers::users::get_user_by_uuid)
            .service(handlers::users::update_user)
            .service(handlers::users::delete_user),
    );
}

/// JSON 본문 파싱 실패를 `{"error": ...}` 형태의 400 응답으로 바꿉니다.
fn json_config() -> web::JsonConfig {
    web::JsonConfig::default().error_handler(|err, _req| {
        log::debug!("요청 본문 파싱 실패: {}", err);
        AppError::validation(err.to_string()).into()
    })
}

#[get("/health")]
async fn health_check() -> HttpResponse {
    HttpResponse::Ok().json(json!({
        "status": "healthy",
        "service": env!("CARGO_PKG_NAME"),
        "version": env!("CARGO_PKG_VERSION"),
        "timestamp": chrono::Utc::now().to_rfc3339(),
    }))
}
