//! API 키 인증 미들웨어
//!
//! 요청의 `X-API-Key` 헤더를 설정된 공유 키와 비교합니다.
//! 설정된 키가 비어 있으면 모든 요청을 그대로 통과시킵니다.

use std::future::{ready, Ready};
use std::rc::Rc;
use std::sync::Arc;

use actix_web::{
    dev::{Service, ServiceRequest, ServiceResponse, Transform},
    Error, Result,
    body::EitherBody,
};

use crate::config::ApiConfig;
use crate::middlewares::api_key_inner::ApiKeyMiddlewareService;

/// 인증 헤더 이름
pub const API_KEY_HEADER: &str = "X-API-Key";

/// API 키 인증 미들웨어
///
/// ```rust,ignore
/// web::scope("/users").wrap(ApiKeyMiddleware::new(&config.api))
/// ```
pub struct ApiKeyMiddleware {
    /// 기대하는 키 (빈 문자열이면 인증 비활성화)
    key: Arc<str>,
}

impl ApiKeyMiddleware {
    pub fn new(config: &ApiConfig) -> Self {
        Self::with_key(&config.key)
    }

    pub fn with_key(key: &str) -> Self {
        Self { key: Arc::from(key) }
    }
}

impl<S, B> Transform<S, ServiceRequest> for ApiKeyMiddleware
where
    S: Service<ServiceRequest, Response = ServiceResponse<B>, Error = Error> + 'static,
    S::Future: 'static,
    B: 'static,
{
    type Response = ServiceResponse<EitherBody<B>>;
    type Error = Error;
    type Transform = ApiKeyMiddlewareService<S>;
    type InitError = ();
    type Future = Ready<Result<Self::Transform, Self::InitError>>;

    fn new_transform(&self, service: S) -> Self::Future {
        ready(Ok(ApiKeyMiddlewareService {
            service: Rc::new(service),
            key: self.key.clone(),
        }))
    }
}
