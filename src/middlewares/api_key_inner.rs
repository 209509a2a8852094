use std::rc::Rc;
use std::sync::Arc;

use actix_web::body::EitherBody;
use actix_web::dev::{forward_ready, Service, ServiceRequest, ServiceResponse};
use actix_web::{Error, ResponseError};
use futures_util::future::LocalBoxFuture;

use crate::core::AppError;
use crate::middlewares::api_key_middleware::API_KEY_HEADER;

pub struct ApiKeyMiddlewareService<S> {
    pub service: Rc<S>,
    pub key: Arc<str>,
}

impl<S, B> Service<ServiceRequest> for ApiKeyMiddlewareService<S>
where
    S: Service<ServiceRequest, Response = ServiceResponse<B>, Error = Error> + 'static,
    S::Future: 'static,
    B: 'static,
{
    type Response = ServiceResponse<EitherBody<B>>;
    type Error = Error;
    type Future = LocalBoxFuture<'static, actix_web::Result<Self::Response, Self::Error>>;

    forward_ready!(service);

    fn call(&self, req: ServiceRequest) -> Self::Future {
        let service = self.service.clone();
        let key = self.key.clone();

        Box::pin(async move {
            if let Err(err) = check_api_key(&req, &key) {
                log::warn!("API 키 인증 실패: {} {} ({})", req.method(), req.path(), err);
                let response = err.error_response();
                return Ok(req.into_response(response).map_into_right_body());
            }

            let res = service.call(req).await?;
            Ok(res.map_into_left_body())
        })
    }
}

/// 헤더 값이 없거나 UTF-8이 아니면 누락으로 취급합니다.
fn check_api_key(req: &ServiceRequest, expected: &str) -> Result<(), AppError> {
    if expected.is_empty() {
        return Ok(());
    }

    let provided = req
        .headers()
        .get(API_KEY_HEADER)
        .and_then(|h| h.to_str().ok())
        .filter(|v| !v.is_empty())
        .ok_or_else(|| AppError::AuthenticationError("missing X-API-Key header".to_string()))?;

    if provided != expected {
        return Err(AppError::AuthorizationError("invalid X-API-Key".to_string()));
    }

    Ok(())
}
