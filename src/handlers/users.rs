//! # User Management HTTP Handlers
//!
//! 사용자 CRUD 엔드포인트 핸들러입니다. 모든 경로는 `/api/v1/users` 스코프 아래에 있습니다.
//!
//! | 메서드 | 경로 | 설명 | 상태 코드 |
//! |--------|------|------|-----------|
//! | `GET` | `` | 전체 목록 | 200 OK |
//! | `GET` | `/username/{username}` | 사용자명으로 조회 | 200 OK |
//! | `GET` | `/id/{id}` | 정수 ID로 조회 | 200 OK |
//! | `GET` | `/uuid/{uuid}` | UUID로 조회 | 200 OK |
//! | `POST` | `` | 생성 | 201 Created |
//! | `PATCH` | `/{uuid}` | 부분 수정 | 200 OK |
//! | `DELETE` | `/{uuid}` | 삭제 | 204 No Content |
//!
//! 에러 응답은 [`AppError`]의 `ResponseError` 구현이 만들며 본문은 항상
//! `{"error": "..."}` 형태입니다.

use actix_web::{delete, get, patch, post, web, HttpResponse};

use crate::core::errors::AppError;
use crate::domain::dto::users::request::{CreateUserRequest, UpdateUserRequest};
use crate::domain::dto::users::response::UserResponse;
use crate::services::users::UserService;

#[get("")]
pub async fn list_users(service: web::Data<UserService>) -> Result<HttpResponse, AppError> {
    let users: Vec<UserResponse> = service
        .get_all()
        .await?
        .into_iter()
        .map(UserResponse::from)
        .collect();

    Ok(HttpResponse::Ok().json(users))
}

#[get("/username/{username}")]
pub async fn get_user_by_username(
    service: web::Data<UserService>,
    username: web::Path<String>,
) -> Result<HttpResponse, AppError> {
    let user = service.get_by_username(&username).await?;

    Ok(HttpResponse::Ok().json(UserResponse::from(user)))
}

/// 경로의 ID가 정수가 아니면 서비스 호출 없이 "invalid id"
#[get("/id/{id}")]
pub async fn get_user_by_id(
    service: web::Data<UserService>,
    id: web::Path<String>,
) -> Result<HttpResponse, AppError> {
    let id: i64 = id
        .parse()
        .map_err(|_| AppError::validation("invalid id"))?;

    let user = service.get_by_id(id).await?;

    Ok(HttpResponse::Ok().json(UserResponse::from(user)))
}

#[get("/uuid/{uuid}")]
pub async fn get_user_by_uuid(
    service: web::Data<UserService>,
    uuid: web::Path<String>,
) -> Result<HttpResponse, AppError> {
    let user = service.get_by_public_id(&uuid).await?;

    Ok(HttpResponse::Ok().json(UserResponse::from(user)))
}

#[post("")]
pub async fn create_user(
    service: web::Data<UserService>,
    payload: web::Json<CreateUserRequest>,
) -> Result<HttpResponse, AppError> {
    let user = service.create(payload.into_inner()).await?;

    Ok(HttpResponse::Created().json(UserResponse::from(user)))
}

#[patch("/{uuid}")]
pub async fn update_user(
    service: web::Data<UserService>,
    uuid: web::Path<String>,
    payload: web::Json<UpdateUserRequest>,
) -> Result<HttpResponse, AppError> {
    let user = service.update(&uuid, payload.into_inner()).await?;

    Ok(HttpResponse::Ok().json(UserResponse::from(user)))
}

#[delete("/{uuid}")]
pub async fn delete_user(
    service: web::Data<UserService>,
    uuid: web::Path<String>,
) -> Result<HttpResponse, AppError> {
    service.delete(&uuid).await?;

    Ok(HttpResponse::NoContent().finish())
}
