//! 주(州) HTTP 핸들러

use actix_web::{HttpResponse, delete, get, patch, post, web};
use validator::Validate;

use crate::domain::dto::{ResourceResponse, StateRequest};
use crate::domain::entities::{Entity, State};
use crate::errors::AppError;
use crate::repositories::CrudRepository;

/// 주 생성 핸들러
///
/// # Endpoint
/// `POST /state`
#[post("")]
pub async fn create_state(
    repo: web::Data<CrudRepository<State>>,
    payload: web::Json<StateRequest>,
) -> Result<HttpResponse, AppError> {
    payload
        .validate()
        .map_err(|e| AppError::ValidationError(e.to_string()))?;

    let created = repo.insert(payload.into_inner().into_entity()).await?;
    let message = format!("{} created successfully", created.label());

    Ok(HttpResponse::Created().json(ResourceResponse::success(created, message)))
}

/// 주 전체 목록 핸들러
///
/// # Endpoint
/// `GET /state`
#[get("")]
pub async fn list_states(
    repo: web::Data<CrudRepository<State>>,
) -> Result<HttpResponse, AppError> {
    let states = repo.find_all().await?;

    Ok(HttpResponse::Ok().json(states))
}

/// 주 단건 조회 핸들러
///
/// # Endpoint
/// `GET /state/{id}`
#[get("/{id}")]
pub async fn get_state(
    repo: web::Data<CrudRepository<State>>,
    id: web::Path<String>,
) -> Result<HttpResponse, AppError> {
    let state = repo.find_by_id(&id).await?;

    Ok(HttpResponse::Ok().json(state))
}

/// 주 수정 핸들러
///
/// # Endpoint
/// `PATCH /state/{id}`
#[patch("/{id}")]
pub async fn update_state(
    repo: web::Data<CrudRepository<State>>,
    id: web::Path<String>,
    payload: web::Json<StateRequest>,
) -> Result<HttpResponse, AppError> {
    payload
        .validate()
        .map_err(|e| AppError::ValidationError(e.to_string()))?;

    let updated = repo.update_by_id(&id, payload.update_document()).await?;
    let message = format!("{} updated successfully", updated.label());

    Ok(HttpResponse::Created().json(ResourceResponse::success(updated, message)))
}

/// 주 삭제 핸들러
///
/// # Endpoint
/// `DELETE /state/{id}`
#[delete("/{id}")]
pub async fn delete_state(
    repo: web::Data<CrudRepository<State>>,
    id: web::Path<String>,
) -> Result<HttpResponse, AppError> {
    let deleted = repo.delete_by_id(&id).await?;
    let message = format!("{} deleted successfully", deleted.label());

    Ok(HttpResponse::Ok().json(ResourceResponse::<()>::message_only(message)))
}
