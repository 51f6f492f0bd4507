//! 탈루카 HTTP 핸들러

use actix_web::{HttpResponse, delete, get, patch, post, web};
use validator::Validate;

use crate::domain::dto::{ResourceResponse, TalukaRequest};
use crate::domain::entities::{Entity, Taluka};
use crate::errors::AppError;
use crate::repositories::CrudRepository;

/// 탈루카 생성 핸들러
///
/// # Endpoint
/// `POST /taluka`
#[post("")]
pub async fn create_taluka(
    repo: web::Data<CrudRepository<Taluka>>,
    payload: web::Json<TalukaRequest>,
) -> Result<HttpResponse, AppError> {
    payload
        .validate()
        .map_err(|e| AppError::ValidationError(e.to_string()))?;

    let created = repo.insert(payload.into_inner().into_entity()).await?;
    let message = format!("{} created successfully", created.label());

    Ok(HttpResponse::Created().json(ResourceResponse::success(created, message)))
}

/// 탈루카 전체 목록 핸들러
///
/// # Endpoint
/// `GET /taluka`
#[get("")]
pub async fn list_talukas(
    repo: web::Data<CrudRepository<Taluka>>,
) -> Result<HttpResponse, AppError> {
    let talukas = repo.find_all().await?;

    Ok(HttpResponse::Ok().json(talukas))
}

/// 탈루카 단건 조회 핸들러
///
/// # Endpoint
/// `GET /taluka/{id}`
#[get("/{id}")]
pub async fn get_taluka(
    repo: web::Data<CrudRepository<Taluka>>,
    id: web::Path<String>,
) -> Result<HttpResponse, AppError> {
    let taluka = repo.find_by_id(&id).await?;

    Ok(HttpResponse::Ok().json(taluka))
}

/// 탈루카 수정 핸들러
///
/// # Endpoint
/// `PATCH /taluka/{id}`
#[patch("/{id}")]
pub async fn update_taluka(
    repo: web::Data<CrudRepository<Taluka>>,
    id: web::Path<String>,
    payload: web::Json<TalukaRequest>,
) -> Result<HttpResponse, AppError> {
    payload
        .validate()
        .map_err(|e| AppError::ValidationError(e.to_string()))?;

    let updated = repo.update_by_id(&id, payload.update_document()).await?;
    let message = format!("{} updated successfully", updated.label());

    Ok(HttpResponse::Created().json(ResourceResponse::success(updated, message)))
}

/// 탈루카 삭제 핸들러
///
/// # Endpoint
/// `DELETE /taluka/{id}`
#[delete("/{id}")]
pub async fn delete_taluka(
    repo: web::Data<CrudRepository<Taluka>>,
    id: web::Path<String>,
) -> Result<HttpResponse, AppError> {
    let deleted = repo.delete_by_id(&id).await?;
    let message = format!("{} deleted successfully", deleted.label());

    Ok(HttpResponse::Ok().json(ResourceResponse::<()>::message_only(message)))
}
