//! 지구 HTTP 핸들러

use actix_web::{HttpResponse, delete, get, patch, post, web};
use validator::Validate;

use crate::domain::dto::{DistrictRequest, ResourceResponse};
use crate::domain::entities::{District, Entity};
use crate::errors::AppError;
use crate::repositories::CrudRepository;

/// 지구 생성 핸들러
///
/// # Endpoint
/// `POST /district`
#[post("")]
pub async fn create_district(
    repo: web::Data<CrudRepository<District>>,
    payload: web::Json<DistrictRequest>,
) -> Result<HttpResponse, AppError> {
    payload
        .validate()
        .map_err(|e| AppError::ValidationError(e.to_string()))?;

    let created = repo.insert(payload.into_inner().into_entity()).await?;
    let message = format!("{} created successfully", created.label());

    Ok(HttpResponse::Created().json(ResourceResponse::success(created, message)))
}

/// 지구 전체 목록 핸들러
///
/// # Endpoint
/// `GET /district`
#[get("")]
pub async fn list_districts(
    repo: web::Data<CrudRepository<District>>,
) -> Result<HttpResponse, AppError> {
    let districts = repo.find_all().await?;

    Ok(HttpResponse::Ok().json(districts))
}

/// 지구 단건 조회 핸들러
///
/// # Endpoint
/// `GET /district/{id}`
#[get("/{id}")]
pub async fn get_district(
    repo: web::Data<CrudRepository<District>>,
    id: web::Path<String>,
) -> Result<HttpResponse, AppError> {
    let district = repo.find_by_id(&id).await?;

    Ok(HttpResponse::Ok().json(district))
}

/// 지구 수정 핸들러
///
/// # Endpoint
/// `PATCH /district/{id}`
#[patch("/{id}")]
pub async fn update_district(
    repo: web::Data<CrudRepository<District>>,
    id: web::Path<String>,
    payload: web::Json<DistrictRequest>,
) -> Result<HttpResponse, AppError> {
    payload
        .validate()
        .map_err(|e| AppError::ValidationError(e.to_string()))?;

    let updated = repo.update_by_id(&id, payload.update_document()).await?;
    let message = format!("{} updated successfully", updated.label());

    Ok(HttpResponse::Created().json(ResourceResponse::success(updated, message)))
}

/// 지구 삭제 핸들러
///
/// # Endpoint
/// `DELETE /district/{id}`
#[delete("/{id}")]
pub async fn delete_district(
    repo: web::Data<CrudRepository<District>>,
    id: web::Path<String>,
) -> Result<HttpResponse, AppError> {
    let deleted = repo.delete_by_id(&id).await?;
    let message = format!("{} deleted successfully", deleted.label());

    Ok(HttpResponse::Ok().json(ResourceResponse::<()>::message_only(message)))
}
