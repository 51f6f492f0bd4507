//! 부서 HTTP 핸들러

use actix_web::{HttpResponse, delete, get, patch, post, web};
use validator::Validate;

use crate::domain::dto::{DepartmentRequest, ResourceResponse};
use crate::domain::entities::{Department, Entity};
use crate::errors::AppError;
use crate::repositories::CrudRepository;

/// 부서 생성 핸들러
///
/// # Endpoint
/// `POST /department`
#[post("")]
pub async fn create_department(
    repo: web::Data<CrudRepository<Department>>,
    payload: web::Json<DepartmentRequest>,
) -> Result<HttpResponse, AppError> {
    payload
        .validate()
        .map_err(|e| AppError::ValidationError(e.to_string()))?;

    let created = repo.insert(payload.into_inner().into_entity()).await?;
    let message = format!("{} created successfully", created.label());

    Ok(HttpResponse::Created().json(ResourceResponse::success(created, message)))
}

/// 부서 전체 목록 핸들러
///
/// # Endpoint
/// `GET /department`
#[get("")]
pub async fn list_departments(
    repo: web::Data<CrudRepository<Department>>,
) -> Result<HttpResponse, AppError> {
    let departments = repo.find_all().await?;

    Ok(HttpResponse::Ok().json(departments))
}

/// 부서 단건 조회 핸들러
///
/// # Endpoint
/// `GET /department/{id}`
#[get("/{id}")]
pub async fn get_department(
    repo: web::Data<CrudRepository<Department>>,
    id: web::Path<String>,
) -> Result<HttpResponse, AppError> {
    let department = repo.find_by_id(&id).await?;

    Ok(HttpResponse::Ok().json(department))
}

/// 부서 수정 핸들러
///
/// # Endpoint
/// `PATCH /department/{id}`
#[patch("/{id}")]
pub async fn update_department(
    repo: web::Data<CrudRepository<Department>>,
    id: web::Path<String>,
    payload: web::Json<DepartmentRequest>,
) -> Result<HttpResponse, AppError> {
    payload
        .validate()
        .map_err(|e| AppError::ValidationError(e.to_string()))?;

    let updated = repo.update_by_id(&id, payload.update_document()).await?;
    let message = format!("{} updated successfully", updated.label());

    Ok(HttpResponse::Created().json(ResourceResponse::success(updated, message)))
}

/// 부서 삭제 핸들러
///
/// # Endpoint
/// `DELETE /department/{id}`
#[delete("/{id}")]
pub async fn delete_department(
    repo: web::Data<CrudRepository<Department>>,
    id: web::Path<String>,
) -> Result<HttpResponse, AppError> {
    let deleted = repo.delete_by_id(&id).await?;
    let message = format!("{} deleted successfully", deleted.label());

    Ok(HttpResponse::Ok().json(ResourceResponse::<()>::message_only(message)))
}
