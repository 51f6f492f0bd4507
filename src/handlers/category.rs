//! 카테고리 HTTP 핸들러
//!
//! | 메서드 | 경로 | 설명 |
//! |--------|------|------|
//! | `POST` | `/category` | 카테고리 생성 |
//! | `GET` | `/category` | 전체 목록 |
//! | `GET` | `/category/{id}` | 단건 조회 |
//! | `PATCH` | `/category/{id}` | 수정 |
//! | `DELETE` | `/category/{id}` | 삭제 |

use actix_web::{HttpResponse, delete, get, patch, post, web};
use validator::Validate;

use crate::domain::dto::{CategoryRequest, ResourceResponse};
use crate::domain::entities::{Category, Entity};
use crate::errors::AppError;
use crate::repositories::CrudRepository;

/// 카테고리 생성 핸들러
///
/// # Endpoint
/// `POST /category`
#[post("")]
pub async fn create_category(
    repo: web::Data<CrudRepository<Category>>,
    payload: web::Json<CategoryRequest>,
) -> Result<HttpResponse, AppError> {
    payload
        .validate()
        .map_err(|e| AppError::ValidationError(e.to_string()))?;

    let created = repo.insert(payload.into_inner().into_entity()).await?;
    let message = format!("{} created successfully", created.label());

    Ok(HttpResponse::Created().json(ResourceResponse::success(created, message)))
}

/// 카테고리 전체 목록 핸들러
///
/// # Endpoint
/// `GET /category`
#[get("")]
pub async fn list_categories(
    repo: web::Data<CrudRepository<Category>>,
) -> Result<HttpResponse, AppError> {
    let categories = repo.find_all().await?;

    Ok(HttpResponse::Ok().json(categories))
}

/// 카테고리 단건 조회 핸들러
///
/// 없는 식별자는 200과 JSON `null`로 응답합니다 (조회는 404를 내지 않음).
///
/// # Endpoint
/// `GET /category/{id}`
#[get("/{id}")]
pub async fn get_category(
    repo: web::Data<CrudRepository<Category>>,
    id: web::Path<String>,
) -> Result<HttpResponse, AppError> {
    let category = repo.find_by_id(&id).await?;

    Ok(HttpResponse::Ok().json(category))
}

/// 카테고리 수정 핸들러
///
/// # Endpoint
/// `PATCH /category/{id}`
#[patch("/{id}")]
pub async fn update_category(
    repo: web::Data<CrudRepository<Category>>,
    id: web::Path<String>,
    payload: web::Json<CategoryRequest>,
) -> Result<HttpResponse, AppError> {
    payload
        .validate()
        .map_err(|e| AppError::ValidationError(e.to_string()))?;

    let updated = repo.update_by_id(&id, payload.update_document()).await?;
    let message = format!("{} updated successfully", updated.label());

    Ok(HttpResponse::Created().json(ResourceResponse::success(updated, message)))
}

/// 카테고리 삭제 핸들러
///
/// # Endpoint
/// `DELETE /category/{id}`
#[delete("/{id}")]
pub async fn delete_category(
    repo: web::Data<CrudRepository<Category>>,
    id: web::Path<String>,
) -> Result<HttpResponse, AppError> {
    let deleted = repo.delete_by_id(&id).await?;
    let message = format!("{} deleted successfully", deleted.label());

    Ok(HttpResponse::Ok().json(ResourceResponse::<()>::message_only(message)))
}
