//! 섹터 HTTP 핸들러
//!
//! | 메서드 | 경로 | 설명 |
//! |--------|------|------|
//! | `POST` | `/sector` | 섹터 생성 |
//! | `GET` | `/sector` | 전체 목록 |
//! | `GET` | `/sector/category/{category_id}` | 카테고리 외래키 필터 |
//! | `GET` | `/sector/{id}` | 단건 조회 |
//! | `PATCH` | `/sector/{id}` | 수정 |
//! | `DELETE` | `/sector/{id}` | 삭제 |
//!
//! 외래키 필터는 단건 조회와 경로 패턴이 겹치지 않도록
//! `/sector/category/` 아래에 있습니다.

use actix_web::{HttpResponse, delete, get, patch, post, web};
use mongodb::bson::doc;
use validator::Validate;

use crate::domain::dto::{ResourceResponse, SectorRequest};
use crate::domain::entities::{Entity, Sector};
use crate::errors::AppError;
use crate::repositories::CrudRepository;

/// 섹터 생성 핸들러
///
/// # Endpoint
/// `POST /sector`
#[post("")]
pub async fn create_sector(
    repo: web::Data<CrudRepository<Sector>>,
    payload: web::Json<SectorRequest>,
) -> Result<HttpResponse, AppError> {
    payload
        .validate()
        .map_err(|e| AppError::ValidationError(e.to_string()))?;

    let created = repo.insert(payload.into_inner().into_entity()).await?;
    let message = format!("{} created successfully", created.label());

    Ok(HttpResponse::Created().json(ResourceResponse::success(created, message)))
}

/// 섹터 전체 목록 핸들러
///
/// # Endpoint
/// `GET /sector`
#[get("")]
pub async fn list_sectors(
    repo: web::Data<CrudRepository<Sector>>,
) -> Result<HttpResponse, AppError> {
    let sectors = repo.find_all().await?;

    Ok(HttpResponse::Ok().json(sectors))
}

/// 카테고리별 섹터 조회 핸들러
///
/// `industry_id`가 경로의 카테고리 식별자와 정확히 일치하는 섹터들을
/// `{data, status}` 봉투로 반환합니다. 참조 무결성 검사는 없으므로
/// 존재하지 않는 카테고리도 빈 목록으로 끝납니다.
///
/// # Endpoint
/// `GET /sector/category/{category_id}`
#[get("/category/{category_id}")]
pub async fn list_sectors_by_category(
    repo: web::Data<CrudRepository<Sector>>,
    category_id: web::Path<String>,
) -> Result<HttpResponse, AppError> {
    let sectors = repo
        .find_filtered(doc! { "industry_id": category_id.into_inner() })
        .await?;

    Ok(HttpResponse::Ok().json(ResourceResponse::data_only(sectors)))
}

/// 섹터 단건 조회 핸들러
///
/// # Endpoint
/// `GET /sector/{id}`
#[get("/{id}")]
pub async fn get_sector(
    repo: web::Data<CrudRepository<Sector>>,
    id: web::Path<String>,
) -> Result<HttpResponse, AppError> {
    let sector = repo.find_by_id(&id).await?;

    Ok(HttpResponse::Ok().json(sector))
}

/// 섹터 수정 핸들러
///
/// # Endpoint
/// `PATCH /sector/{id}`
#[patch("/{id}")]
pub async fn update_sector(
    repo: web::Data<CrudRepository<Sector>>,
    id: web::Path<String>,
    payload: web::Json<SectorRequest>,
) -> Result<HttpResponse, AppError> {
    payload
        .validate()
        .map_err(|e| AppError::ValidationError(e.to_string()))?;

    let updated = repo.update_by_id(&id, payload.update_document()).await?;
    let message = format!("{} updated successfully", updated.label());

    Ok(HttpResponse::Created().json(ResourceResponse::success(updated, message)))
}

/// 섹터 삭제 핸들러
///
/// # Endpoint
/// `DELETE /sector/{id}`
#[delete("/{id}")]
pub async fn delete_sector(
    repo: web::Data<CrudRepository<Sector>>,
    id: web::Path<String>,
) -> Result<HttpResponse, AppError> {
    let deleted = repo.delete_by_id(&id).await?;
    let message = format!("{} deleted successfully", deleted.label());

    Ok(HttpResponse::Ok().json(ResourceResponse::<()>::message_only(message)))
}
