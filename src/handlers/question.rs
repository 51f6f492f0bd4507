//! 설문 문항 HTTP 핸들러
//!
//! | 메서드 | 경로 | 설명 |
//! |--------|------|------|
//! | `POST` | `/question` | 일괄 생성 (본문: 객체 배열) |
//! | `GET` | `/question` | 전체 목록 |
//! | `GET` | `/question/{id}` | 단건 조회 |
//! | `GET` | `/question/{category_id}/{sector_id}` | 카테고리 AND 섹터 필터 |
//! | `PATCH` | `/question/{id}` | 수정 (본문: 배열, 첫 요소만 사용) |
//! | `DELETE` | `/question/{id}` | 삭제 |

use actix_web::{HttpResponse, delete, get, patch, post, web};
use mongodb::bson::doc;

use crate::domain::dto::{QuestionRequest, ResourceResponse};
use crate::domain::entities::{Entity, Question};
use crate::errors::AppError;
use crate::repositories::CrudRepository;

/// 문항 일괄 생성 핸들러
///
/// 본문은 문항 객체의 배열이며, 전체가 하나의 배치 삽입으로 처리됩니다.
/// 배치는 전체 성공 또는 전체 실패입니다.
///
/// # Endpoint
/// `POST /question`
#[post("")]
pub async fn create_questions(
    repo: web::Data<CrudRepository<Question>>,
    payload: web::Json<Vec<QuestionRequest>>,
) -> Result<HttpResponse, AppError> {
    let questions: Vec<Question> = payload
        .into_inner()
        .into_iter()
        .map(QuestionRequest::into_entity)
        .collect();

    let created = repo.insert_many(questions).await?;

    Ok(HttpResponse::Created().json(ResourceResponse::success(
        created,
        "Question created successfully",
    )))
}

/// 문항 전체 목록 핸들러
///
/// # Endpoint
/// `GET /question`
#[get("")]
pub async fn list_questions(
    repo: web::Data<CrudRepository<Question>>,
) -> Result<HttpResponse, AppError> {
    let questions = repo.find_all().await?;

    Ok(HttpResponse::Ok().json(questions))
}

/// 카테고리·섹터 복합 필터 핸들러
///
/// `industry_category_id`와 `industry_sector_id`가 둘 다 정확히 일치하는
/// 문항만 반환합니다 (AND). 한쪽만 일치하면 빈 목록입니다.
///
/// # Endpoint
/// `GET /question/{category_id}/{sector_id}`
#[get("/{category_id}/{sector_id}")]
pub async fn list_questions_by_category_and_sector(
    repo: web::Data<CrudRepository<Question>>,
    path: web::Path<(String, String)>,
) -> Result<HttpResponse, AppError> {
    let (category_id, sector_id) = path.into_inner();

    let questions = repo
        .find_filtered(doc! {
            "industry_category_id": category_id,
            "industry_sector_id": sector_id,
        })
        .await?;

    Ok(HttpResponse::Ok().json(questions))
}

/// 문항 단건 조회 핸들러
///
/// # Endpoint
/// `GET /question/{id}`
#[get("/{id}")]
pub async fn get_question(
    repo: web::Data<CrudRepository<Question>>,
    id: web::Path<String>,
) -> Result<HttpResponse, AppError> {
    let question = repo.find_by_id(&id).await?;

    Ok(HttpResponse::Ok().json(question))
}

/// 문항 수정 핸들러
///
/// 본문은 생성과 같은 배열 모양이며 첫 요소만 사용합니다.
/// 빈 배열은 400입니다.
///
/// # Endpoint
/// `PATCH /question/{id}`
#[patch("/{id}")]
pub async fn update_question(
    repo: web::Data<CrudRepository<Question>>,
    id: web::Path<String>,
    payload: web::Json<Vec<QuestionRequest>>,
) -> Result<HttpResponse, AppError> {
    let request = payload.into_inner().into_iter().next().ok_or_else(|| {
        AppError::ValidationError(
            "Request body must be a non-empty array of questions".to_string(),
        )
    })?;

    let updated = repo.update_by_id(&id, request.update_document()).await?;
    let message = format!("{} updated successfully", updated.label());

    Ok(HttpResponse::Created().json(ResourceResponse::success(updated, message)))
}

/// 문항 삭제 핸들러
///
/// # Endpoint
/// `DELETE /question/{id}`
#[delete("/{id}")]
pub async fn delete_question(
    repo: web::Data<CrudRepository<Question>>,
    id: web::Path<String>,
) -> Result<HttpResponse, AppError> {
    repo.delete_by_id(&id).await?;

    Ok(HttpResponse::Ok().json(ResourceResponse::<()>::message_only(
        "Question deleted successfully",
    )))
}
