//! 애플리케이션 전역에서 사용하는 에러 시스템
//!
//! `thiserror`와 `actix_web::ResponseError`를 사용하여 타입 안전하고
//! 일관된 에러 처리를 제공합니다. 모든 에러는 API가 사용하는 응답 봉투
//! `{status: "Error", message}` 형태의 JSON으로 변환됩니다.
//!
//! 상태 코드 매핑은 고정되어 있습니다:
//!
//! | AppError | HTTP Status |
//! |----------|-------------|
//! | `ValidationError` | 400 Bad Request |
//! | `NotFound` | 404 Not Found |
//! | `ConflictError` | 409 Conflict |
//! | `AuthenticationError` | 401 Unauthorized |
//! | `DatabaseError` | 500 Internal Server Error |
//! | `InternalError` | 500 Internal Server Error |
//!
//! ## 사용 예제
//!
//! ```rust,ignore
//! use crate::errors::AppError;
//!
//! async fn create_state(data: StateRequest) -> Result<State, AppError> {
//!     let state = state_repo.insert(data.into_entity()).await?;
//!     Ok(state)
//! }
//! ```

use mongodb::error::{ErrorKind, WriteFailure};
use thiserror::Error;

/// 애플리케이션 전역 에러 타입
///
/// 백엔드 서비스에서 발생할 수 있는 모든 종류의 에러를 포괄하는 열거형입니다.
/// 자동으로 HTTP 응답으로 변환되어 클라이언트에게 전달됩니다.
#[derive(Error, Debug)]
pub enum AppError {
    /// 데이터베이스 관련 에러 (500 Internal Server Error)
    #[error("Database error: {0}")]
    DatabaseError(String),

    /// 입력값 검증 에러 (400 Bad Request)
    #[error("Validation error: {0}")]
    ValidationError(String),

    /// 리소스 찾을 수 없음 에러 (404 Not Found)
    #[error("{0}")]
    NotFound(String),

    /// 충돌/중복 에러 (409 Conflict)
    #[error("Conflict error: {0}")]
    ConflictError(String),

    /// 인증 실패 에러 (401 Unauthorized)
    #[error("{0}")]
    AuthenticationError(String),

    /// 내부 서버 에러 (500 Internal Server Error)
    #[error("Internal server error: {0}")]
    InternalError(String),
}

impl AppError {
    /// MongoDB 드라이버 에러를 AppError로 변환합니다.
    ///
    /// 유니크 인덱스 위반(E11000 duplicate key)은 `ConflictError`로,
    /// 그 외의 드라이버 에러는 모두 `DatabaseError`로 분류됩니다.
    pub fn from_store(err: mongodb::error::Error) -> Self {
        if is_duplicate_key(&err) {
            AppError::ConflictError(err.to_string())
        } else {
            AppError::DatabaseError(err.to_string())
        }
    }
}

/// E11000 duplicate key 위반 여부를 판별합니다.
fn is_duplicate_key(err: &mongodb::error::Error) -> bool {
    const DUPLICATE_KEY: i32 = 11000;

    match err.kind.as_ref() {
        ErrorKind::Write(WriteFailure::WriteError(write_error)) => {
            write_error.code == DUPLICATE_KEY
        }
        ErrorKind::InsertMany(insert_error) => insert_error
            .write_errors
            .as_ref()
            .is_some_and(|errors| errors.iter().any(|e| e.code == DUPLICATE_KEY)),
        _ => false,
    }
}

impl actix_web::ResponseError for AppError {
    /// HTTP 에러 응답을 생성합니다.
    ///
    /// 각 에러 타입을 적절한 HTTP 상태 코드와 `{status, message}` JSON
    /// 응답으로 변환합니다.
    fn error_response(&self) -> actix_web::HttpResponse {
        use actix_web::http::StatusCode;

        let status = match self {
            AppError::ValidationError(_) => StatusCode::BAD_REQUEST,
            AppError::NotFound(_) => StatusCode::NOT_FOUND,
            AppError::ConflictError(_) => StatusCode::CONFLICT,
            AppError::AuthenticationError(_) => StatusCode::UNAUTHORIZED,
            _ => StatusCode::INTERNAL_SERVER_ERROR,
        };

        actix_web::HttpResponse::build(status).json(serde_json::json!({
            "status": "Error",
            "message": self.to_string()
        }))
    }
}

/// 편의성을 위한 Result 타입 별칭
pub type AppResult<T> = Result<T, AppError>;

#[cfg(test)]
mod tests {
    use super::*;
    use actix_web::ResponseError;
    use actix_web::body::MessageBody;

    #[test]
    fn test_validation_error_response() {
        let error = AppError::ValidationError("Email is required".to_string());
        let response = error.error_response();

        assert_eq!(response.status(), actix_web::http::StatusCode::BAD_REQUEST);
    }

    #[test]
    fn test_not_found_error_response() {
        let error = AppError::NotFound("State with id 0 not found".to_string());
        let response = error.error_response();

        assert_eq!(response.status(), actix_web::http::StatusCode::NOT_FOUND);
    }

    #[test]
    fn test_conflict_error_response() {
        let error = AppError::ConflictError("duplicate key".to_string());
        let response = error.error_response();

        assert_eq!(response.status(), actix_web::http::StatusCode::CONFLICT);
    }

    #[test]
    fn test_authentication_error_response() {
        let error = AppError::AuthenticationError("invalid login details".to_string());
        let response = error.error_response();

        assert_eq!(
            response.status(),
            actix_web::http::StatusCode::UNAUTHORIZED
        );
    }

    #[test]
    fn test_internal_error_response() {
        let error = AppError::InternalError("Something went wrong".to_string());
        let response = error.error_response();

        assert_eq!(
            response.status(),
            actix_web::http::StatusCode::INTERNAL_SERVER_ERROR
        );
    }

    #[test]
    fn test_error_body_uses_envelope_shape() {
        let error = AppError::NotFound("District with id 0 not found".to_string());
        let body = error.error_response().into_body().try_into_bytes().unwrap();
        let json: serde_json::Value = serde_json::from_slice(&body).unwrap();

        assert_eq!(json["status"], "Error");
        assert_eq!(json["message"], "District with id 0 not found");
    }
}
