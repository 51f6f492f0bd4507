//! Authentication HTTP Handlers
//!
//! 회원가입과 로그인 엔드포인트를 처리합니다. 로그인은 세션이나 토큰을
//! 발급하지 않고 판정 결과만 평문으로 응답하는 것이 이 API의 계약입니다.

use actix_web::{HttpResponse, http::StatusCode, post, web};
use validator::Validate;

use crate::domain::dto::{LoginRequest, SignupRequest, UserResponse};
use crate::errors::AppError;
use crate::services::AuthService;
use crate::services::auth_service::LoginOutcome;

/// 회원가입 핸들러
///
/// 이메일 형식과 필수 필드를 검증한 뒤 사용자를 생성합니다.
/// 응답은 비밀번호 해시를 제외한 저장된 문서입니다.
///
/// # Endpoint
/// `POST /signup`
#[post("/signup")]
pub async fn signup(
    auth: web::Data<AuthService>,
    payload: web::Json<SignupRequest>,
) -> Result<HttpResponse, AppError> {
    payload
        .validate()
        .map_err(|e| AppError::ValidationError(e.to_string()))?;

    let registered = auth.signup(payload.into_inner()).await?;

    Ok(HttpResponse::Created().json(UserResponse::from(registered)))
}

/// 로그인 핸들러
///
/// 자격이 맞으면 201, 비밀번호 불일치면 300으로 각각 평문을 응답합니다.
/// 300은 이 API가 물려받은 계약입니다. 알 수 없는 이메일은 구조화된
/// 401로 응답합니다.
///
/// # Endpoint
/// `POST /login`
#[post("/login")]
pub async fn login(
    auth: web::Data<AuthService>,
    payload: web::Json<LoginRequest>,
) -> Result<HttpResponse, AppError> {
    payload
        .validate()
        .map_err(|e| AppError::ValidationError(e.to_string()))?;

    match auth.login(&payload).await? {
        LoginOutcome::Success => Ok(HttpResponse::Created()
            .content_type("text/plain; charset=utf-8")
            .body("User logged in successfully")),
        LoginOutcome::WrongPassword => Ok(HttpResponse::build(StatusCode::MULTIPLE_CHOICES)
            .content_type("text/plain; charset=utf-8")
            .body("invalid login details")),
    }
}
