//! API 라우트 설정 모듈
//!
//! 리소스별 핸들러들을 스코프 단위로 묶어 애플리케이션에 등록합니다.
//! 인증 엔드포인트(`/signup`, `/login`)는 원 API의 경로 그대로 최상위에
//! 있습니다.

use actix_web::web;
use serde_json::json;

use crate::handlers;

/// 모든 라우트를 설정합니다
///
/// # Arguments
///
/// * `cfg` - Actix-web 서비스 설정 객체
///
/// # Examples
///
/// ```rust,ignore
/// use actix_web::{App, web};
///
/// let app = App::new().configure(configure_all_routes);
/// ```
pub fn configure_all_routes(cfg: &mut web::ServiceConfig) {
    // Health check endpoint
    cfg.service(health_check);

    configure_auth_routes(cfg);
    configure_category_routes(cfg);
    configure_sector_routes(cfg);
    configure_state_routes(cfg);
    configure_district_routes(cfg);
    configure_taluka_routes(cfg);
    configure_department_routes(cfg);
    configure_question_routes(cfg);
}

/// 인증 라우트: `POST /signup`, `POST /login`
fn configure_auth_routes(cfg: &mut web::ServiceConfig) {
    cfg.service(handlers::auth::signup)
        .service(handlers::auth::login);
}

/// 카테고리 CRUD 라우트
fn configure_category_routes(cfg: &mut web::ServiceConfig) {
    cfg.service(
        web::scope("/category")
            .service(handlers::category::create_category)
            .service(handlers::category::list_categories)
            .service(handlers::category::get_category)
            .service(handlers::category::update_category)
            .service(handlers::category::delete_category),
    );
}

/// 섹터 CRUD + 카테고리 필터 라우트
///
/// 필터 라우트는 `/sector/category/{category_id}`로, 단건 조회
/// `/sector/{id}`와 경로 패턴이 겹치지 않습니다.
fn configure_sector_routes(cfg: &mut web::ServiceConfig) {
    cfg.service(
        web::scope("/sector")
            .service(handlers::sector::create_sector)
            .service(handlers::sector::list_sectors)
            .service(handlers::sector::list_sectors_by_category)
            .service(handlers::sector::get_sector)
            .service(handlers::sector::update_sector)
            .service(handlers::sector::delete_sector),
    );
}

/// 주 CRUD 라우트
fn configure_state_routes(cfg: &mut web::ServiceConfig) {
    cfg.service(
        web::scope("/state")
            .service(handlers::state::create_state)
            .service(handlers::state::list_states)
            .service(handlers::state::get_state)
            .service(handlers::state::update_state)
            .service(handlers::state::delete_state),
    );
}

/// 지구 CRUD 라우트
fn configure_district_routes(cfg: &mut web::ServiceConfig) {
    cfg.service(
        web::scope("/district")
            .service(handlers::district::create_district)
            .service(handlers::district::list_districts)
            .service(handlers::district::get_district)
            .service(handlers::district::update_district)
            .service(handlers::district::delete_district),
    );
}

/// 탈루카 CRUD 라우트
fn configure_taluka_routes(cfg: &mut web::ServiceConfig) {
    cfg.service(
        web::scope("/taluka")
            .service(handlers::taluka::create_taluka)
            .service(handlers::taluka::list_talukas)
            .service(handlers::taluka::get_taluka)
            .service(handlers::taluka::update_taluka)
            .service(handlers::taluka::delete_taluka),
    );
}

/// 부서 CRUD 라우트
fn configure_department_routes(cfg: &mut web::ServiceConfig) {
    cfg.service(
        web::scope("/department")
            .service(handlers::department::create_department)
            .service(handlers::department::list_departments)
            .service(handlers::department::get_department)
            .service(handlers::department::update_department)
            .service(handlers::department::delete_department),
    );
}

/// 문항 라우트: 일괄 생성, 목록, 복합 필터, 단건, 수정, 삭제
fn configure_question_routes(cfg: &mut web::ServiceConfig) {
    cfg.service(
        web::scope("/question")
            .service(handlers::question::create_questions)
            .service(handlers::question::list_questions)
            .service(handlers::question::list_questions_by_category_and_sector)
            .service(handlers::question::get_question)
            .service(handlers::question::update_question)
            .service(handlers::question::delete_question),
    );
}

/// 서비스 상태를 확인하는 헬스체크 엔드포인트
///
/// 로드밸런서나 모니터링 시스템에서 서비스 상태를 확인하는 데 사용됩니다.
///
/// # Examples
///
/// ```bash
/// curl http://localhost:3000/health
/// ```
#[actix_web::get("/health")]
async fn health_check() -> actix_web::HttpResponse {
    actix_web::HttpResponse::Ok().json(json!({
        "status": "healthy",
        "service": "subsidyx_backend",
        "version": env!("CARGO_PKG_VERSION"),
        "timestamp": chrono::Utc::now().to_rfc3339(),
        "features": {
            "database": "MongoDB"
        }
    }))
}

#[cfg(test)]
mod tests {
    use super::*;
    use actix_web::{App, test};

    use crate::db::Database;
    use crate::domain::entities::{Question, State};
    use crate::repositories::CrudRepository;

    #[actix_web::test]
    async fn test_health_check_reports_healthy() {
        let app = test::init_service(App::new().service(health_check)).await;

        let request = test::TestRequest::get().uri("/health").to_request();
        let response: serde_json::Value = test::call_and_read_body_json(&app, request).await;

        assert_eq!(response["status"], "healthy");
        assert_eq!(response["service"], "subsidyx_backend");
    }

    // 클라이언트 생성은 연결을 열지 않으므로, 저장소까지 가기 전에 끝나는
    // 요청 경로는 실제 MongoDB 없이 검증할 수 있다.

    #[actix_web::test]
    async fn test_unparseable_object_id_is_rejected_with_envelope() {
        let database = Database::connect().await.unwrap();
        let state_repo = web::Data::new(CrudRepository::<State>::new(&database));

        let app = test::init_service(
            App::new()
                .app_data(state_repo)
                .configure(configure_all_routes),
        )
        .await;

        let request = test::TestRequest::get()
            .uri("/state/not-an-object-id")
            .to_request();
        let response = test::call_service(&app, request).await;

        assert_eq!(
            response.status(),
            actix_web::http::StatusCode::BAD_REQUEST
        );

        let body: serde_json::Value = test::read_body_json(response).await;
        assert_eq!(body["status"], "Error");
    }

    #[actix_web::test]
    async fn test_question_update_rejects_empty_array_body() {
        let database = Database::connect().await.unwrap();
        let question_repo = web::Data::new(CrudRepository::<Question>::new(&database));

        let app = test::init_service(
            App::new()
                .app_data(question_repo)
                .configure(configure_all_routes),
        )
        .await;

        let request = test::TestRequest::patch()
            .uri("/question/651f1c2e9d3a4b0012345678")
            .set_json(serde_json::json!([]))
            .to_request();
        let response = test::call_service(&app, request).await;

        assert_eq!(
            response.status(),
            actix_web::http::StatusCode::BAD_REQUEST
        );
    }
}
