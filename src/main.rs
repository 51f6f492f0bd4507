//! SubsidyX 백엔드 메인 애플리케이션
//!
//! Actix-web 기반의 HTTP 서버를 구동하고 MongoDB 연결을 초기화합니다.
//! 저장소 연결 실패는 로그로만 남고 서버 기동을 막지 않습니다.

use std::time::Duration;

use actix_cors::Cors;
use actix_governor::{Governor, GovernorConfigBuilder};
use actix_web::http::header;
use actix_web::{App, HttpServer, middleware, web};
use dotenv::dotenv;
use env_logger::Env;
use log::{error, info};

use subsidyx_backend::config::ServerConfig;
use subsidyx_backend::db::Database;
use subsidyx_backend::domain::entities::{
    Category, Department, District, Question, Sector, State, Taluka,
};
use subsidyx_backend::repositories::{self, CrudRepository, UserRepository};
use subsidyx_backend::routes::configure_all_routes;
use subsidyx_backend::services::AuthService;

/// Rate Limiting 설정 구조체
#[derive(Debug)]
struct RateLimitConfig {
    per_second: u64,
    burst_size: u32,
}

#[actix_web::main]
async fn main() -> std::io::Result<()> {
    // 환경 설정 및 로깅 초기화
    load_env_file();
    init_logging();

    info!("🚀 SubsidyX 백엔드 시작중...");

    // 데이터 스토어 초기화. 클라이언트 생성 실패는 설정 오류이므로 종료하고,
    // 연결 확인 실패는 로그만 남기고 계속 기동합니다.
    info!("📡 데이터베이스 연결 중...");
    let database = Database::connect().await.expect("MongoDB 클라이언트 생성 실패");

    match database.ping().await {
        Ok(()) => {
            info!("✅ Database connection successful");

            if let Err(e) = repositories::ensure_indexes(&database).await {
                error!("유니크 인덱스 생성 실패: {}", e);
            }
        }
        Err(e) => error!("❌ Database connection failed: {}", e),
    }

    // HTTP 서버 시작
    start_http_server(database).await
}

/// HTTP 서버를 구성하고 실행합니다
///
/// 리포지토리와 인증 서비스를 `web::Data`로 주입하고
/// CORS, 로깅, 경로 정규화, Rate Limiting 미들웨어를 적용합니다.
///
/// # Errors
///
/// * `std::io::Error` - 포트 바인딩 실패 또는 서버 실행 오류
async fn start_http_server(database: Database) -> std::io::Result<()> {
    let bind_address = format!("{}:{}", ServerConfig::host(), ServerConfig::port());

    info!("🌐 서버가 http://{} 에서 실행중입니다", bind_address);
    info!("📍 Health check: http://{}/health", bind_address);

    // Rate Limiting 설정
    let rate_limit_config = load_rate_limit_config();
    let governor_conf = GovernorConfigBuilder::default()
        .requests_per_second(rate_limit_config.per_second)
        .burst_size(rate_limit_config.burst_size)
        .use_headers()
        .finish()
        .unwrap();

    info!(
        "🛡️ Rate Limiting 활성화: 초당 {}요청, 버스트 {}개",
        rate_limit_config.per_second, rate_limit_config.burst_size
    );

    // 명시적으로 소유되는 저장소 핸들들. 핸들러에는 web::Data로 주입됩니다.
    let user_repo = UserRepository::new(&database);
    let auth_service = web::Data::new(AuthService::new(user_repo));
    let category_repo = web::Data::new(CrudRepository::<Category>::new(&database));
    let sector_repo = web::Data::new(CrudRepository::<Sector>::new(&database));
    let state_repo = web::Data::new(CrudRepository::<State>::new(&database));
    let district_repo = web::Data::new(CrudRepository::<District>::new(&database));
    let taluka_repo = web::Data::new(CrudRepository::<Taluka>::new(&database));
    let department_repo = web::Data::new(CrudRepository::<Department>::new(&database));
    let question_repo = web::Data::new(CrudRepository::<Question>::new(&database));

    HttpServer::new(move || {
        let cors = configure_cors();

        App::new()
            // Rate Limiting 미들웨어 (가장 먼저 적용)
            .wrap(Governor::new(&governor_conf))
            .wrap(cors)
            .wrap(middleware::Logger::default())
            .wrap(middleware::NormalizePath::trim())
            // 저장소 핸들 주입
            .app_data(auth_service.clone())
            .app_data(category_repo.clone())
            .app_data(sector_repo.clone())
            .app_data(state_repo.clone())
            .app_data(district_repo.clone())
            .app_data(taluka_repo.clone())
            .app_data(department_repo.clone())
            .app_data(question_repo.clone())
            // 라우트 설정
            .configure(configure_all_routes)
    })
    .bind(bind_address)?
    // 요청 경계 타임아웃
    .client_request_timeout(Duration::from_secs(30))
    .workers(4)
    .run()
    .await
}

/// 환경별 설정 파일을 로드합니다
///
/// PROFILE 환경변수에 따라 적절한 .env 파일을 로드합니다.
///
/// # Environment Variables
///
/// * `PROFILE=dev` - .env.dev 파일 로드
/// * `PROFILE=prod` - .env.prod 파일 로드
/// * 기타 - 기본 .env 파일 로드
fn load_env_file() {
    let profile = std::env::var("PROFILE").unwrap_or_else(|_| "dev".to_string());

    match profile.as_str() {
        "prod" => match dotenv::from_filename(".env.prod") {
            Ok(_) => info!(".env.prod 파일 로드 됨"),
            Err(e) => error!(".env.prod 파일 로드 실패: {}", e),
        },
        "dev" => match dotenv::from_filename(".env.dev") {
            Ok(_) => info!(".env.dev 파일 로드 됨"),
            Err(e) => error!(".env.dev 파일 로드 실패: {}", e),
        },
        _ => {
            dotenv().ok();
            info!("기본 .env 파일 로드");
        }
    }
}

/// 로깅 시스템을 초기화합니다
///
/// 환경변수 RUST_LOG를 기반으로 로깅 레벨을 설정합니다.
/// 기본값은 info 레벨이며, actix_web은 debug 레벨로 설정됩니다.
fn init_logging() {
    env_logger::init_from_env(Env::default().default_filter_or("info,actix_web=debug"));
}

/// CORS 설정을 구성합니다
///
/// 개발환경에서 로컬호스트 프런트엔드와의 통신을 허용합니다.
fn configure_cors() -> Cors {
    Cors::default()
        .allowed_origin("http://localhost:3000")
        .allowed_origin("http://127.0.0.1:3000")
        .allowed_origin("http://localhost:8080")
        .allowed_origin("http://127.0.0.1:8080")
        .allowed_methods(vec!["GET", "POST", "PATCH", "DELETE", "OPTIONS"])
        .allowed_headers(vec![
            header::AUTHORIZATION,
            header::ACCEPT,
            header::CONTENT_TYPE,
        ])
        .supports_credentials()
        .max_age(3600)
}

/// 환경변수에서 Rate Limiting 설정을 로드합니다
///
/// * `RATE_LIMIT_PER_SECOND` - 초당 허용 요청 수 (기본값: 100)
/// * `RATE_LIMIT_BURST_SIZE` - 버스트 허용량 (기본값: 200)
fn load_rate_limit_config() -> RateLimitConfig {
    let per_second = std::env::var("RATE_LIMIT_PER_SECOND")
        .unwrap_or_else(|_| "100".to_string())
        .parse::<u64>()
        .unwrap_or_else(|e| {
            error!("RATE_LIMIT_PER_SECOND 파싱 실패: {}. 기본값 100 사용", e);
            100
        });

    let burst_size = std::env::var("RATE_LIMIT_BURST_SIZE")
        .unwrap_or_else(|_| "200".to_string())
        .parse::<u32>()
        .unwrap_or_else(|e| {
            error!("RATE_LIMIT_BURST_SIZE 파싱 실패: {}. 기본값 200 사용", e);
            200
        });

    let config = RateLimitConfig {
        per_second,
        burst_size,
    };

    info!("Rate Limiting 설정 로드됨: {:?}", config);
    config
}
