//! # Configuration Module
//!
//! 백엔드 서비스의 설정 관리를 담당하는 모듈입니다.
//! 환경 변수 기반의 설정값들을 중앙집중식으로 관리합니다.
//!
//! ## 모듈 구성
//!
//! - [`data_config`] - 데이터베이스, 서버, 환경 관련 설정
//!
//! ## 환경 변수 설정 가이드
//!
//! ```bash
//! # 서버 설정
//! export HOST="0.0.0.0"
//! export PORT="3000"
//!
//! # MongoDB 설정
//! export MONGODB_URI="mongodb://localhost:27017"
//! export DATABASE_NAME="subsidyx_api"
//!
//! # 패스워드 해싱 강도 (선택)
//! export BCRYPT_COST="12"
//! ```

pub mod data_config;

pub use data_config::{DatabaseConfig, Environment, PasswordConfig, ServerConfig};
