//! # Configuration Module
//!
//! 환경 변수 기반의 설정값들을 중앙집중식으로 관리합니다.
//!
//! ## 모듈 구성
//!
//! - [`data_config`] - 저장소, 서버, 환경, 비밀번호 해싱 설정
//! - [`auth_config`] - 토큰 서명 키와 클레임 상수
//!
//! ## 환경 변수 설정 가이드
//!
//! ### 필수 환경 변수
//!
//! ```bash
//! export JWT_SECRET="your-super-secret-key"
//! ```
//!
//! ### 선택적 환경 변수
//!
//! ```bash
//! export HOST="0.0.0.0"
//! export PORT="8080"
//! export ENVIRONMENT="production"      # development, test, staging, production
//! export BCRYPT_COST="12"              # 4-31 범위
//! export ACCOUNT_STORE="mongodb"       # mongodb, memory
//! export MONGODB_URI="mongodb://localhost:27017"
//! export DATABASE_NAME="securepass"
//! export CORS_ALLOWED_ORIGINS="http://localhost:3000"
//! ```

pub mod data_config;
pub mod auth_config;

pub use data_config::*;
pub use auth_config::*;
