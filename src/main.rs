//! SecurePass 계정 서비스 메인 애플리케이션
//!
//! Actix-web 기반의 HTTP 서버를 구동하고 모든 서비스를 조립합니다.
//! 계정 저장소(MongoDB 또는 메모리)를 연결하고 JWT 인증 기반의 REST API를 제공합니다.

use std::sync::Arc;
use actix_cors::Cors;
use actix_web::http::header;
use actix_web::{middleware, web, App, HttpServer};
use dotenv::dotenv;
use env_logger::Env;
use log::{error, info, warn};
use securepass_backend::config::{AccountStore, CorsConfig, DirectoryConfig, JwtConfig, ServerConfig};
use securepass_backend::core::errors::AppError;
use securepass_backend::db::Database;
use securepass_backend::middlewares::AuthMiddleware;
use securepass_backend::repositories::users::{
    AccountDirectory, InMemoryAccountRepository, MongoAccountRepository,
};
use securepass_backend::routes::{configure_all_routes, json_config};
use securepass_backend::services::auth::{AuthService, BcryptPasswordHasher, PasswordHasher, TokenService};
use securepass_backend::services::users::UserService;

/// 요청 처리에 필요한 서비스 묶음
///
/// 워커마다 `App`을 새로 만들기 때문에 `Clone`이 저렴해야 합니다.
#[derive(Clone)]
struct AppServices {
    tokens: Arc<TokenService>,
    auth: web::Data<AuthService>,
    users: web::Data<UserService>,
}

#[actix_web::main]
async fn main() -> std::io::Result<()> {
    // 환경 설정 및 로깅 초기화
    load_env_file();
    init_logging();

    info!("🚀 SecurePass 계정 서비스 시작중...");

    let services = match initialize_services().await {
        Ok(services) => services,
        Err(e) => {
            error!("❌ 서비스 초기화 실패: {}", e);
            return Err(std::io::Error::other(e.to_string()));
        }
    };

    info!("✅ 모든 서비스가 성공적으로 초기화되었습니다!");

    // HTTP 서버 시작
    start_http_server(services).await
}

/// 저장소를 연결하고 서비스를 조립합니다
///
/// # Errors
///
/// * `AppError::ConfigurationError` - `JWT_SECRET`이 없거나 비어 있음
/// * `AppError::DatabaseError` - MongoDB 연결 또는 인덱스 생성 실패
async fn initialize_services() -> Result<AppServices, AppError> {
    // 요청을 받기 전에 서명 키부터 확인합니다.
    let secret = JwtConfig::secret()?;

    let directory = initialize_directory().await?;
    let hasher: Arc<dyn PasswordHasher> = Arc::new(BcryptPasswordHasher::from_config());
    let tokens = Arc::new(TokenService::new(&secret, directory.clone())?);

    let auth = AuthService::new(directory.clone(), hasher.clone(), tokens.clone());
    let users = UserService::new(directory, hasher);

    Ok(AppServices {
        tokens,
        auth: web::Data::new(auth),
        users: web::Data::new(users),
    })
}

/// `ACCOUNT_STORE` 설정에 따라 계정 디렉터리를 준비합니다
async fn initialize_directory() -> Result<Arc<dyn AccountDirectory>, AppError> {
    match DirectoryConfig::backend() {
        AccountStore::MongoDb => {
            info!("📡 데이터베이스 연결 중...");

            let database = Database::new().await?;
            let repository = MongoAccountRepository::new(&database);
            repository.create_indexes().await?;

            Ok(Arc::new(repository))
        }
        AccountStore::Memory => {
            warn!("⚠️ 메모리 계정 저장소 사용: 재시작하면 모든 계정이 사라집니다");
            Ok(Arc::new(InMemoryAccountRepository::new()))
        }
    }
}

/// HTTP 서버를 구성하고 실행합니다
///
/// CORS, 로깅, 경로 정규화, 인가 게이트 미들웨어를 포함합니다.
///
/// # Errors
///
/// * `std::io::Error` - 포트 바인딩 실패 또는 서버 실행 오류
async fn start_http_server(services: AppServices) -> std::io::Result<()> {
    let bind_address = format!("{}:{}", ServerConfig::host(), ServerConfig::port());

    info!("🌐 서버가 http://{} 에서 실행중입니다", bind_address);
    info!("📍 Health check: http://{}/health", bind_address);

    HttpServer::new(move || {
        // CORS 설정
        let cors = configure_cors();

        App::new()
            // 인가 게이트가 가장 안쪽에서 모든 라우트를 감쌉니다
            .wrap(AuthMiddleware::new(services.tokens.clone()))
            .wrap(middleware::NormalizePath::trim())
            .wrap(middleware::Logger::default())
            .wrap(cors)

            .app_data(json_config())
            .app_data(services.auth.clone())
            .app_data(services.users.clone())

            // 라우트 설정
            .configure(configure_all_routes)
    })
        .bind(bind_address)?
        .run()
        .await
}

/// 환경별 설정 파일을 로드합니다
///
/// # Environment Variables
///
/// * `PROFILE=dev` - .env.dev 파일 로드 (기본값)
/// * `PROFILE=prod` - .env.prod 파일 로드
/// * 기타 - 기본 .env 파일 로드
///
/// 로거 초기화 전에 실행되므로 결과는 표준 에러로 출력합니다.
fn load_env_file() {
    let profile = std::env::var("PROFILE").unwrap_or_else(|_| "dev".to_string());

    let loaded = match profile.as_str() {
        "prod" => dotenv::from_filename(".env.prod").map(|_| ".env.prod"),
        "dev" => dotenv::from_filename(".env.dev").map(|_| ".env.dev"),
        _ => dotenv().map(|_| ".env"),
    };

    match loaded {
        Ok(file) => eprintln!("Current profile: {} ({} 파일 로드 됨)", profile, file),
        Err(e) => eprintln!("Current profile: {} (설정 파일 로드 실패: {})", profile, e),
    }
}

/// 로깅 시스템을 초기화합니다
///
/// * `RUST_LOG` - 로깅 레벨 설정 (기본값: "info,actix_web=info")
fn init_logging() {
    env_logger::init_from_env(Env::default().default_filter_or("info,actix_web=info"));
}

/// CORS 설정을 구성합니다
///
/// 허용 Origin은 `CORS_ALLOWED_ORIGINS`에서 읽습니다.
fn configure_cors() -> Cors {
    let cors = CorsConfig::allowed_origins()
        .iter()
        .fold(Cors::default(), |cors, origin| cors.allowed_origin(origin));

    cors
        // 허용할 HTTP 메서드
        .allowed_methods(vec!["GET", "POST", "PUT", "DELETE", "OPTIONS"])

        // 허용할 헤더
        .allowed_headers(vec![
            header::AUTHORIZATION,
            header::ACCEPT,
            header::CONTENT_TYPE,
        ])
        .expose_headers(vec![header::LOCATION])

        // Preflight 요청 캐시 시간 (초)
        .max_age(3600)
}
