//! 데이터 및 서버 설정 관리 모듈
//!
//! 저장소, 서버, 환경 및 비밀번호 해싱 관련 설정을 관리합니다.

use std::env;

/// 애플리케이션 실행 환경
#[derive(Debug, Clone, PartialEq)]
pub enum Environment {
    Development,
    Test,
    Staging,
    Production,
}

impl Environment {
    pub fn current() -> Self {
        Self::from_str(&env::var("ENVIRONMENT").unwrap_or_else(|_| "production".to_string()))
    }

    pub fn from_str(s: &str) -> Self {
        match s.to_lowercase().as_str() {
            "development" | "dev" => Environment::Development,
            "test" | "testing" => Environment::Test,
            "staging" | "stage" => Environment::Staging,
            _ => Environment::Production,
        }
    }
}

/// 패스워드 해싱 설정
pub struct PasswordConfig;

impl PasswordConfig {
    /// `BCRYPT_COST`가 유효 범위(4-31)이면 그 값을, 아니면 환경별 기본값을 사용합니다.
    pub fn bcrypt_cost() -> u32 {
        if let Ok(cost_str) = env::var("BCRYPT_COST") {
            if let Ok(cost) = cost_str.parse::<u32>() {
                if (4..=31).contains(&cost) {
                    return cost;
                }
            }
            log::warn!("BCRYPT_COST 값이 유효하지 않습니다: {}. 환경별 기본값 사용", cost_str);
        }

        Self::bcrypt_cost_for_env(&Environment::current())
    }

    pub fn bcrypt_cost_for_env(env: &Environment) -> u32 {
        match env {
            Environment::Development => 4,
            Environment::Test => 4,
            Environment::Staging => 10,
            Environment::Production => 12,
        }
    }
}

/// 계정 디렉터리 저장소 종류
#[derive(Debug, Clone, PartialEq)]
pub enum AccountStore {
    /// MongoDB `users` 컬렉션
    MongoDb,
    /// 프로세스 메모리 (재시작 시 사라짐)
    Memory,
}

/// 계정 디렉터리 설정
pub struct DirectoryConfig;

impl DirectoryConfig {
    /// `ACCOUNT_STORE` 환경 변수 (기본값: mongodb)
    pub fn backend() -> AccountStore {
        Self::backend_from(&env::var("ACCOUNT_STORE").unwrap_or_default())
    }

    pub fn backend_from(value: &str) -> AccountStore {
        match value.trim().to_lowercase().as_str() {
            "memory" | "in-memory" | "inmemory" => AccountStore::Memory,
            _ => AccountStore::MongoDb,
        }
    }

    pub fn mongodb_uri() -> String {
        env::var("MONGODB_URI").unwrap_or_else(|_| "mongodb://localhost:27017".to_string())
    }

    pub fn database_name() -> String {
        env::var("DATABASE_NAME").unwrap_or_else(|_| "securepass".to_string())
    }
}

/// 서버 바인딩 설정
pub struct ServerConfig;

impl ServerConfig {
    pub fn port() -> u16 {
        env::var("PORT")
            .unwrap_or_else(|_| "8080".to_string())
            .parse()
            .unwrap_or(8080)
    }

    pub fn host() -> String {
        env::var("HOST").unwrap_or_else(|_| "0.0.0.0".to_string())
    }
}

/// CORS 설정
pub struct CorsConfig;

impl CorsConfig {
    /// `CORS_ALLOWED_ORIGINS` (쉼표 구분, 기본값: 로컬 개발 주소)
    pub fn allowed_origins() -> Vec<String> {
        let raw = env::var("CORS_ALLOWED_ORIGINS")
            .unwrap_or_else(|_| "http://localhost:3000,http://127.0.0.1:3000".to_string());
        Self::parse_origins(&raw)
    }

    pub fn parse_origins(raw: &str) -> Vec<String> {
        raw.split(',')
            .map(str::trim)
            .filter(|origin| !origin.is_empty())
            .map(str::to_string)
            .collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_environment_from_string() {
        assert_eq!(Environment::from_str("development"), Environment::Development);
        assert_eq!(Environment::from_str("test"), Environment::Test);
        assert_eq!(Environment::from_str("production"), Environment::Production);
        assert_eq!(Environment::from_str("unknown"), Environment::Production);
    }

    #[test]
    fn test_bcrypt_cost_for_each_environment() {
        assert_eq!(PasswordConfig::bcrypt_cost_for_env(&Environment::Development), 4);
        assert_eq!(PasswordConfig::bcrypt_cost_for_env(&Environment::Test), 4);
        assert_eq!(PasswordConfig::bcrypt_cost_for_env(&Environment::Staging), 10);
        assert_eq!(PasswordConfig::bcrypt_cost_for_env(&Environment::Production), 12);
    }

    #[test]
    fn test_account_store_selection() {
        assert_eq!(DirectoryConfig::backend_from("memory"), AccountStore::Memory);
        assert_eq!(DirectoryConfig::backend_from(" In-Memory "), AccountStore::Memory);
        assert_eq!(DirectoryConfig::backend_from("mongodb"), AccountStore::MongoDb);
        assert_eq!(DirectoryConfig::backend_from(""), AccountStore::MongoDb);
    }

    #[test]
    fn test_parse_origins() {
        let origins = CorsConfig::parse_origins("http://a.com, http://b.com ,,");
        assert_eq!(origins, vec!["http://a.com".to_string(), "http://b.com".to_string()]);
    }

    #[test]
    fn test_server_config_defaults() {
        if env::var("PORT").is_err() {
            assert_eq!(ServerConfig::port(), 8080);
        }

        if env::var("HOST").is_err() {
            assert_eq!(ServerConfig::host(), "0.0.0.0");
        }
    }
}
