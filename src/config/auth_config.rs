//! # Authentication Configuration Module
//!
//! 토큰 서명 키와 토큰 클레임 상수를 관리합니다.
//!
//! ## 필수 환경 변수
//!
//! ```bash
//! export JWT_SECRET="your-super-secret-jwt-key"
//! ```
//!
//! `JWT_SECRET`이 없으면 서버는 시작하지 않습니다.
//! 요청 처리 도중이 아니라 시작 시점에 실패하도록 [`JwtConfig::secret`]이
//! `Result`를 반환합니다.

use std::env;
use crate::core::errors::AppError;

/// 토큰 `iss` 클레임에 들어가는 서비스 식별자
pub const TOKEN_ISSUER: &str = "SecurePass";

/// 토큰 `role` 클레임 (현재 단일 역할)
pub const TOKEN_ROLE: &str = "user";

/// 인증된 요청에 부여되는 권한 태그
pub const USER_AUTHORITY: &str = "USER";

/// 토큰 유효 시간 (시간 단위)
pub const TOKEN_VALIDITY_HOURS: i64 = 1;

/// JSON Web Token (JWT) 관련 설정
///
/// 서명 알고리즘은 HMAC-SHA256 하나만 사용하며,
/// 키는 `JWT_SECRET` 문자열에서 파생됩니다.
pub struct JwtConfig;

impl JwtConfig {
    /// 토큰 서명용 비밀 문자열을 반환합니다.
    ///
    /// # Errors
    ///
    /// * `AppError::ConfigurationError` - `JWT_SECRET`이 없거나 공백뿐인 경우
    pub fn secret() -> Result<String, AppError> {
        Self::secret_from(env::var("JWT_SECRET").ok())
    }

    fn secret_from(value: Option<String>) -> Result<String, AppError> {
        match value {
            Some(secret) if !secret.trim().is_empty() => Ok(secret),
            _ => Err(AppError::ConfigurationError(
                "JWT_SECRET must be set to a non-empty value".to_string(),
            )),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_secret_present() {
        let secret = JwtConfig::secret_from(Some("nmkdscauhiodfasbjkdhaS03489550437".to_string()));
        assert_eq!(secret.unwrap(), "nmkdscauhiodfasbjkdhaS03489550437");
    }

    #[test]
    fn test_secret_missing_is_configuration_error() {
        assert!(matches!(
            JwtConfig::secret_from(None),
            Err(AppError::ConfigurationError(_))
        ));
    }

    #[test]
    fn test_secret_blank_is_configuration_error() {
        assert!(matches!(
            JwtConfig::secret_from(Some("   ".to_string())),
            Err(AppError::ConfigurationError(_))
        ));
    }
}
