//! 인증 및 보안 서비스 모듈
//!
//! 비밀번호 해싱, 토큰 발급/해석, 로그인 흐름을 담당하는 서비스들을 제공합니다.
//!
//! # Features
//!
//! - 교체 가능한 비밀번호 해셔 (`PasswordHasher` trait)
//! - HS256 JWT 발급 및 해석
//! - 사용자명/비밀번호 로그인
//!
//! # Security
//!
//! - bcrypt 솔트 해싱 (환경별 cost)
//! - HMAC-SHA256 토큰 서명, 발급자 고정
//! - 로그인 실패 메시지 단일화 (사용자명 열거 방지)
//!
//! # Examples
//!
//! ```rust,ignore
//! use std::sync::Arc;
//! use crate::services::auth::{AuthService, BcryptPasswordHasher, TokenService};
//!
//! let hasher = Arc::new(BcryptPasswordHasher::from_config());
//! let tokens = Arc::new(TokenService::new(&JwtConfig::secret()?, directory.clone())?);
//! let auth = AuthService::new(directory, hasher, tokens);
//!
//! let token = auth.login(&LoginRequest::new("MatheusSS09", "Matheus123!")).await?;
//! ```

pub mod password_hasher;
pub mod token_service;
pub mod auth_service;

pub use password_hasher::*;
pub use token_service::*;
pub use auth_service::*;
