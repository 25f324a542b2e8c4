//! SecurePass 계정 서비스 백엔드
//!
//! 사용자 계정을 등록하고, 사용자명/비밀번호로 로그인하면 HS256 Bearer 토큰을 발급하며,
//! 모든 요청이 지나는 인가 게이트에서 토큰을 계정 신원으로 해석합니다.
//!
//! # Features
//!
//! - **사용자 관리**: 계정 생성, 내 정보 조회/수정, ID로 삭제
//! - **비밀번호 해싱**: 교체 가능한 `PasswordHasher` (bcrypt)
//! - **JWT 인증**: 1시간 유효 HS256 토큰, 발급자 고정
//! - **인가 게이트**: actix-web 미들웨어, 신원은 request extension으로 전달
//! - **MongoDB**: 사용자 데이터 영구 저장 (메모리 저장소 선택 가능)
//!
//! # Architecture
//!
//! ```text
//! request ─▶ Cors ─▶ Logger ─▶ NormalizePath ─▶ AuthMiddleware ─▶ handlers
//!                                                    │               │
//!                                         TokenService::resolve   services
//!                                                    │               │
//!                                                    └──▶ AccountDirectory ◀──┘
//!                                                         (MongoDB | Memory)
//! ```
//!
//! # Examples
//!
//! ```rust,ignore
//! use std::sync::Arc;
//! use securepass_backend::repositories::users::InMemoryAccountRepository;
//! use securepass_backend::services::auth::{BcryptPasswordHasher, TokenService};
//! use securepass_backend::services::users::UserService;
//!
//! let directory = Arc::new(InMemoryAccountRepository::new());
//! let hasher = Arc::new(BcryptPasswordHasher::from_config());
//! let user_service = UserService::new(directory.clone(), hasher);
//! let token_service = TokenService::new(&secret, directory)?;
//! ```

pub mod core;
pub mod config;
pub mod db;
pub mod domain;
pub mod repositories;
pub mod services;
pub mod utils;
pub mod routes;
pub mod handlers;
pub mod middlewares;
