//! 미들웨어 모듈
//!
//! ActixWeb 애플리케이션의 요청 처리 파이프라인에서 사용되는 미들웨어들을 제공합니다.
//!
//! # 제공 미들웨어
//!
//! ### 인가 게이트 (AuthMiddleware)
//! - Bearer 토큰 추출 및 형식 검사
//! - `TokenService`로 토큰을 계정 신원으로 해석
//! - 신원을 request extension에 저장
//!
//! # 사용 방법
//!
//! ```rust,ignore
//! use actix_web::{App, HttpServer};
//! use crate::middlewares::AuthMiddleware;
//!
//! HttpServer::new(move || {
//!     App::new()
//!         .wrap(AuthMiddleware::new(token_service.clone()))
//!         .configure(configure_all_routes)
//! })
//! ```

pub mod auth_middleware;
mod auth_inner;

// 미들웨어 재export
pub use auth_middleware::AuthMiddleware;
