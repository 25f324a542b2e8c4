//! # Domain Models Module
//!
//! 영속되지 않는 도메인 모델을 정의하는 모듈입니다.
//!
//! ## Entities vs Models 구분
//!
//! ### Entities (`../entities/`)
//! - **영속성**: 데이터베이스에 직접 저장되는 객체
//! - **정체성**: 고유한 식별자(ID)를 가짐
//! - **예시**: `Account`
//!
//! ### Models (`./`)
//! - **요청 범위**: 한 요청 동안만 존재하거나 토큰 안에만 존재
//! - **불변성**: 생성 후 변경되지 않음
//! - **예시**: `AuthenticatedIdentity`, `TokenClaims`

pub mod auth;
pub mod token;

pub use auth::*;
pub use token::*;
