//! 인증 관련 요청 범위 모델

pub mod authenticated_user;

pub use authenticated_user::*;
