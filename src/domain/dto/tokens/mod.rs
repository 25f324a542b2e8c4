//! 토큰 관련 응답 DTO

pub mod response;

pub use response::*;
