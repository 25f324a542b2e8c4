//! 사용자 요청 DTO
//!
//! 모든 요청 DTO는 `#[serde(default)]`로 누락 필드를 빈 값으로 받은 뒤
//! `validator`로 검증합니다. 누락과 공백을 같은 규칙으로 거부하기 위함입니다.

pub mod auth_request;
pub mod create_user;
pub mod update_user;
pub mod rules;

pub use auth_request::*;
pub use create_user::*;
pub use update_user::*;
