//! 사용자 관리 서비스 모듈
//!
//! 사용자 등록, 조회, 수정, 삭제를 담당합니다.
//!
//! # Security
//!
//! - 비밀번호는 `PasswordHasher`를 거쳐서만 저장
//! - 사용자명 중복 방지
//! - 입력값 검증
//!
//! # Examples
//!
//! ```rust,ignore
//! use crate::services::users::UserService;
//!
//! let user_service = UserService::new(directory, hasher);
//! let response = user_service.create_user(request).await?;
//! ```

pub mod user_service;

pub use user_service::*;
