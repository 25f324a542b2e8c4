//! 데이터 액세스 계층을 담당하는 리포지토리 모듈
//!
//! 서비스 계층은 [`AccountDirectory`](users::AccountDirectory) trait만 알고,
//! 실제 저장소는 시작 시점에 `ACCOUNT_STORE` 설정으로 선택됩니다.
//!
//! # Examples
//!
//! ```rust,ignore
//! use std::sync::Arc;
//! use crate::repositories::users::{AccountDirectory, InMemoryAccountRepository};
//!
//! let directory: Arc<dyn AccountDirectory> = Arc::new(InMemoryAccountRepository::new());
//! let account = directory.find_by_username("MatheusSS09").await?;
//! ```

pub mod users;
