//! Users Entity Module
//!
//! 등록된 사용자 계정을 나타내는 [`Account`](user::Account) 엔티티를 포함합니다.
//!
//! ```rust,ignore
//! use crate::domain::entities::users::Account;
//!
//! let account = Account::new(
//!     "Matheus Silva".to_string(),
//!     "MatheusSS09".to_string(),
//!     hashed_password,
//!     NaiveDate::from_ymd_opt(2003, 11, 14).unwrap(),
//! );
//! ```

pub mod user;

pub use user::Account;
