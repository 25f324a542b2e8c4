//! # Domain Layer Module
//!
//! 계정 서비스의 도메인 계층입니다.
//!
//! ```text
//! Domain Layer (이 모듈)
//! ├── Entities      - 저장되는 계정 문서 (Account)
//! ├── DTOs          - 요청/응답 계약 (가입, 로그인, 수정, 토큰)
//! └── Models        - 요청 범위 모델 (인증된 신원, 토큰 클레임)
//!      │
//!      ▼
//! Application Layer (Services)
//!      │
//!      ▼
//! Infrastructure Layer (Repositories, DB)
//! ```

pub mod entities;
pub mod dto;
pub mod models;

pub use entities::*;
pub use dto::*;
pub use models::*;
