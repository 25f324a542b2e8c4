//! # HTTP Request Handlers Module
//!
//! HTTP 요청을 처리하는 핸들러 함수들을 정의하는 모듈입니다.
//!
//! ## 아키텍처 위치
//!
//! ```text
//! HTTP Layer Architecture
//! ┌─────────────────────────────────────────────┐
//!   Client (Browser, Mobile App, API Client)
//! └─────────────────────┬───────────────────────┘
//!                       │ HTTP Request/Response
//! ┌─────────────────────▼───────────────────────┐
//!   AuthMiddleware - 인가 게이트                 ← Pipeline
//! ├─────────────────────────────────────────────┤
//!   Handlers (이 모듈) - HTTP 엔드포인트 처리     ← Web Layer
//! ├─────────────────────────────────────────────┤
//!   Services - 비즈니스 로직                      ← Service Layer
//! ├─────────────────────────────────────────────┤
//!   Repositories - 데이터 접근                    ← Repository Layer
//! └─────────────────────────────────────────────┘
//! ```
//!
//! ## 핸들러 규칙
//!
//! - 서비스는 `web::Data<T>`로 주입받습니다.
//! - 보호된 엔드포인트는 `AuthenticatedIdentity` 추출자를 인자로 받습니다.
//!   게이트가 신원을 넣지 않았다면 핸들러 본문은 실행되지 않고 401이 반환됩니다.
//! - 모든 핸들러는 `Result<HttpResponse, AppError>`를 반환합니다.

pub mod users;
pub mod auth;
