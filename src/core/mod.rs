//! # Core Module
//!
//! 서비스 전역에서 공유하는 기반 타입을 제공합니다.
//!
//! ### [`errors`] - 통합 에러 처리
//! - **AppError**: 애플리케이션 전역 에러 타입, Actix-Web `ResponseError` 구현
//! - **TokenError**: 토큰 해석 실패 종류 (서명, 발급자, 만료, 계정 없음)
//! - **FieldViolation**: 필드 단위 검증 실패 정보
//!
//! 의존성은 전역 레지스트리 없이 `main`에서 한 번 조립하고,
//! `Arc`로 각 계층에 명시적으로 전달합니다.
//!
//! ```rust,ignore
//! let directory: Arc<dyn AccountDirectory> = Arc::new(InMemoryAccountRepository::new());
//! let token_service = Arc::new(TokenService::new(&JwtConfig::secret()?, directory.clone())?);
//! ```

pub mod errors;

pub use errors::*;
