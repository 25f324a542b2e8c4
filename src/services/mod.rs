//! 비즈니스 로직을 담당하는 서비스 계층 모듈
//!
//! 서비스는 생성자로 의존성(`Arc<dyn AccountDirectory>`, `Arc<dyn PasswordHasher>`)을 받고,
//! `main`에서 한 번 조립되어 `web::Data`로 핸들러에 전달됩니다.
//!
//! # Features
//!
//! - 사용자 생명주기 관리 (생성, 조회, 수정, 삭제)
//! - JWT 토큰 발급 및 해석
//! - 사용자명/비밀번호 로그인

pub mod users;
pub mod auth;
