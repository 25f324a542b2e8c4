//! JWT 클레임 구조체
//!
//! 서명된 토큰 안에 들어가는 최소한의 정보만 정의합니다.
use serde::{Deserialize, Serialize};

/// JWT 토큰의 클레임(Payload) 구조체
///
/// ## 클레임 구성
///
/// - `iss`: 발급자 (항상 `SecurePass`)
/// - `sub`: 토큰의 주체 (사용자명)
/// - `role`: 역할 (현재 `user` 하나)
/// - `exp`: 토큰 만료 시간 (UTC 기준 Unix timestamp)
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TokenClaims {
    pub iss: String,
    pub sub: String,
    pub role: String,
    pub exp: i64,
}
