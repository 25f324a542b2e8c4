use serde::{Deserialize, Serialize};

/// 로그인 성공 응답
///
/// ```json
/// { "token": "eyJhbGciOiJIUzI1NiJ9..." }
/// ```
#[derive(Clone, Serialize, Deserialize)]
pub struct Token {
    pub token: String,
}

impl Token {
    pub fn new(token: String) -> Self {
        Self { token }
    }
}

impl std::fmt::Debug for Token {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Token").field("token", &"[redacted]").finish()
    }
}

/// 단일 메시지 응답
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct MessageResponse {
    pub message: String,
}

impl MessageResponse {
    pub fn new(message: impl Into<String>) -> Self {
        Self {
            message: message.into(),
        }
    }
}
