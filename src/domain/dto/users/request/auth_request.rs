use serde::{Deserialize, Serialize};

use crate::utils::string_utils::is_valid_string;

/// 로그인 요청
///
/// 형식 검증은 하지 않습니다. 빈 값은 인증 실패와 동일하게 처리되어
/// 어떤 필드가 문제였는지 드러내지 않습니다.
#[derive(Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct LoginRequest {
    pub username: String,
    pub password: String,
}

impl LoginRequest {
    pub fn new(username: impl Into<String>, password: impl Into<String>) -> Self {
        Self {
            username: username.into(),
            password: password.into(),
        }
    }

    /// 두 필드가 모두 공백이 아닌지 확인
    pub fn is_complete(&self) -> bool {
        is_valid_string(&self.username) && is_valid_string(&self.password)
    }
}

impl std::fmt::Debug for LoginRequest {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("LoginRequest")
            .field("username", &self.username)
            .field("password", &"[hidden]")
            .finish()
    }
}
