use std::fmt;
use std::future::{ready, Ready};
use actix_web::{FromRequest, HttpMessage, HttpRequest};

use crate::config::USER_AUTHORITY;
use crate::core::errors::AppError;
use crate::domain::entities::users::Account;

/// 인가 게이트가 토큰을 해석한 뒤 요청 확장(extensions)에 넣는 신원 정보
///
/// 요청 하나의 수명 동안만 존재합니다. 비밀번호 해시는 하위 신원 주체를
/// 구성하는 용도로만 보관하며 어떤 응답에도 포함되지 않습니다.
#[derive(Clone)]
pub struct AuthenticatedIdentity {
    username: String,
    password_hash: String,
    authority: &'static str,
}

impl AuthenticatedIdentity {
    pub fn new(username: String, password_hash: String) -> Self {
        Self {
            username,
            password_hash,
            authority: USER_AUTHORITY,
        }
    }

    pub fn username(&self) -> &str {
        &self.username
    }

    pub fn password_hash(&self) -> &str {
        &self.password_hash
    }

    pub fn authority(&self) -> &'static str {
        self.authority
    }
}

impl From<&Account> for AuthenticatedIdentity {
    fn from(account: &Account) -> Self {
        Self::new(account.username.clone(), account.password_hash.clone())
    }
}

impl fmt::Debug for AuthenticatedIdentity {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("AuthenticatedIdentity")
            .field("username", &self.username)
            .field("password_hash", &"[hidden]")
            .field("authority", &self.authority)
            .finish()
    }
}

/// ActixWeb FromRequest trait 구현
///
/// 게이트가 신원을 넣지 않은 요청(헤더 없음)은 401로 거부됩니다.
impl FromRequest for AuthenticatedIdentity {
    type Error = AppError;
    type Future = Ready<Result<Self, Self::Error>>;

    fn from_request(req: &HttpRequest, _payload: &mut actix_web::dev::Payload) -> Self::Future {
        match req.extensions().get::<AuthenticatedIdentity>() {
            Some(identity) => ready(Ok(identity.clone())),
            None => ready(Err(AppError::AuthenticationError(
                "Autenticação necessária.".to_string(),
            ))),
        }
    }
}
