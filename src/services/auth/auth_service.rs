//! 로그인 서비스
//!
//! 사용자명/비밀번호를 확인하고 토큰을 발급합니다.

use std::sync::Arc;
use log::{debug, info, warn};

use crate::core::errors::AppError;
use crate::domain::dto::tokens::Token;
use crate::domain::dto::users::LoginRequest;
use crate::repositories::users::AccountDirectory;
use super::{PasswordHasher, TokenService};

/// 로그인 실패 시 사용자에게 보여주는 단일 메시지
///
/// 사용자명이 없는 경우와 비밀번호가 틀린 경우를 구분하지 않습니다.
pub const INVALID_CREDENTIALS_MESSAGE: &str = "Usuário ou senha inválidos.";

/// 로그인 처리 서비스
#[derive(Debug, Clone)]
pub struct AuthService {
    directory: Arc<dyn AccountDirectory>,
    hasher: Arc<dyn PasswordHasher>,
    tokens: Arc<TokenService>,
}

impl AuthService {
    pub fn new(
        directory: Arc<dyn AccountDirectory>,
        hasher: Arc<dyn PasswordHasher>,
        tokens: Arc<TokenService>,
    ) -> Self {
        Self {
            directory,
            hasher,
            tokens,
        }
    }

    /// 사용자명/비밀번호 로그인
    ///
    /// # Errors
    ///
    /// * `AppError::AuthenticationError` - 필드가 비었거나, 계정이 없거나, 비밀번호가 틀린 경우
    /// * `AppError::DatabaseError` - 계정 조회 실패
    pub async fn login(&self, request: &LoginRequest) -> Result<Token, AppError> {
        if !request.is_complete() {
            debug!("로그인 거부: 사용자명 또는 비밀번호 누락");
            return Err(Self::invalid_credentials());
        }

        let Some(account) = self.directory.find_by_username(&request.username).await? else {
            warn!("로그인 실패: 존재하지 않는 사용자명 ({})", request.username);
            return Err(Self::invalid_credentials());
        };

        if !self.hasher.verify(&request.password, &account.password_hash) {
            warn!("로그인 실패: 비밀번호 불일치 ({})", request.username);
            return Err(Self::invalid_credentials());
        }

        let token = self.tokens.issue(&account)?;
        info!("로그인 성공: {}", account.username);

        Ok(token)
    }

    fn invalid_credentials() -> AppError {
        AppError::AuthenticationError(INVALID_CREDENTIALS_MESSAGE.to_string())
    }
}
