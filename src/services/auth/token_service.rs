//! JWT 토큰 관리 서비스 구현
//!
//! 로그인 시 서명된 토큰을 발급하고, 요청마다 토큰을 해석하여 계정을 찾습니다.
//! 토큰은 저장하지 않으며 만료 전까지 스스로 검증 가능합니다 (폐기 목록 없음).

use std::fmt;
use std::sync::Arc;
use chrono::{Duration, Utc};
use jsonwebtoken::{
    decode, encode, errors::ErrorKind, Algorithm, DecodingKey, EncodingKey, Header, Validation,
};

use crate::config::{TOKEN_ISSUER, TOKEN_ROLE, TOKEN_VALIDITY_HOURS};
use crate::core::errors::{AppError, ErrorContext, TokenError};
use crate::domain::dto::tokens::Token;
use crate::domain::entities::users::Account;
use crate::domain::models::token::TokenClaims;
use crate::repositories::users::AccountDirectory;

/// 토큰 발급/해석 서비스
///
/// 서명 키는 생성 시점에 한 번만 만들어지며, 키가 없으면 생성 자체가 실패합니다.
/// 따라서 `issue`는 설정 문제로 실패하지 않습니다.
pub struct TokenService {
    encoding_key: EncodingKey,
    decoding_key: DecodingKey,
    validation: Validation,
    directory: Arc<dyn AccountDirectory>,
}

impl TokenService {
    /// # Errors
    ///
    /// * `AppError::ConfigurationError` - 비밀 키가 비었거나 공백뿐인 경우
    pub fn new(secret: &str, directory: Arc<dyn AccountDirectory>) -> Result<Self, AppError> {
        if secret.trim().is_empty() {
            return Err(AppError::ConfigurationError(
                "token signing secret must not be empty".to_string(),
            ));
        }

        let mut validation = Validation::new(Algorithm::HS256);
        validation.set_issuer(&[TOKEN_ISSUER]);
        validation.set_required_spec_claims(&["exp", "iss", "sub"]);
        validation.leeway = 0;

        Ok(Self {
            encoding_key: EncodingKey::from_secret(secret.as_bytes()),
            decoding_key: DecodingKey::from_secret(secret.as_bytes()),
            validation,
            directory,
        })
    }

    /// 계정에 대한 토큰 발급
    ///
    /// 만료 시각은 UTC 기준 현재 시각 + 1시간입니다.
    pub fn issue(&self, account: &Account) -> Result<Token, AppError> {
        let expires_at = Utc::now() + Duration::hours(TOKEN_VALIDITY_HOURS);

        let claims = TokenClaims {
            iss: TOKEN_ISSUER.to_string(),
            sub: account.username.clone(),
            role: TOKEN_ROLE.to_string(),
            exp: expires_at.timestamp(),
        };

        self.sign(&claims).map(Token::new)
    }

    /// 토큰을 검증하고 subject에 해당하는 계정을 반환
    ///
    /// 검증 순서: 구조 → 서명 → 발급자/만료 → 계정 조회
    pub async fn resolve(&self, token: &str) -> Result<Account, TokenError> {
        let claims = self.verify(token)?;

        match self.directory.find_by_username(&claims.sub).await {
            Ok(Some(account)) => Ok(account),
            Ok(None) => Err(TokenError::SubjectNotFound),
            Err(e) => Err(TokenError::Lookup(e.to_string())),
        }
    }

    fn verify(&self, token: &str) -> Result<TokenClaims, TokenError> {
        decode::<TokenClaims>(token, &self.decoding_key, &self.validation)
            .map(|data| data.claims)
            .map_err(|e| match e.kind() {
                ErrorKind::InvalidSignature | ErrorKind::InvalidAlgorithm => TokenError::SignatureInvalid,
                ErrorKind::InvalidIssuer => TokenError::IssuerMismatch,
                ErrorKind::MissingRequiredClaim(claim) if claim == "iss" => TokenError::IssuerMismatch,
                ErrorKind::ExpiredSignature => TokenError::TokenExpired,
                _ => TokenError::Malformed(e.to_string()),
            })
    }

    fn sign(&self, claims: &TokenClaims) -> Result<String, AppError> {
        encode(&Header::new(Algorithm::HS256), claims, &self.encoding_key).context("JWT 토큰 생성 실패")
    }
}

impl fmt::Debug for TokenService {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("TokenService")
            .field("algorithm", &Algorithm::HS256)
            .field("issuer", &TOKEN_ISSUER)
            .field("keys", &"[redacted]")
            .finish()
    }
}
