//! AuthMiddleware 인증 로직의 핵심적인 기능
use std::rc::Rc;
use std::sync::Arc;
use actix_web::body::EitherBody;
use actix_web::dev::{forward_ready, Service, ServiceRequest, ServiceResponse};
use actix_web::http::header::{HeaderValue, AUTHORIZATION};
use actix_web::http::StatusCode;
use actix_web::{Error, HttpMessage, HttpResponse, ResponseError};
use futures_util::future::LocalBoxFuture;

use crate::core::errors::{AppError, TokenError};
use crate::domain::models::auth::AuthenticatedIdentity;
use crate::services::auth::TokenService;

pub(crate) const BEARER_REQUIRED_MESSAGE: &str = "Token must starts with Bearer";
pub(crate) const EMPTY_TOKEN_MESSAGE: &str = "Token não pode estar vazio.";

/// Authorization 헤더만 보고 내릴 수 있는 판단
#[derive(Debug, Clone, PartialEq, Eq)]
pub(crate) enum GateDecision {
    /// 헤더 없음 (또는 공백뿐): 인증 없이 통과
    PassThrough,
    /// 형식 오류: 즉시 응답
    Reject(StatusCode, &'static str),
    /// 해석할 토큰
    Token(String),
}

/// Authorization 헤더 형식 검사
///
/// - 없음, 빈 값, 공백뿐 → `PassThrough`
/// - `Bearer `로 시작하지 않음 (UTF-8이 아닌 값 포함) → 401
/// - 접두어 뒤 토큰이 공백뿐 → 401
pub(crate) fn inspect_authorization_header(header: Option<&HeaderValue>) -> GateDecision {
    let Some(header) = header else {
        return GateDecision::PassThrough;
    };

    let Ok(raw) = header.to_str() else {
        return GateDecision::Reject(StatusCode::UNAUTHORIZED, BEARER_REQUIRED_MESSAGE);
    };

    if raw.trim().is_empty() {
        return GateDecision::PassThrough;
    }

    match raw.strip_prefix("Bearer") {
        Some(rest) if rest.is_empty() || rest.starts_with(' ') => {
            let token = rest.trim();
            if token.is_empty() {
                GateDecision::Reject(StatusCode::UNAUTHORIZED, EMPTY_TOKEN_MESSAGE)
            } else {
                GateDecision::Token(token.to_string())
            }
        }
        _ => GateDecision::Reject(StatusCode::UNAUTHORIZED, BEARER_REQUIRED_MESSAGE),
    }
}

pub struct AuthMiddlewareService<S> {
    pub service: Rc<S>,
    pub token_service: Arc<TokenService>,
}

impl<S, B> Service<ServiceRequest> for AuthMiddlewareService<S>
where
    S: Service<ServiceRequest, Response = ServiceResponse<B>, Error = Error> + 'static,
    S::Future: 'static,
    B: 'static,
{
    type Response = ServiceResponse<EitherBody<B>>;
    type Error = Error;
    type Future = LocalBoxFuture<'static, actix_web::Result<Self::Response, Self::Error>>;

    forward_ready!(service);

    fn call(&self, req: ServiceRequest) -> Self::Future {
        let service = self.service.clone();
        let token_service = self.token_service.clone();

        Box::pin(async move {
            let decision = inspect_authorization_header(req.headers().get(AUTHORIZATION));

            match decision {
                GateDecision::PassThrough => {
                    log::debug!("Authorization 헤더 없음, 인증 없이 진행: {}", req.path());
                }
                GateDecision::Reject(status, message) => {
                    log::warn!("Authorization 헤더 형식 오류: {} ({})", message, req.path());
                    return Ok(reject(req, status, message.to_string()));
                }
                GateDecision::Token(token) => match token_service.resolve(&token).await {
                    Ok(account) => {
                        log::debug!("인증 성공: {}", account.username);
                        req.extensions_mut().insert(AuthenticatedIdentity::from(&account));
                    }
                    Err(TokenError::Lookup(cause)) => {
                        // 상세 원인은 AppError 응답 변환 과정에서 로그로만 남습니다.
                        let response = AppError::DatabaseError(cause).error_response();
                        let (req, _) = req.into_parts();
                        return Ok(ServiceResponse::new(req, response).map_into_right_body());
                    }
                    Err(err) => {
                        log::warn!("토큰 해석 실패: {:?}", err);
                        return Ok(reject(req, StatusCode::FORBIDDEN, err.to_string()));
                    }
                },
            }

            // 다음 서비스로 요청 전달
            let res = service.call(req).await?;
            Ok(res.map_into_left_body())
        })
    }
}

fn reject<B>(req: ServiceRequest, status: StatusCode, message: String) -> ServiceResponse<EitherBody<B>> {
    let response = HttpResponse::build(status).json(serde_json::json!({ "message": message }));
    let (req, _) = req.into_parts();
    ServiceResponse::new(req, response).map_into_right_body()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn inspect(value: &str) -> GateDecision {
        inspect_authorization_header(Some(&HeaderValue::from_str(value).unwrap()))
    }

    #[test]
    fn test_missing_or_blank_header_passes_through() {
        assert_eq!(inspect_authorization_header(None), GateDecision::PassThrough);
        assert_eq!(inspect(""), GateDecision::PassThrough);
        assert_eq!(inspect("   "), GateDecision::PassThrough);
    }

    #[test]
    fn test_wrong_scheme_is_rejected() {
        let expected = GateDecision::Reject(StatusCode::UNAUTHORIZED, BEARER_REQUIRED_MESSAGE);

        assert_eq!(inspect("Basic dXNlcjpwYXNz"), expected);
        assert_eq!(inspect("bearer abc"), expected);
        assert_eq!(inspect("Bearerabc"), expected);
    }

    #[test]
    fn test_empty_token_is_rejected() {
        let expected = GateDecision::Reject(StatusCode::UNAUTHORIZED, EMPTY_TOKEN_MESSAGE);

        assert_eq!(inspect("Bearer"), expected);
        assert_eq!(inspect("Bearer    "), expected);
    }

    #[test]
    fn test_token_is_extracted_and_trimmed() {
        assert_eq!(inspect("Bearer abc.def.ghi"), GateDecision::Token("abc.def.ghi".to_string()));
        assert_eq!(inspect("Bearer   abc.def.ghi  "), GateDecision::Token("abc.def.ghi".to_string()));
    }

    #[test]
    fn test_non_utf8_header_is_rejected() {
        let value = HeaderValue::from_bytes(&[0xFF, 0xFE]).unwrap();
        assert_eq!(
            inspect_authorization_header(Some(&value)),
            GateDecision::Reject(StatusCode::UNAUTHORIZED, BEARER_REQUIRED_MESSAGE)
        );
    }
}
