//! 인가 게이트 미들웨어
//!
//! 모든 요청이 같은 파이프라인을 지나며, Bearer 토큰이 있으면 계정 신원으로 해석해
//! request extension에 넣습니다. 헤더가 없는 요청은 그대로 통과시키고,
//! 보호된 핸들러가 [`AuthenticatedIdentity`](crate::domain::models::auth::AuthenticatedIdentity)
//! 추출 단계에서 거부합니다.
//!
//! | 요청 | 결과 |
//! |------|------|
//! | Authorization 헤더 없음 / 공백 | 인증 없이 통과 |
//! | `Bearer `로 시작하지 않음 | 401 `Token must starts with Bearer` |
//! | `Bearer ` 뒤가 비어 있음 | 401 `Token não pode estar vazio.` |
//! | 토큰 해석 실패 (서명, 발급자, 만료, 계정 없음) | 403 원인 메시지 |
//! | 계정 조회 자체가 실패 | 500 (원인은 로그에만) |
//! | 토큰 해석 성공 | 신원을 넣고 다음 서비스로 전달 |

use std::future::{ready, Ready};
use std::rc::Rc;
use std::sync::Arc;

use actix_web::{
    dev::{Service, ServiceRequest, ServiceResponse, Transform},
    Error, Result,
    body::EitherBody,
};
use crate::middlewares::auth_inner::AuthMiddlewareService;
use crate::services::auth::TokenService;

/// 인가 게이트 Transform
///
/// ```rust,ignore
/// App::new()
///     .wrap(AuthMiddleware::new(token_service.clone()))
///     .configure(routes::configure_all_routes)
/// ```
#[derive(Clone)]
pub struct AuthMiddleware {
    token_service: Arc<TokenService>,
}

impl AuthMiddleware {
    pub fn new(token_service: Arc<TokenService>) -> Self {
        Self { token_service }
    }
}

impl<S, B> Transform<S, ServiceRequest> for AuthMiddleware
where
    S: Service<ServiceRequest, Response = ServiceResponse<B>, Error = Error> + 'static,
    S::Future: 'static,
    B: 'static,
{
    type Response = ServiceResponse<EitherBody<B>>;
    type Error = Error;
    type Transform = AuthMiddlewareService<S>;
    type InitError = ();
    type Future = Ready<Result<Self::Transform, Self::InitError>>;

    fn new_transform(&self, service: S) -> Self::Future {
        ready(Ok(AuthMiddlewareService {
            service: Rc::new(service),
            token_service: self.token_service.clone(),
        }))
    }
}
