//! Authentication HTTP Handlers
//!
//! 사용자명/비밀번호 로그인 엔드포인트입니다.
//!
//! - **로컬 인증**: `POST /login` → `{"token": "..."}`
use actix_web::{post, web, HttpResponse};

use crate::core::errors::AppError;
use crate::domain::dto::users::LoginRequest;
use crate::services::auth::AuthService;

/// 로그인
///
/// 실패 원인(사용자명 없음, 비밀번호 불일치)과 관계없이 같은 401 응답을 돌려줍니다.
#[post("/login")]
pub async fn login(
    auth_service: web::Data<AuthService>,
    payload: web::Json<LoginRequest>,
) -> Result<HttpResponse, AppError> {
    log::info!("로그인 요청 수신: {}", payload.username);

    let token = auth_service.login(&payload).await?;

    Ok(HttpResponse::Ok().json(token))
}
