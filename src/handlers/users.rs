//! # User Management HTTP Handlers
//!
//! 사용자 관리와 관련된 HTTP 엔드포인트를 처리하는 핸들러 함수들입니다.
//!
//! | 메서드 | 경로 | 인증 | 설명 | 상태 코드 |
//! |--------|------|------|------|-----------|
//! | `POST` | `/user` | 불필요 | 새 사용자 생성 | 201 Created |
//! | `DELETE` | `/user/{id}` | 필요 | 사용자 삭제 | 200 / 404 |
//! | `GET` | `/user/info` | 필요 | 내 정보 조회 | 200 OK |
//! | `PUT` | `/user/update` | 필요 | 내 이름/비밀번호 수정 | 200 OK |

use actix_web::{delete, get, http::header, post, put, web, HttpRequest, HttpResponse};

use crate::core::errors::AppError;
use crate::domain::dto::tokens::MessageResponse;
use crate::domain::dto::users::{CreateUserRequest, UpdateUserRequest};
use crate::domain::models::auth::AuthenticatedIdentity;
use crate::services::users::UserService;

pub const DELETED_MESSAGE: &str = "Usuário excluido com sucesso.";
pub const NOT_FOUND_FOR_DELETE_MESSAGE: &str = "Usuário não foi encontrado para exclusão.";

/// 사용자 생성
///
/// 성공 시 `Location` 헤더에 새 리소스 주소를 담아 201을 반환합니다.
#[post("/user")]
pub async fn create_user(
    req: HttpRequest,
    user_service: web::Data<UserService>,
    payload: web::Json<CreateUserRequest>,
) -> Result<HttpResponse, AppError> {
    log::info!("사용자 생성 요청 수신");

    let created = user_service.create_user(payload.into_inner()).await?;

    let connection = req.connection_info();
    let location = format!("{}://{}/user/{}", connection.scheme(), connection.host(), created.id);

    Ok(HttpResponse::Created()
        .insert_header((header::LOCATION, location))
        .json(created))
}

/// ID로 사용자 삭제
#[delete("/user/{id}")]
pub async fn delete_user(
    _identity: AuthenticatedIdentity,
    user_service: web::Data<UserService>,
    path: web::Path<String>,
) -> Result<HttpResponse, AppError> {
    let id = path.into_inner();
    log::info!("사용자 삭제 요청 수신: id={}", id);

    if user_service.delete_user(&id).await? {
        Ok(HttpResponse::Ok().json(MessageResponse::new(DELETED_MESSAGE)))
    } else {
        Ok(HttpResponse::NotFound().json(MessageResponse::new(NOT_FOUND_FOR_DELETE_MESSAGE)))
    }
}

/// 로그인한 사용자 정보 조회
#[get("/user/info")]
pub async fn get_user_info(
    identity: AuthenticatedIdentity,
    user_service: web::Data<UserService>,
) -> Result<HttpResponse, AppError> {
    let info = user_service.get_user_info(identity.username()).await?;
    Ok(HttpResponse::Ok().json(info))
}

/// 로그인한 사용자의 이름과 비밀번호 수정
#[put("/user/update")]
pub async fn update_user(
    identity: AuthenticatedIdentity,
    user_service: web::Data<UserService>,
    payload: web::Json<UpdateUserRequest>,
) -> Result<HttpResponse, AppError> {
    log::info!("사용자 정보 수정 요청 수신: {}", identity.username());

    let updated = user_service
        .update_user(identity.username(), payload.into_inner())
        .await?;

    Ok(HttpResponse::Ok().json(updated))
}
