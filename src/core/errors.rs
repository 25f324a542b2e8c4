//! # Application Error Handling System
//!
//! 계정 서비스 전역에서 사용하는 에러 타입을 정의합니다.
//! `thiserror`로 `Error` trait을 구현하고, `actix_web::ResponseError`를 구현하여
//! 핸들러가 `Result<HttpResponse, AppError>`를 반환하기만 하면
//! 일관된 JSON 에러 응답으로 변환됩니다.
//!
//! ## HTTP 응답 매핑
//!
//! | AppError | HTTP Status | 응답 본문 |
//! |----------|-------------|-----------|
//! | `InvalidFields` | 400 Bad Request | `{"errors": [{"field", "message"}]}` |
//! | `ValidationError` | 400 Bad Request | `{"message"}` |
//! | `DuplicateUsername` | 400 Bad Request | `{"message"}` |
//! | `AuthenticationError` | 401 Unauthorized | `{"message"}` |
//! | `AuthorizationError` | 403 Forbidden | `{"message"}` |
//! | `NotFound` | 404 Not Found | `{"message"}` |
//! | `DatabaseError` / `ConfigurationError` / `InternalError` | 500 | `{"message"}` |
//!
//! 토큰 해석 실패는 [`TokenError`]로 따로 분류합니다. 인가 게이트가 이 값을 보고
//! "토큰 문제"와 "계정 없음"을 구분할 수 있어야 하기 때문입니다.

use actix_web::http::StatusCode;
use serde::Serialize;
use thiserror::Error;

/// 중복 사용자명 응답 메시지
///
/// 어떤 제약 조건이 충돌했는지는 노출하지 않습니다.
pub const DUPLICATE_USERNAME_MESSAGE: &str =
    "Esse nome de usuário já está em uso. Por favor, escolha outro.";

/// 필드 단위 검증 실패 정보
///
/// `{"field": "password", "message": "..."}` 형태로 직렬화됩니다.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct FieldViolation {
    pub field: String,
    pub message: String,
}

impl FieldViolation {
    pub fn new(field: impl Into<String>, message: impl Into<String>) -> Self {
        Self {
            field: field.into(),
            message: message.into(),
        }
    }
}

/// 애플리케이션 전역 에러 타입
///
/// 모든 변형은 요청 단위로만 의미가 있으며 공유 상태를 오염시키지 않습니다.
/// 프로세스를 중단시키는 유일한 경우는 시작 시점의 `ConfigurationError`입니다.
#[derive(Error, Debug)]
pub enum AppError {
    /// 데이터베이스 연산 실패 (500)
    #[error("Database error: {0}")]
    DatabaseError(String),

    /// DTO 필드 검증 실패 (400)
    ///
    /// 필드/메시지 목록을 그대로 응답 본문에 담습니다.
    #[error("Validation failed on {} field(s)", .0.len())]
    InvalidFields(Vec<FieldViolation>),

    /// 형식 오류 등 단일 메시지 검증 실패 (400)
    #[error("{0}")]
    ValidationError(String),

    /// 사용자명 유니크 제약 위반 (400)
    #[error("{}", DUPLICATE_USERNAME_MESSAGE)]
    DuplicateUsername,

    /// 리소스 없음 (404)
    #[error("{0}")]
    NotFound(String),

    /// 인증 실패 (401)
    #[error("{0}")]
    AuthenticationError(String),

    /// 권한 부족 또는 토큰 거부 (403)
    #[error("{0}")]
    AuthorizationError(String),

    /// 필수 설정 누락 (500, 시작 시점에는 치명적)
    #[error("Configuration error: {0}")]
    ConfigurationError(String),

    /// 예상하지 못한 내부 오류 (500)
    #[error("Internal server error: {0}")]
    InternalError(String),
}

impl actix_web::ResponseError for AppError {
    fn status_code(&self) -> StatusCode {
        match self {
            AppError::InvalidFields(_)
            | AppError::ValidationError(_)
            | AppError::DuplicateUsername => StatusCode::BAD_REQUEST,
            AppError::NotFound(_) => StatusCode::NOT_FOUND,
            AppError::AuthenticationError(_) => StatusCode::UNAUTHORIZED,
            AppError::AuthorizationError(_) => StatusCode::FORBIDDEN,
            AppError::DatabaseError(_)
            | AppError::ConfigurationError(_)
            | AppError::InternalError(_) => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }

    /// HTTP 에러 응답을 생성합니다.
    ///
    /// 5xx 에러는 서버 로그에만 상세 내용을 남기고,
    /// 클라이언트에는 일반화된 메시지를 돌려줍니다.
    fn error_response(&self) -> actix_web::HttpResponse {
        let status = self.status_code();
        let body = match self {
            AppError::InvalidFields(violations) => serde_json::json!({ "errors": violations }),
            _ if status.is_server_error() => {
                log::error!("요청 처리 중 서버 오류: {}", self);
                serde_json::json!({ "message": "Erro interno do servidor." })
            }
            _ => serde_json::json!({ "message": self.to_string() }),
        };

        actix_web::HttpResponse::build(status).json(body)
    }
}

/// 토큰 해석 실패 종류
///
/// 인가 게이트는 `Lookup`을 제외한 모든 변형을 403으로 응답합니다.
/// `Lookup`은 토큰이 아니라 저장소 문제이므로 500으로 응답합니다.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum TokenError {
    /// 설정된 키로 서명이 검증되지 않음
    #[error("A assinatura do token é inválida.")]
    SignatureInvalid,

    /// `iss` 클레임이 없거나 기대값과 다름
    #[error("O emissor do token não é reconhecido.")]
    IssuerMismatch,

    /// `exp`가 현재 시각보다 과거
    #[error("O token expirou.")]
    TokenExpired,

    /// 토큰의 subject에 해당하는 계정이 없음 (발급 후 삭제된 경우 등)
    #[error("Usuário não foi encontrado.")]
    SubjectNotFound,

    /// 구조가 깨졌거나 필수 클레임이 빠진 토큰
    #[error("Token malformado: {0}")]
    Malformed(String),

    /// 계정 디렉터리 조회 자체가 실패
    ///
    /// 원인 문자열은 로그에만 남기며 응답에는 포함하지 않습니다.
    #[error("Não foi possível consultar o usuário do token.")]
    Lookup(String),
}

/// 편의성을 위한 Result 타입 별칭
pub type AppResult<T> = Result<T, AppError>;

/// 외부 라이브러리 에러를 AppError로 변환하는 확장 trait
pub trait ErrorContext<T> {
    /// 컨텍스트 정보와 함께 에러를 변환합니다.
    fn context(self, msg: &str) -> AppResult<T>;
}

impl<T, E> ErrorContext<T> for Result<T, E>
where
    E: std::fmt::Display,
{
    fn context(self, msg: &str) -> AppResult<T> {
        self.map_err(|e| AppError::InternalError(format!("{}: {}", msg, e)))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use actix_web::body::to_bytes;
    use actix_web::ResponseError;

    async fn body_json(error: AppError) -> serde_json::Value {
        let response = error.error_response();
        let bytes = to_bytes(response.into_body()).await.unwrap();
        serde_json::from_slice(&bytes).unwrap()
    }

    #[test]
    fn test_status_code_mapping() {
        assert_eq!(
            AppError::InvalidFields(vec![]).status_code(),
            StatusCode::BAD_REQUEST
        );
        assert_eq!(AppError::DuplicateUsername.status_code(), StatusCode::BAD_REQUEST);
        assert_eq!(
            AppError::NotFound("x".to_string()).status_code(),
            StatusCode::NOT_FOUND
        );
        assert_eq!(
            AppError::AuthenticationError("x".to_string()).status_code(),
            StatusCode::UNAUTHORIZED
        );
        assert_eq!(
            AppError::AuthorizationError("x".to_string()).status_code(),
            StatusCode::FORBIDDEN
        );
        assert_eq!(
            AppError::DatabaseError("x".to_string()).status_code(),
            StatusCode::INTERNAL_SERVER_ERROR
        );
    }

    #[actix_web::test]
    async fn test_invalid_fields_body_lists_violations() {
        let body = body_json(AppError::InvalidFields(vec![FieldViolation::new(
            "password",
            "A senha não pode ser nula.",
        )]))
        .await;

        assert_eq!(body["errors"][0]["field"], "password");
        assert_eq!(body["errors"][0]["message"], "A senha não pode ser nula.");
    }

    #[actix_web::test]
    async fn test_duplicate_username_body_is_generic() {
        let body = body_json(AppError::DuplicateUsername).await;
        assert_eq!(body["message"], DUPLICATE_USERNAME_MESSAGE);
    }

    #[actix_web::test]
    async fn test_server_errors_hide_details() {
        let body = body_json(AppError::DatabaseError("connection refused".to_string())).await;
        let message = body["message"].as_str().unwrap();
        assert!(!message.contains("connection refused"));
    }

    #[test]
    fn test_token_errors_are_distinguishable() {
        assert_ne!(TokenError::TokenExpired, TokenError::SubjectNotFound);
        assert_eq!(TokenError::SubjectNotFound.to_string(), "Usuário não foi encontrado.");
    }

    #[test]
    fn test_error_context_trait() {
        let result: Result<(), &str> = Err("original error");
        let app_result = result.context("Additional context");

        if let Err(AppError::InternalError(msg)) = app_result {
            assert!(msg.contains("Additional context"));
            assert!(msg.contains("original error"));
        } else {
            panic!("Expected InternalError");
        }
    }
}
