//! # 사용자 생성 요청 DTO
//!
//! 새로운 사용자 계정 생성을 위한 HTTP 요청 데이터 구조를 정의합니다.
//!
//! ## 검증 규칙
//!
//! ### 이름 (`name`)
//! - 비어 있거나 공백만으로 구성될 수 없음
//!
//! ### 사용자명 (`username`)
//! - 비어 있거나 공백만으로 구성될 수 없음
//! - 최대 50자
//! - 대소문자를 구분하며 유일성은 저장소 계층에서 보장
//!
//! ### 비밀번호 (`password`)
//! - 최소 길이: 8자
//! - 필수 포함: 대문자, 소문자, 숫자, 특수문자(`#?!@$%^&*-`)
//!
//! ### 생년월일 (`birthDate`)
//! - 필수, `YYYY-MM-DD` 형식
//! - 오늘보다 과거 날짜

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use validator::Validate;

use crate::core::errors::AppError;
use super::rules;

/// 새로운 사용자 계정 생성을 위한 요청 DTO
///
/// # JSON 예제
///
/// ```json
/// {
///   "name": "Matheus Silva",
///   "username": "MatheusSS09",
///   "password": "Matheus123!",
///   "birthDate": "2003-11-14"
/// }
/// ```
#[derive(Clone, Default, Serialize, Deserialize, Validate)]
#[serde(default, rename_all = "camelCase")]
pub struct CreateUserRequest {
    /// 표시 이름
    #[validate(custom(function = "rules::validate_name"))]
    pub name: String,

    /// 로그인 ID (생성 후 변경 불가)
    #[validate(
        custom(function = "rules::validate_username"),
        length(max = 50, message = "O nome de usuário deve ter no máximo 50 caracteres.")
    )]
    pub username: String,

    /// 평문 비밀번호 (해싱 후 저장되며 평문은 유지하지 않음)
    #[validate(length(min = 8, message = "A senha deve conter no mínimo 8 caracteres."))]
    #[validate(custom(function = "rules::validate_password_present"))]
    #[validate(custom(function = "rules::validate_password_pattern"))]
    pub password: String,

    /// 생년월일
    #[validate(required(message = "A data de nascimento é obrigatória."))]
    #[validate(custom(function = "rules::validate_past_date"))]
    pub birth_date: Option<NaiveDate>,
}

impl CreateUserRequest {
    /// 필드 검증을 모두 수행하고 위반 사항을 한 번에 반환합니다.
    ///
    /// # Errors
    ///
    /// * `AppError::InvalidFields` - 하나 이상의 필드가 규칙을 위반한 경우
    pub fn check(&self) -> Result<(), AppError> {
        rules::check_fields(self)
    }
}

impl std::fmt::Debug for CreateUserRequest {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("CreateUserRequest")
            .field("name", &self.name)
            .field("username", &self.username)
            .field("password", &"[hidden]")
            .field("birth_date", &self.birth_date)
            .finish()
    }
}
