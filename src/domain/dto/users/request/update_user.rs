//! # 사용자 정보 수정 요청 DTO
//!
//! 로그인한 사용자가 자신의 이름과 비밀번호를 바꿀 때 사용합니다.
//! 사용자명과 생년월일은 수정 대상이 아닙니다.

use serde::{Deserialize, Serialize};
use validator::Validate;

use crate::core::errors::AppError;
use super::rules;

/// 사용자 정보 수정 요청 DTO
///
/// ```json
/// { "name": "Matheus S. Silva", "password": "NovaSenha123!" }
/// ```
#[derive(Clone, Default, Serialize, Deserialize, Validate)]
#[serde(default)]
pub struct UpdateUserRequest {
    #[validate(custom(function = "rules::validate_name"))]
    pub name: String,

    /// 새 비밀번호 (항상 다시 해싱됨)
    #[validate(custom(function = "rules::validate_password_present"))]
    #[validate(custom(function = "rules::validate_password_pattern"))]
    pub password: String,
}

impl UpdateUserRequest {
    /// # Errors
    ///
    /// * `AppError::InvalidFields` - 이름이 비었거나 비밀번호 규칙을 위반한 경우
    pub fn check(&self) -> Result<(), AppError> {
        rules::check_fields(self)
    }
}

impl std::fmt::Debug for UpdateUserRequest {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("UpdateUserRequest")
            .field("name", &self.name)
            .field("password", &"[hidden]")
            .finish()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::errors::FieldViolation;

    #[test]
    fn test_valid_update_passes() {
        let request = UpdateUserRequest {
            name: "Matheus S. Silva".to_string(),
            password: "NovaSenha123!".to_string(),
        };
        assert!(request.check().is_ok());
    }

    #[test]
    fn test_blank_update_reports_both_fields() {
        let request: UpdateUserRequest = serde_json::from_str(r#"{"name":"  "}"#).unwrap();

        match request.check() {
            Err(AppError::InvalidFields(violations)) => {
                assert_eq!(violations[0], FieldViolation::new("name", rules::NAME_BLANK_MESSAGE));
                assert!(violations.contains(&FieldViolation::new("password", rules::PASSWORD_BLANK_MESSAGE)));
                assert!(violations.contains(&FieldViolation::new("password", rules::PASSWORD_PATTERN_MESSAGE)));
            }
            other => panic!("Expected InvalidFields, got {:?}", other),
        }
    }
}
