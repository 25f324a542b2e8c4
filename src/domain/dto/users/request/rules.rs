//! # 공통 검증 규칙
//!
//! 가입/수정 요청 DTO가 `#[validate(custom(...))]`로 참조하는 함수와
//! `ValidationErrors`를 응답용 [`FieldViolation`] 목록으로 바꾸는 변환기입니다.

use chrono::{NaiveDate, Utc};
use validator::{Validate, ValidationError, ValidationErrors};

use crate::core::errors::{AppError, FieldViolation};
use crate::utils::string_utils::{is_valid_string, to_camel_case};

pub const NAME_BLANK_MESSAGE: &str = "O nome não deve ser nulo e nem conter espaços em branco.";
pub const USERNAME_BLANK_MESSAGE: &str =
    "O nome de usuário não pode ser nulo e também não pode conter espaços em branco.";
pub const USERNAME_LENGTH_MESSAGE: &str = "O nome de usuário deve ter no máximo 50 caracteres.";
pub const PASSWORD_BLANK_MESSAGE: &str = "A senha não pode ser nula.";
pub const PASSWORD_LENGTH_MESSAGE: &str = "A senha deve conter no mínimo 8 caracteres.";
pub const PASSWORD_PATTERN_MESSAGE: &str = "A senha deve conter pelo menos 8 caracteres, dentre eles uma letra maiúscula, uma letra minúscula, um número e um caractere especial.";
pub const BIRTH_DATE_REQUIRED_MESSAGE: &str = "A data de nascimento é obrigatória.";
pub const BIRTH_DATE_PAST_MESSAGE: &str = "A data de nascimento deve ser válida.";

/// 비밀번호에 허용되는 특수문자 집합
const PASSWORD_SPECIAL_CHARS: &str = "#?!@$%^&*-";

fn require_text(value: &str, code: &'static str, message: &'static str) -> Result<(), ValidationError> {
    if is_valid_string(value) {
        Ok(())
    } else {
        Err(ValidationError::new(code).with_message(message.into()))
    }
}

pub fn validate_name(name: &str) -> Result<(), ValidationError> {
    require_text(name, "blank_name", NAME_BLANK_MESSAGE)
}

pub fn validate_username(username: &str) -> Result<(), ValidationError> {
    require_text(username, "blank_username", USERNAME_BLANK_MESSAGE)
}

/// 비밀번호 강도 확인
///
/// 8자 이상이면서 대문자, 소문자, 숫자, 특수문자(`#?!@$%^&*-`)를 각각 하나 이상 포함해야 합니다.
pub fn is_strong_password(password: &str) -> bool {
    let has_upper = password.chars().any(|c| c.is_ascii_uppercase());
    let has_lower = password.chars().any(|c| c.is_ascii_lowercase());
    let has_digit = password.chars().any(|c| c.is_ascii_digit());
    let has_special = password.chars().any(|c| PASSWORD_SPECIAL_CHARS.contains(c));

    has_upper && has_lower && has_digit && has_special && password.chars().count() >= 8
}

pub fn validate_password_present(password: &str) -> Result<(), ValidationError> {
    require_text(password, "blank_password", PASSWORD_BLANK_MESSAGE)
}

pub fn validate_password_pattern(password: &str) -> Result<(), ValidationError> {
    if is_strong_password(password) {
        Ok(())
    } else {
        Err(ValidationError::new("weak_password").with_message(PASSWORD_PATTERN_MESSAGE.into()))
    }
}

/// 생년월일은 오늘(UTC)보다 과거여야 합니다.
pub fn validate_past_date(birth_date: &NaiveDate) -> Result<(), ValidationError> {
    validate_past_date_on(birth_date, Utc::now().date_naive())
}

pub(crate) fn validate_past_date_on(birth_date: &NaiveDate, today: NaiveDate) -> Result<(), ValidationError> {
    if *birth_date < today {
        Ok(())
    } else {
        Err(ValidationError::new("birth_date_not_past").with_message(BIRTH_DATE_PAST_MESSAGE.into()))
    }
}

/// `ValidationErrors`를 필드명(camelCase) 기준으로 정렬된 위반 목록으로 변환
pub fn field_violations(errors: &ValidationErrors) -> Vec<FieldViolation> {
    errors
        .field_errors()
        .iter()
        .flat_map(|(field, field_errors)| {
            let field = to_camel_case(field);
            field_errors.iter().map(move |error| {
                let message = error
                    .message
                    .as_ref()
                    .map(|m| m.to_string())
                    .unwrap_or_else(|| error.code.to_string());
                FieldViolation::new(field.clone(), message)
            })
        })
        .collect()
}

/// DTO를 검증하고 위반 사항을 (필드, 메시지) 순으로 정렬해 `AppError::InvalidFields`로 반환
///
/// 한 필드가 여러 규칙을 어기면 위반마다 항목이 하나씩 생깁니다.
pub fn check_fields<T: Validate>(request: &T) -> Result<(), AppError> {
    let Err(errors) = request.validate() else {
        return Ok(());
    };

    let mut violations = field_violations(&errors);
    violations.sort_by(|a, b| a.field.cmp(&b.field).then_with(|| a.message.cmp(&b.message)));
    Err(AppError::InvalidFields(violations))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_password_strength_accepts_strong_password() {
        assert!(is_strong_password("Matheus123!"));
        assert!(is_strong_password("Ab1-efgh"));
    }

    #[test]
    fn test_password_strength_rejects_missing_classes() {
        assert!(!is_strong_password("matheus123!"));
        assert!(!is_strong_password("MATHEUS123!"));
        assert!(!is_strong_password("Matheus!!!"));
        assert!(!is_strong_password("Matheus123"));
        assert!(!is_strong_password("Ab1!"));
    }

    #[test]
    fn test_password_rule_functions() {
        assert!(validate_password_present("Matheus123!").is_ok());
        assert!(validate_password_present("   ").is_err());
        assert!(validate_password_pattern("Matheus123!").is_ok());

        let error = validate_password_pattern("matheus123").unwrap_err();
        assert_eq!(error.message.as_deref(), Some(PASSWORD_PATTERN_MESSAGE));
    }

    #[test]
    fn test_blank_text_rules() {
        assert!(validate_name("Matheus").is_ok());
        assert!(validate_name("   ").is_err());
        assert!(validate_username("").is_err());
    }

    #[test]
    fn test_birth_date_must_be_in_the_past() {
        let today = NaiveDate::from_ymd_opt(2025, 6, 1).unwrap();

        let error = validate_past_date_on(&today, today).unwrap_err();
        assert_eq!(error.message.as_deref(), Some(BIRTH_DATE_PAST_MESSAGE));
        assert!(validate_past_date_on(&NaiveDate::from_ymd_opt(2099, 1, 1).unwrap(), today).is_err());
        assert!(validate_past_date_on(&NaiveDate::from_ymd_opt(2003, 11, 14).unwrap(), today).is_ok());
    }

    #[derive(Validate)]
    struct SignupForm {
        #[validate(custom(function = "validate_password_present"))]
        #[validate(custom(function = "validate_password_pattern"))]
        password: String,
        #[validate(custom(function = "validate_name"))]
        name: String,
    }

    #[test]
    fn test_check_fields_sorts_by_field_then_message() {
        let form = SignupForm {
            password: " ".to_string(),
            name: " ".to_string(),
        };

        match check_fields(&form) {
            Err(AppError::InvalidFields(violations)) => {
                assert_eq!(
                    violations,
                    vec![
                        FieldViolation::new("name", NAME_BLANK_MESSAGE),
                        FieldViolation::new("password", PASSWORD_PATTERN_MESSAGE),
                        FieldViolation::new("password", PASSWORD_BLANK_MESSAGE),
                    ]
                );
            }
            other => panic!("Expected InvalidFields, got {:?}", other),
        }
    }

    #[test]
    fn test_check_fields_ok_when_valid() {
        let form = SignupForm {
            password: "Matheus123!".to_string(),
            name: "Matheus".to_string(),
        };
        assert!(check_fields(&form).is_ok());
    }
}
