//! # 문자열 유틸리티
//!
//! 문자열 처리와 관련된 공통 유틸리티 함수들입니다.

/// 문자열이 유효한지 확인 (빈 문자열이 아니고 공백만으로 구성되지 않음)
///
/// # 예제
/// ```rust,ignore
/// use crate::utils::string_utils::is_valid_string;
///
/// assert_eq!(is_valid_string("Hello"), true);
/// assert_eq!(is_valid_string("   "), false);
/// assert_eq!(is_valid_string(""), false);
/// ```
pub fn is_valid_string(value: &str) -> bool {
    !value.trim().is_empty()
}

/// snake_case 필드명을 camelCase로 변환
///
/// 검증 에러의 필드명을 JSON 본문의 키와 맞추는 데 사용합니다.
///
/// # 예제
/// ```rust,ignore
/// assert_eq!(to_camel_case("birth_date"), "birthDate");
/// assert_eq!(to_camel_case("name"), "name");
/// ```
pub fn to_camel_case(value: &str) -> String {
    let mut result = String::with_capacity(value.len());
    let mut upper_next = false;

    for c in value.chars() {
        if c == '_' {
            upper_next = !result.is_empty();
            continue;
        }

        if upper_next {
            result.extend(c.to_uppercase());
            upper_next = false;
        } else {
            result.push(c);
        }
    }

    result
}
