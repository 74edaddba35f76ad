//! # 입력 검증 규칙
//!
//! 요청 DTO의 `#[validate(custom(...))]`에서 사용하는 검증 규칙입니다.
//! 각 규칙은 `validator::ValidationError`를 반환하며, 메시지는 그대로
//! 에러 응답의 필드 맵에 담깁니다.
//!
//! - [`validate_phone`] - 국제 전화번호 형식 (`+55 11 99999-9999`)
//! - [`validate_enum`] - 열거형 라벨 멤버십 (대소문자 구분)

use once_cell::sync::Lazy;
use regex::Regex;
use strum::VariantNames;
use validator::ValidationError;

use crate::utils::string_utils::is_valid_string;

pub const PHONE_REQUIRED_MESSAGE: &str = "phone cannot be null or empty";
pub const PHONE_FORMAT_MESSAGE: &str = "invalid format, use: +55 11 99999-9999";
pub const PHONE_LENGTH_MESSAGE: &str = "invalid length for phone";

pub const PHONE_MIN_LENGTH: usize = 16;
pub const PHONE_MAX_LENGTH: usize = 20;

/// 국가 코드(1-3자리), 지역 코드(2자리), 번호(4-5자리)-(4자리)
static PHONE_PATTERN: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"^\+?[0-9]{1,3} [0-9]{2} [0-9]{4,5}-[0-9]{4}$")
        .expect("phone pattern is a valid regex")
});

/// 전화번호 형식을 검증합니다.
///
/// 다음 순서로 검사하며 처음 실패한 규칙의 메시지만 보고합니다.
///
/// 1. null 또는 공백 → [`PHONE_REQUIRED_MESSAGE`]
/// 2. 패턴 불일치 → [`PHONE_FORMAT_MESSAGE`]
/// 3. 길이가 16-20자 범위 밖 → [`PHONE_LENGTH_MESSAGE`]
///
/// # 예제
///
/// ```rust,ignore
/// assert!(validate_phone(Some("+55 11 99999-9999")).is_ok());
/// assert!(validate_phone(Some("11999999999")).is_err());
/// assert!(validate_phone(None).is_err());
/// ```
pub fn validate_phone(phone: Option<&str>) -> Result<(), ValidationError> {
    let phone = match phone {
        Some(value) if is_valid_string(value) => value,
        _ => return Err(violation("phone_required", PHONE_REQUIRED_MESSAGE)),
    };

    if !PHONE_PATTERN.is_match(phone) {
        return Err(violation("phone_format", PHONE_FORMAT_MESSAGE));
    }

    let length = phone.chars().count();
    if !(PHONE_MIN_LENGTH..=PHONE_MAX_LENGTH).contains(&length) {
        return Err(violation("phone_length", PHONE_LENGTH_MESSAGE));
    }

    Ok(())
}

/// 입력 문자열이 열거형 `E`의 선언된 라벨 중 하나인지 검증합니다.
///
/// 비교는 대소문자를 구분하며 null 역시 실패로 처리합니다.
/// 실패 시 호출자가 지정한 `message`를 사용하고, 허용 값 목록은
/// `accepted` 파라미터로 첨부합니다.
pub fn validate_enum<E>(value: Option<&str>, message: &'static str) -> Result<(), ValidationError>
where
    E: VariantNames,
{
    match value {
        Some(label) if E::VARIANTS.contains(&label) => Ok(()),
        _ => {
            let mut error = violation("invalid_enum", message);
            error.add_param("accepted".into(), &E::VARIANTS);
            Err(error)
        }
    }
}

fn violation(code: &'static str, message: &'static str) -> ValidationError {
    ValidationError::new(code).with_message(message.into())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::entities::users::UserType;

    const USER_TYPE_MESSAGE: &str = "invalid user type.";

    fn message_of(error: ValidationError) -> String {
        error.message.map(|m| m.to_string()).unwrap_or_default()
    }

    #[test]
    fn test_valid_phone() {
        assert!(validate_phone(Some("+55 11 99999-9999")).is_ok());
        assert!(validate_phone(Some("+1 21 34567-8901")).is_ok());
        assert!(validate_phone(Some("+351 21 98765-4321")).is_ok());
    }

    #[test]
    fn test_null_phone() {
        let error = validate_phone(None).unwrap_err();
        assert_eq!(message_of(error), PHONE_REQUIRED_MESSAGE);
    }

    #[test]
    fn test_blank_phone() {
        assert_eq!(message_of(validate_phone(Some("")).unwrap_err()), PHONE_REQUIRED_MESSAGE);
        assert_eq!(message_of(validate_phone(Some("   ")).unwrap_err()), PHONE_REQUIRED_MESSAGE);
    }

    #[test]
    fn test_invalid_phone_format() {
        for phone in ["11999999999", "+5511999999999", "+55 11 999999-9999", "+55 1 99999-9999"] {
            let error = validate_phone(Some(phone)).unwrap_err();
            assert_eq!(message_of(error), PHONE_FORMAT_MESSAGE, "phone: {phone}");
        }
    }

    #[test]
    fn test_phone_length_boundaries() {
        // 16자: 허용되는 최소 길이
        assert!(validate_phone(Some("55 11 99999-9999")).is_ok());
        // 15자: 형식은 맞지만 길이 미달
        let error = validate_phone(Some("+1 21 3456-7890")).unwrap_err();
        assert_eq!(message_of(error), PHONE_LENGTH_MESSAGE);
        // 패턴이 허용하는 최장 형태 (18자)
        assert!(validate_phone(Some("+351 21 98765-4321")).is_ok());
    }

    #[test]
    fn test_phone_too_short_without_plus_sign() {
        // 형식은 맞지만 15자
        let error = validate_phone(Some("55 11 9999-9999")).unwrap_err();
        assert_eq!(message_of(error), PHONE_LENGTH_MESSAGE);
    }

    #[test]
    fn test_valid_enum() {
        assert!(validate_enum::<UserType>(Some("ADMIN"), USER_TYPE_MESSAGE).is_ok());
        assert!(validate_enum::<UserType>(Some("EDITOR"), USER_TYPE_MESSAGE).is_ok());
        assert!(validate_enum::<UserType>(Some("VIEWER"), USER_TYPE_MESSAGE).is_ok());
    }

    #[test]
    fn test_invalid_enum() {
        let error = validate_enum::<UserType>(Some("INVALIDO"), USER_TYPE_MESSAGE).unwrap_err();
        assert_eq!(message_of(error), USER_TYPE_MESSAGE);
    }

    #[test]
    fn test_enum_is_case_sensitive() {
        assert!(validate_enum::<UserType>(Some("admin"), USER_TYPE_MESSAGE).is_err());
    }

    #[test]
    fn test_null_enum() {
        let error = validate_enum::<UserType>(None, USER_TYPE_MESSAGE).unwrap_err();
        assert_eq!(error.params.get("accepted"), Some(&serde_json::json!(["ADMIN", "EDITOR", "VIEWER"])));
        assert_eq!(message_of(error), USER_TYPE_MESSAGE);
    }
}
