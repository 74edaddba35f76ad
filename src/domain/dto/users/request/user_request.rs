//! # 사용자 생성/수정 요청 DTO
//!
//! 사용자 생성(`POST /api/users`)과 수정(`PUT /api/users/{id}`)에서 공통으로
//! 사용하는 요청 본문입니다. Spring Boot의 `@Valid @RequestBody` 패턴을
//! `validator` derive로 구현합니다.
//!
//! ## 검증 규칙
//!
//! | 필드 | 규칙 | 메시지 |
//! |------|------|--------|
//! | `fullName` | 필수, 공백 불가 | `full name is required` |
//! | `email` | 필수, 공백 불가 | `email is required` |
//! | `email` | 이메일 형식 | `invalid email format. e.g. example@domain.com` |
//! | `phone` | 필수 + 전화번호 규칙 | [`crate::utils::validators::validate_phone`] |
//! | `birthDate` | 필수 | `birth date is required` |
//! | `userType` | 필수 + 열거형 규칙 | `invalid user type. use one of (ADMIN, EDITOR, VIEWER)` |
//!
//! 모든 필드는 역직렬화 단계에서는 `Option`으로 받습니다. 누락되거나 `null`인
//! 값이 JSON 파싱 에러가 아니라 필드 검증 에러로 보고되도록 하기 위함입니다.
//! 한 필드에는 최대 하나의 메시지만 기록됩니다.
//!
//! ## JSON 예제
//!
//! ```json
//! {
//!   "fullName": "Ana Souza",
//!   "email": "ana@example.com",
//!   "phone": "+55 11 99999-9999",
//!   "birthDate": "1990-05-17",
//!   "userType": "ADMIN"
//! }
//! ```

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use validator::{Validate, ValidateEmail, ValidationError};

use crate::domain::entities::users::UserType;
use crate::utils::string_utils::is_valid_string;
use crate::utils::validators::{validate_enum, validate_phone};

pub const FULL_NAME_REQUIRED_MESSAGE: &str = "full name is required";
pub const EMAIL_REQUIRED_MESSAGE: &str = "email is required";
pub const EMAIL_FORMAT_MESSAGE: &str = "invalid email format. e.g. example@domain.com";
pub const BIRTH_DATE_REQUIRED_MESSAGE: &str = "birth date is required";
pub const USER_TYPE_MESSAGE: &str = "invalid user type. use one of (ADMIN, EDITOR, VIEWER)";

/// 사용자 생성/수정 요청 본문
///
/// ID는 포함하지 않습니다. 수정 대상 ID는 경로 파라미터로 전달됩니다.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize, Validate)]
#[serde(rename_all = "camelCase")]
pub struct UserRequest {
    #[validate(required(message = "full name is required"))]
    #[validate(custom(function = "validate_full_name"))]
    pub full_name: Option<String>,

    #[validate(required(message = "email is required"))]
    #[validate(custom(function = "validate_email_address"))]
    pub email: Option<String>,

    #[validate(required(message = "phone cannot be null or empty"))]
    #[validate(custom(function = "validate_phone_number"))]
    pub phone: Option<String>,

    #[validate(required(message = "birth date is required"))]
    pub birth_date: Option<NaiveDate>,

    /// 열거형 라벨 문자열 (대소문자 구분)
    ///
    /// 알 수 없는 라벨도 역직렬화는 성공시키고 검증 단계에서 거부합니다.
    #[validate(required(message = "invalid user type. use one of (ADMIN, EDITOR, VIEWER)"))]
    #[validate(custom(function = "validate_user_type"))]
    pub user_type: Option<String>,
}

fn validate_full_name(full_name: &str) -> Result<(), ValidationError> {
    if !is_valid_string(full_name) {
        return Err(ValidationError::new("blank_full_name")
            .with_message(FULL_NAME_REQUIRED_MESSAGE.into()));
    }
    Ok(())
}

/// 이메일은 공백 검사를 먼저 수행하고, 값이 있을 때만 형식을 검사합니다.
fn validate_email_address(email: &str) -> Result<(), ValidationError> {
    if !is_valid_string(email) {
        return Err(ValidationError::new("blank_email")
            .with_message(EMAIL_REQUIRED_MESSAGE.into()));
    }
    if !email.validate_email() {
        return Err(ValidationError::new("invalid_email")
            .with_message(EMAIL_FORMAT_MESSAGE.into()));
    }
    Ok(())
}

fn validate_phone_number(phone: &str) -> Result<(), ValidationError> {
    validate_phone(Some(phone))
}

fn validate_user_type(user_type: &str) -> Result<(), ValidationError> {
    validate_enum::<UserType>(Some(user_type), USER_TYPE_MESSAGE)
}
