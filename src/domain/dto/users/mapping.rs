//! 요청 본문 → [`UserDto`] 변환
//!
//! 검증을 통과한 [`UserRequest`]를 서비스 계층의 [`UserDto`]로 옮깁니다.
//! 정상 흐름에서는 실패하지 않지만, 검증 없이 호출되면 누락 필드나
//! 알 수 없는 열거형 라벨을 [`MappingError`]로 보고합니다.

use std::str::FromStr;

use strum::VariantNames;
use thiserror::Error;

use crate::core::errors::AppError;
use crate::domain::dto::users::{UserDto, UserRequest};
use crate::domain::entities::users::UserType;

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum MappingError {
    /// 열거형으로 해석할 수 없는 라벨
    #[error("unknown value `{value}` for field `{field}`")]
    UnknownVariant {
        field: &'static str,
        value: String,
        accepted: &'static [&'static str],
    },

    #[error("missing required field `{0}`")]
    MissingField(&'static str),
}

impl From<MappingError> for AppError {
    fn from(error: MappingError) -> Self {
        match error {
            MappingError::UnknownVariant { field, accepted, .. } => AppError::MalformedEnumValue {
                field: field.to_string(),
                accepted,
            },
            MappingError::MissingField(_) => AppError::MalformedPayload(error.to_string()),
        }
    }
}

fn require<T>(value: Option<T>, field: &'static str) -> Result<T, MappingError> {
    value.ok_or(MappingError::MissingField(field))
}

impl TryFrom<UserRequest> for UserDto {
    type Error = MappingError;

    fn try_from(request: UserRequest) -> Result<Self, Self::Error> {
        let UserRequest {
            full_name,
            email,
            phone,
            birth_date,
            user_type,
        } = request;

        // 선언 순서대로 검사하여 첫 번째 누락 필드를 보고
        let full_name = require(full_name, "fullName")?;
        let email = require(email, "email")?;
        let phone = require(phone, "phone")?;
        let birth_date = require(birth_date, "birthDate")?;
        let user_type = require(user_type, "userType")?;
        let user_type =
            UserType::from_str(&user_type).map_err(|_| MappingError::UnknownVariant {
                field: "userType",
                value: user_type,
                accepted: UserType::VARIANTS,
            })?;

        Ok(Self {
            id: None,
            full_name,
            email,
            phone,
            birth_date,
            user_type,
        })
    }
}
