//! # Application Error Handling System
//!
//! 사용자 관리 서비스의 통합 에러 처리 시스템입니다.
//! 유스케이스, 검증, 매핑, 저장소 계층에서 발생하는 모든 실패를 [`AppError`]로
//! 모으고, `actix_web::ResponseError` 구현을 통해 일관된 [`ApiError`] JSON
//! 페이로드로 변환합니다.
//!
//! ## 에러 분류
//!
//! | 종류 | HTTP 상태 | 메시지 |
//! |------|-----------|--------|
//! | `NotFound` | 404 | 유스케이스가 전달한 메시지 |
//! | `IntegrityConflict` | 400 | 무결성 위반 (이메일 중복이면 전용 메시지) |
//! | `FieldValidation` | 400 | `validation errors` + 필드 맵 |
//! | `MalformedEnumValue` | 400 | `field formatting error` + 허용 값 목록 |
//! | `MalformedPayload` | 400 | `field formatting error` |
//! | `TypeMismatch` | 400 | `invalid parameter.` 또는 허용 값 목록 |
//! | `DatabaseError` / `InternalError` | 500 | 일반 메시지 (상세 내용은 로그로만) |
//!
//! ## 응답 형식
//!
//! ```json
//! {
//!   "message": "validation errors",
//!   "timestamp": "2025-01-01 12:00:00.000",
//!   "status": 400,
//!   "errors": { "phone": "invalid format, use: +55 11 99999-9999" }
//! }
//! ```
//!
//! `errors` 필드는 값이 없으면 `null`이 아니라 아예 생략됩니다.

use std::collections::BTreeMap;

use actix_web::http::StatusCode;
use actix_web::{HttpResponse, ResponseError};
use chrono::{Local, NaiveDateTime};
use serde::{Serialize, Serializer};
use thiserror::Error;

use crate::utils::string_utils::to_camel_case;

/// 응답 타임스탬프 포맷 (밀리초 정밀도)
pub const TIMESTAMP_FORMAT: &str = "%Y-%m-%d %H:%M:%S%.3f";

pub const INTEGRITY_VIOLATION_MESSAGE: &str =
    "integrity violation. check whether the submitted data already exists.";
pub const EMAIL_ALREADY_REGISTERED_MESSAGE: &str = "a user with this email is already registered.";
pub const VALIDATION_ERRORS_MESSAGE: &str = "validation errors";
pub const FIELD_FORMAT_ERROR_MESSAGE: &str = "field formatting error";
pub const INVALID_PARAMETER_MESSAGE: &str = "invalid parameter.";
pub const INTERNAL_ERROR_MESSAGE: &str = "an unexpected error occurred. please try again later.";

/// 애플리케이션 전역 에러 타입
///
/// 각 변형은 하나의 실패 "종류"이며, HTTP 상태 코드와 응답 본문은
/// [`AppError::to_api_error`]에서 결정됩니다. 내부적으로 재시도하지 않으며
/// 요청 단위로 독립적으로 실패합니다.
#[derive(Error, Debug)]
pub enum AppError {
    /// 요청한 ID의 레코드가 존재하지 않음 (404 Not Found)
    #[error("Not found: {0}")]
    NotFound(String),

    /// 저장소가 보고한 유니크 제약 위반 (400 Bad Request)
    ///
    /// `constraint`는 저장소 어댑터가 알고 있는 경우 위반된 제약(인덱스) 이름이고,
    /// `detail`은 저장소가 제공한 원문 메시지입니다.
    #[error("Integrity conflict: {detail}")]
    IntegrityConflict {
        constraint: Option<String>,
        detail: String,
    },

    /// 필드 단위 검증 실패 (400 Bad Request)
    ///
    /// 필드명(camelCase) → 첫 번째 검증 메시지
    #[error("Validation error: {0:?}")]
    FieldValidation(BTreeMap<String, String>),

    /// 열거형으로 해석할 수 없는 입력값 (400 Bad Request)
    #[error("Malformed enum value for field `{field}`")]
    MalformedEnumValue {
        field: String,
        accepted: &'static [&'static str],
    },

    /// 구조적으로 해석할 수 없는 요청 본문 (400 Bad Request)
    #[error("Malformed payload: {0}")]
    MalformedPayload(String),

    /// 쿼리/경로 파라미터 타입 불일치 (400 Bad Request)
    ///
    /// 파라미터가 열거형 타입이면 `accepted`에 허용 값이 담깁니다.
    #[error("Type mismatch for parameter `{parameter}`")]
    TypeMismatch {
        parameter: String,
        accepted: Option<&'static [&'static str]>,
    },

    /// 데이터베이스 관련 에러 (500 Internal Server Error)
    #[error("Database error: {0}")]
    DatabaseError(String),

    /// 내부 서버 에러 (500 Internal Server Error)
    #[error("Internal server error: {0}")]
    InternalError(String),
}

/// 클라이언트에게 반환되는 에러 페이로드
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ApiError {
    pub message: String,
    #[serde(serialize_with = "serialize_timestamp")]
    pub timestamp: NaiveDateTime,
    pub status: u16,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub errors: Option<BTreeMap<String, String>>,
}

impl ApiError {
    /// 현재 시각을 타임스탬프로 하는 페이로드를 생성합니다.
    pub fn new(
        message: impl Into<String>,
        status: StatusCode,
        errors: Option<BTreeMap<String, String>>,
    ) -> Self {
        Self {
            message: message.into(),
            timestamp: Local::now().naive_local(),
            status: status.as_u16(),
            errors,
        }
    }
}

fn serialize_timestamp<S>(timestamp: &NaiveDateTime, serializer: S) -> Result<S::Ok, S::Error>
where
    S: Serializer,
{
    serializer.collect_str(&timestamp.format(TIMESTAMP_FORMAT))
}

/// 허용 값 목록을 `[A, B, C]` 형태의 문자열로 렌더링합니다.
pub fn render_accepted_values(values: &[&str]) -> String {
    format!("[{}]", values.join(", "))
}

impl AppError {
    /// 무결성 위반이 이메일 제약에서 발생했는지 판별합니다.
    ///
    /// 저장소가 제약 이름을 알려주면 그것을 우선 사용하고, 그렇지 않으면
    /// 원문 메시지에 "email"이 포함되어 있는지(대소문자 무시)로 추정합니다.
    /// 후자는 저장소 구현의 메시지 형식에 의존하는 best-effort 판별입니다.
    fn is_email_conflict(constraint: Option<&str>, detail: &str) -> bool {
        let mentions_email = |text: &str| text.to_lowercase().contains("email");
        constraint.is_some_and(mentions_email) || mentions_email(detail)
    }

    /// 에러를 클라이언트용 페이로드로 변환합니다.
    pub fn to_api_error(&self) -> ApiError {
        let status = self.status_code();

        match self {
            AppError::NotFound(message) => ApiError::new(message.clone(), status, None),
            AppError::IntegrityConflict { constraint, detail } => {
                let message = if Self::is_email_conflict(constraint.as_deref(), detail) {
                    EMAIL_ALREADY_REGISTERED_MESSAGE
                } else {
                    INTEGRITY_VIOLATION_MESSAGE
                };
                ApiError::new(message, status, None)
            }
            AppError::FieldValidation(fields) => {
                ApiError::new(VALIDATION_ERRORS_MESSAGE, status, Some(fields.clone()))
            }
            AppError::MalformedEnumValue { field, accepted } => {
                let mut errors = BTreeMap::new();
                errors.insert(
                    field.clone(),
                    format!("invalid value. accepted values: {}", render_accepted_values(accepted)),
                );
                ApiError::new(FIELD_FORMAT_ERROR_MESSAGE, status, Some(errors))
            }
            AppError::MalformedPayload(_) => ApiError::new(FIELD_FORMAT_ERROR_MESSAGE, status, None),
            AppError::TypeMismatch { accepted, .. } => {
                let message = match accepted {
                    Some(values) => format!(
                        "invalid user type. accepted values: {}",
                        render_accepted_values(values)
                    ),
                    None => INVALID_PARAMETER_MESSAGE.to_string(),
                };
                ApiError::new(message, status, None)
            }
            AppError::DatabaseError(_) | AppError::InternalError(_) => {
                ApiError::new(INTERNAL_ERROR_MESSAGE, status, None)
            }
        }
    }
}

impl ResponseError for AppError {
    fn status_code(&self) -> StatusCode {
        match self {
            AppError::NotFound(_) => StatusCode::NOT_FOUND,
            AppError::IntegrityConflict { .. }
            | AppError::FieldValidation(_)
            | AppError::MalformedEnumValue { .. }
            | AppError::MalformedPayload(_)
            | AppError::TypeMismatch { .. } => StatusCode::BAD_REQUEST,
            AppError::DatabaseError(_) | AppError::InternalError(_) => {
                StatusCode::INTERNAL_SERVER_ERROR
            }
        }
    }

    /// HTTP 에러 응답을 생성합니다.
    ///
    /// 5xx 에러는 상세 내용을 서버 로그에만 남기고 클라이언트에는
    /// 일반 메시지만 노출합니다.
    fn error_response(&self) -> HttpResponse {
        let status = self.status_code();

        if status.is_server_error() {
            log::error!("{}", self);
        } else {
            log::debug!("request rejected: {}", self);
        }

        HttpResponse::build(status).json(self.to_api_error())
    }
}

impl From<validator::ValidationErrors> for AppError {
    /// 필드별 검증 에러를 필드 맵으로 모읍니다. 한 필드에 여러 에러가 있으면
    /// 첫 번째 메시지만 사용합니다.
    fn from(errors: validator::ValidationErrors) -> Self {
        let fields = errors
            .field_errors()
            .into_iter()
            .filter_map(|(field, field_errors)| {
                field_errors.first().map(|error| {
                    let message = error
                        .message
                        .as_ref()
                        .map(|m| m.to_string())
                        .unwrap_or_else(|| error.code.to_string());
                    (to_camel_case(&field), message)
                })
            })
            .collect();

        AppError::FieldValidation(fields)
    }
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
