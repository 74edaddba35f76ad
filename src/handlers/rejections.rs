//! # Extractor 에러 핸들러
//!
//! Actix-Web extractor가 요청을 해석하지 못했을 때 기본 텍스트 응답 대신
//! [`AppError`] 기반 JSON 에러 페이로드를 반환하도록 설정합니다.
//!
//! | Extractor | 실패 예시 | 변환 결과 |
//! |-----------|-----------|-----------|
//! | `web::Json` | 깨진 JSON, 잘못된 날짜, 타입 불일치 | `MalformedPayload` |
//! | `web::Query` | `?type=SUPERUSER` | `TypeMismatch` (허용 값 목록 포함) |
//! | `web::Path` | `/api/users/abc` | `TypeMismatch` (`invalid parameter.`) |

use actix_web::{HttpRequest, error, web};
use log::debug;
use strum::VariantNames;

use crate::core::errors::AppError;
use crate::domain::entities::users::UserType;

pub fn json_config() -> web::JsonConfig {
    web::JsonConfig::default().error_handler(|err: error::JsonPayloadError, req: &HttpRequest| {
        debug!("JSON 본문 해석 실패: {} {} - {}", req.method(), req.path(), err);
        AppError::MalformedPayload(err.to_string()).into()
    })
}

/// 쿼리 파라미터는 사용자 유형 필터(`type`)만 사용합니다.
pub fn query_config() -> web::QueryConfig {
    web::QueryConfig::default().error_handler(|err: error::QueryPayloadError, req: &HttpRequest| {
        debug!("쿼리 파라미터 해석 실패: {} - {}", req.query_string(), err);
        AppError::TypeMismatch {
            parameter: "type".to_string(),
            accepted: Some(UserType::VARIANTS),
        }
        .into()
    })
}

pub fn path_config() -> web::PathConfig {
    web::PathConfig::default().error_handler(|err: error::PathError, req: &HttpRequest| {
        debug!("경로 파라미터 해석 실패: {} - {}", req.path(), err);
        AppError::TypeMismatch {
            parameter: "id".to_string(),
            accepted: None,
        }
        .into()
    })
}
