//! # User DTOs
//!
//! 사용자 도메인의 데이터 전송 객체와 변환 규칙입니다.
//!
//! ## 구성
//!
//! | 타입 | 위치 | 용도 |
//! |------|------|------|
//! | [`UserDto`] | 이 모듈 | 서비스 계층의 작업 표현 (엔티티와 필드 1:1) |
//! | [`request::UserRequest`] | `request` | 생성/수정 요청 본문 |
//! | [`response::UserResponse`] | `response` | 조회 응답 본문 |
//! | [`response::UserEnvelope`] | `response` | 생성/수정 응답 `{ message, result }` |
//! | [`mapping::MappingError`] | `mapping` | 요청 → DTO 변환 실패 |
//!
//! 모든 변환은 부수 효과가 없으며 필드를 임의로 채우거나 생략하지 않습니다.

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

use crate::domain::entities::users::{User, UserType};

pub mod mapping;
pub mod request;
pub mod response;

pub use mapping::MappingError;
pub use request::*;
pub use response::*;

/// 서비스 계층의 사용자 작업 표현
///
/// 엔티티 [`User`]와 필드가 정확히 일치하지만 저장소 세부사항과는 분리되어
/// 있습니다. 유스케이스와 매핑 계층 사이에서는 이 타입만 주고받습니다.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct UserDto {
    pub id: Option<i64>,
    pub full_name: String,
    pub email: String,
    pub phone: String,
    pub birth_date: NaiveDate,
    pub user_type: UserType,
}

impl From<UserDto> for User {
    fn from(dto: UserDto) -> Self {
        let UserDto {
            id,
            full_name,
            email,
            phone,
            birth_date,
            user_type,
        } = dto;

        let user = User::new(full_name, email, phone, birth_date, user_type);
        match id {
            Some(id) => user.with_id(id),
            None => user,
        }
    }
}

impl From<User> for UserDto {
    fn from(user: User) -> Self {
        let User {
            id,
            full_name,
            email,
            phone,
            birth_date,
            user_type,
        } = user;

        Self {
            id,
            full_name,
            email,
            phone,
            birth_date,
            user_type,
        }
    }
}
