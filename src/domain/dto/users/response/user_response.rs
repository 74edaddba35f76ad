use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

use crate::domain::dto::users::UserDto;
use crate::domain::entities::users::UserType;

pub const USER_CREATED_MESSAGE: &str = "user created successfully!";
pub const USER_UPDATED_MESSAGE: &str = "user updated successfully!";

/// 사용자 응답 DTO
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct UserResponse {
    /// 저장 전 레코드라면 `null`
    pub id: Option<i64>,
    pub full_name: String,
    pub email: String,
    pub phone: String,
    pub birth_date: NaiveDate,
    /// 직렬화 시 라벨(`ADMIN` 등)로 출력
    pub user_type: UserType,
}

impl From<UserDto> for UserResponse {
    fn from(dto: UserDto) -> Self {
        let UserDto {
            id,
            full_name,
            email,
            phone,
            birth_date,
            user_type,
        } = dto;

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

/// 생성/수정 응답 DTO
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct UserEnvelope {
    pub message: String,
    pub result: UserResponse,
}

impl UserEnvelope {
    pub fn created(user: UserDto) -> Self {
        Self {
            message: USER_CREATED_MESSAGE.to_string(),
            result: UserResponse::from(user),
        }
    }

    pub fn updated(user: UserDto) -> Self {
        Self {
            message: USER_UPDATED_MESSAGE.to_string(),
            result: UserResponse::from(user),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_response_json_shape() {
        let dto = UserDto {
            id: Some(3),
            full_name: "Ana Souza".to_string(),
            email: "ana@example.com".to_string(),
            phone: "+55 11 99999-9999".to_string(),
            birth_date: NaiveDate::from_ymd_opt(1990, 5, 17).unwrap(),
            user_type: UserType::Viewer,
        };

        let json = serde_json::to_value(UserEnvelope::created(dto)).unwrap();

        assert_eq!(json["message"], USER_CREATED_MESSAGE);
        assert_eq!(
            json["result"],
            serde_json::json!({
                "id": 3,
                "fullName": "Ana Souza",
                "email": "ana@example.com",
                "phone": "+55 11 99999-9999",
                "birthDate": "1990-05-17",
                "userType": "VIEWER"
            })
        );
    }

    #[test]
    fn test_response_without_id_keeps_it_null() {
        let dto = UserDto {
            id: None,
            full_name: "Ana Souza".to_string(),
            email: "ana@example.com".to_string(),
            phone: "+55 11 99999-9999".to_string(),
            birth_date: NaiveDate::from_ymd_opt(1990, 5, 17).unwrap(),
            user_type: UserType::Admin,
        };

        let response = UserResponse::from(dto);
        assert_eq!(response.id, None);

        let json = serde_json::to_value(&response).unwrap();
        assert!(json["id"].is_null());
    }
}
