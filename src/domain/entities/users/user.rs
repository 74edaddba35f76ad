use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use strum::{AsRefStr, Display, EnumString, VariantNames};

/// 사용자 권한 유형
///
/// 라벨은 선언 순서대로 `ADMIN`, `EDITOR`, `VIEWER`이며 대소문자를 구분합니다.
/// `UserType::VARIANTS`가 곧 에러 메시지에 노출되는 허용 값 목록입니다.
#[derive(
    Debug,
    Clone,
    Copy,
    PartialEq,
    Eq,
    Hash,
    Serialize,
    Deserialize,
    Display,
    EnumString,
    VariantNames,
    AsRefStr,
)]
#[serde(rename_all = "UPPERCASE")]
#[strum(serialize_all = "UPPERCASE")]
pub enum UserType {
    Admin,
    Editor,
    Viewer,
}

/// 사용자 엔티티
///
/// 저장소에 영속화되는 사용자 문서입니다. `id`는 저장소가 최초 저장 시
/// 할당하며 이후 변경되지 않습니다. `email`은 저장소 수준에서 유일합니다.
///
/// MongoDB에서는 `_id` 필드에 숫자 ID가 저장되고, 나머지 필드는
/// snake_case 이름 그대로 저장됩니다.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct User {
    #[serde(rename = "_id", skip_serializing_if = "Option::is_none")]
    pub id: Option<i64>,
    pub full_name: String,
    pub email: String,
    pub phone: String,
    pub birth_date: NaiveDate,
    pub user_type: UserType,
}

impl User {
    /// 아직 저장되지 않은(ID 없는) 사용자를 생성합니다.
    pub fn new(
        full_name: String,
        email: String,
        phone: String,
        birth_date: NaiveDate,
        user_type: UserType,
    ) -> Self {
        Self {
            id: None,
            full_name,
            email,
            phone,
            birth_date,
            user_type,
        }
    }

    /// 저장소가 할당한 ID를 부여한 사본을 반환합니다.
    pub fn with_id(self, id: i64) -> Self {
        Self { id: Some(id), ..self }
    }
}
