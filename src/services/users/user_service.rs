//! # 사용자 유스케이스 서비스
//!
//! 사용자 생성, 조회, 수정, 삭제, 유형별 필터링을 담당합니다.
//! 입력은 이미 검증된 [`UserDto`]이며, 영속성은 [`UserRepository`] 포트에
//! 위임합니다.
//!
//! ## 비즈니스 규칙
//!
//! | 연산 | 규칙 |
//! |------|------|
//! | `create` | 중복 이메일 사전 검사 없음. 저장소의 무결성 위반을 그대로 전파 |
//! | `find_by_id` | 없으면 `NotFound("user not found")` |
//! | `update` | 없으면 `NotFound`, 있으면 ID를 제외한 모든 필드를 덮어씀 |
//! | `delete` | `exists_by_id`로 확인 후 삭제. 없으면 삭제를 시도하지 않음 |
//!
//! 서비스는 요청 간 상태를 갖지 않으며 재시도하지 않습니다.

use std::sync::Arc;

use log::{debug, info};

use crate::core::errors::{AppError, AppResult};
use crate::domain::dto::users::UserDto;
use crate::domain::entities::users::{User, UserType};
use crate::repositories::users::UserRepository;

pub const USER_NOT_FOUND_MESSAGE: &str = "user not found";

pub struct UserService {
    user_repo: Arc<dyn UserRepository>,
}

impl UserService {
    pub fn new(user_repo: Arc<dyn UserRepository>) -> Self {
        Self { user_repo }
    }

    fn not_found() -> AppError {
        AppError::NotFound(USER_NOT_FOUND_MESSAGE.to_string())
    }

    /// 새 사용자를 저장하고 할당된 ID가 포함된 레코드를 반환합니다.
    ///
    /// 입력의 `id`는 무시됩니다.
    pub async fn create(&self, user: UserDto) -> AppResult<UserDto> {
        let entity = User::from(UserDto { id: None, ..user });
        let saved = self.user_repo.save(entity).await?;

        info!("👤 사용자 생성 완료: id={:?}", saved.id);
        Ok(UserDto::from(saved))
    }

    pub async fn find_all(&self) -> AppResult<Vec<UserDto>> {
        let users = self.user_repo.find_all().await?;
        debug!("사용자 목록 조회: {}건", users.len());

        Ok(users.into_iter().map(UserDto::from).collect())
    }

    pub async fn find_by_id(&self, id: i64) -> AppResult<UserDto> {
        self.user_repo
            .find_by_id(id)
            .await?
            .map(UserDto::from)
            .ok_or_else(Self::not_found)
    }

    /// 해당 유형의 사용자가 없으면 빈 목록을 반환합니다.
    pub async fn find_by_user_type(&self, user_type: UserType) -> AppResult<Vec<UserDto>> {
        let users = self.user_repo.find_by_user_type(user_type).await?;
        debug!("유형별 사용자 조회: type={}, {}건", user_type, users.len());

        Ok(users.into_iter().map(UserDto::from).collect())
    }

    /// 저장된 레코드의 모든 필드를 `changes`로 덮어씁니다. 부분 수정은 지원하지 않습니다.
    pub async fn update(&self, id: i64, changes: UserDto) -> AppResult<UserDto> {
        let mut user = self.user_repo
            .find_by_id(id)
            .await?
            .ok_or_else(Self::not_found)?;

        user.full_name = changes.full_name;
        user.email = changes.email;
        user.phone = changes.phone;
        user.birth_date = changes.birth_date;
        user.user_type = changes.user_type;

        let saved = self.user_repo.save(user).await?;

        info!("✏️ 사용자 수정 완료: id={}", id);
        Ok(UserDto::from(saved))
    }

    pub async fn delete(&self, id: i64) -> AppResult<()> {
        if !self.user_repo.exists_by_id(id).await? {
            return Err(Self::not_found());
        }

        self.user_repo.delete_by_id(id).await?;

        info!("🗑️ 사용자 삭제 완료: id={}", id);
        Ok(())
    }
}
