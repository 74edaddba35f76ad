//! # User Repository Port
//!
//! 사용자 영속성 계층의 추상 인터페이스입니다. 서비스는 이 trait에만 의존하며,
//! 실제 구현은 실행 환경에 따라 선택됩니다.
//!
//! | 구현 | 모듈 | 용도 |
//! |------|------|------|
//! | [`InMemoryUserRepository`](super::InMemoryUserRepository) | `memory_user_repo` | 개발/테스트 |
//! | [`MongoUserRepository`](super::MongoUserRepository) | `mongo_user_repo` | 운영 |
//!
//! ## 계약
//!
//! - `save`: ID가 없으면 새 ID를 할당해 삽입하고, 있으면 같은 ID의 문서를 교체
//! - 이메일 유일성 위반은 `AppError::IntegrityConflict`로 보고
//!   (가능하면 `constraint`에 `email_unique` 지정)
//! - 그 외 저장소 실패는 `AppError::DatabaseError`
//! - 목록 조회는 저장소 순서(ID 오름차순)를 유지
//!
//! ## Spring Framework와의 비교
//!
//! | Spring Data | 이 trait |
//! |-------------|----------|
//! | `JpaRepository<User, Long>.save` | [`UserRepository::save`] |
//! | `findAll` | [`UserRepository::find_all`] |
//! | `findById` → `Optional<User>` | [`UserRepository::find_by_id`] → `Option<User>` |
//! | `findByUserType` (쿼리 메서드) | [`UserRepository::find_by_user_type`] |
//! | `existsById` | [`UserRepository::exists_by_id`] |
//! | `deleteById` | [`UserRepository::delete_by_id`] |

use async_trait::async_trait;

use crate::core::errors::AppResult;
use crate::domain::entities::users::{User, UserType};

/// 이메일 유니크 인덱스(제약) 이름
pub const EMAIL_UNIQUE_CONSTRAINT: &str = "email_unique";

#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait UserRepository: Send + Sync {
    /// 사용자를 저장하고 ID가 할당된 엔티티를 반환합니다.
    async fn save(&self, user: User) -> AppResult<User>;

    async fn find_all(&self) -> AppResult<Vec<User>>;

    async fn find_by_id(&self, id: i64) -> AppResult<Option<User>>;

    /// 주어진 유형의 사용자 목록 (없으면 빈 목록)
    async fn find_by_user_type(&self, user_type: UserType) -> AppResult<Vec<User>>;

    async fn exists_by_id(&self, id: i64) -> AppResult<bool>;

    /// 존재하지 않는 ID를 삭제해도 에러가 아닙니다.
    async fn delete_by_id(&self, id: i64) -> AppResult<()>;
}
