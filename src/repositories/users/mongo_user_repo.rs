//! MongoDB 사용자 저장소
//!
//! `users` 컬렉션에 사용자 문서를 저장합니다. 숫자 ID는 `counters`
//! 컬렉션의 `{ _id: "users", seq }` 문서를 원자적으로 증가시켜 할당하고,
//! 이메일 유일성은 `email_unique` 인덱스로 강제합니다.

use async_trait::async_trait;
use futures_util::TryStreamExt;
use log::{debug, info};
use mongodb::{
    Collection, IndexModel,
    bson::{Document, doc},
    error::{Error as MongoError, ErrorKind, WriteFailure},
    options::{FindOneAndUpdateOptions, FindOptions, IndexOptions, ReturnDocument},
};

use crate::core::errors::{AppError, AppResult, ErrorContext};
use crate::db::Database;
use crate::domain::entities::users::{User, UserType};
use crate::repositories::users::user_repo::{EMAIL_UNIQUE_CONSTRAINT, UserRepository};

pub const USERS_COLLECTION: &str = "users";
pub const COUNTERS_COLLECTION: &str = "counters";

/// MongoDB duplicate key 에러 코드
const DUPLICATE_KEY_CODE: i32 = 11000;

pub struct MongoUserRepository {
    users: Collection<User>,
    counters: Collection<Document>,
}

impl MongoUserRepository {
    pub fn new(database: &Database) -> Self {
        let db = database.get_database();
        Self {
            users: db.collection::<User>(USERS_COLLECTION),
            counters: db.collection::<Document>(COUNTERS_COLLECTION),
        }
    }

    /// 애플리케이션 시작 시 한 번 호출합니다.
    pub async fn create_indexes(&self) -> AppResult<()> {
        let email_index = IndexModel::builder()
            .keys(doc! { "email": 1 })
            .options(IndexOptions::builder()
                .unique(true)
                .name(EMAIL_UNIQUE_CONSTRAINT.to_string())
                .build())
            .build();

        let user_type_index = IndexModel::builder()
            .keys(doc! { "user_type": 1 })
            .options(IndexOptions::builder()
                .name("user_type_asc".to_string())
                .build())
            .build();

        self.users
            .create_indexes([email_index, user_type_index])
            .await
            .map_err(|e| AppError::DatabaseError(e.to_string()))?;

        info!("📇 users 컬렉션 인덱스 준비 완료");
        Ok(())
    }

    async fn next_id(&self) -> AppResult<i64> {
        let options = FindOneAndUpdateOptions::builder()
            .upsert(true)
            .return_document(ReturnDocument::After)
            .build();

        let counter = self.counters
            .find_one_and_update(
                doc! { "_id": USERS_COLLECTION },
                doc! { "$inc": { "seq": 1_i64 } },
            )
            .with_options(options)
            .await
            .map_err(|e| AppError::DatabaseError(e.to_string()))?
            .ok_or_else(|| AppError::DatabaseError("users 시퀀스 문서를 찾을 수 없습니다".to_string()))?;

        counter.get_i64("seq").context("잘못된 users 시퀀스 값")
    }

    fn type_filter(user_type: UserType) -> Document {
        doc! { "user_type": user_type.as_ref() }
    }

    fn sorted_by_id() -> FindOptions {
        FindOptions::builder().sort(doc! { "_id": 1 }).build()
    }

    async fn find_many(&self, filter: Document) -> AppResult<Vec<User>> {
        let cursor = self.users
            .find(filter)
            .with_options(Self::sorted_by_id())
            .await
            .map_err(|e| AppError::DatabaseError(e.to_string()))?;

        cursor
            .try_collect()
            .await
            .map_err(|e| AppError::DatabaseError(e.to_string()))
    }
}

/// duplicate key 쓰기 에러를 무결성 위반으로 분류합니다.
fn integrity_conflict(code: i32, message: &str) -> Option<AppError> {
    if code != DUPLICATE_KEY_CODE {
        return None;
    }

    let constraint = message
        .contains(EMAIL_UNIQUE_CONSTRAINT)
        .then(|| EMAIL_UNIQUE_CONSTRAINT.to_string());

    Some(AppError::IntegrityConflict {
        constraint,
        detail: message.to_string(),
    })
}

fn map_write_error(error: MongoError) -> AppError {
    if let ErrorKind::Write(WriteFailure::WriteError(write_error)) = error.kind.as_ref() {
        if let Some(conflict) = integrity_conflict(write_error.code, &write_error.message) {
            return conflict;
        }
    }
    AppError::DatabaseError(error.to_string())
}

#[async_trait]
impl UserRepository for MongoUserRepository {
    async fn save(&self, mut user: User) -> AppResult<User> {
        match user.id {
            Some(id) => {
                self.users
                    .replace_one(doc! { "_id": id }, &user)
                    .await
                    .map_err(map_write_error)?;
                debug!("사용자 문서 교체: id={}", id);
            }
            None => {
                let id = self.next_id().await?;
                user.id = Some(id);
                self.users
                    .insert_one(&user)
                    .await
                    .map_err(map_write_error)?;
                debug!("사용자 문서 삽입: id={}", id);
            }
        }

        Ok(user)
    }

    async fn find_all(&self) -> AppResult<Vec<User>> {
        self.find_many(doc! {}).await
    }

    async fn find_by_id(&self, id: i64) -> AppResult<Option<User>> {
        self.users
            .find_one(doc! { "_id": id })
            .await
            .map_err(|e| AppError::DatabaseError(e.to_string()))
    }

    async fn find_by_user_type(&self, user_type: UserType) -> AppResult<Vec<User>> {
        self.find_many(Self::type_filter(user_type)).await
    }

    async fn exists_by_id(&self, id: i64) -> AppResult<bool> {
        let count = self.users
            .count_documents(doc! { "_id": id })
            .await
            .map_err(|e| AppError::DatabaseError(e.to_string()))?;

        Ok(count > 0)
    }

    async fn delete_by_id(&self, id: i64) -> AppResult<()> {
        self.users
            .delete_one(doc! { "_id": id })
            .await
            .map_err(|e| AppError::DatabaseError(e.to_string()))?;

        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    // 실제 쿼리는 MongoDB 인스턴스가 필요하므로 순수 함수만 검증

    #[test]
    fn test_duplicate_email_is_integrity_conflict() {
        let message = "E11000 duplicate key error collection: db.users index: email_unique dup key: { email: \"a@b.com\" }";

        match integrity_conflict(11000, message) {
            Some(AppError::IntegrityConflict { constraint, detail }) => {
                assert_eq!(constraint.as_deref(), Some(EMAIL_UNIQUE_CONSTRAINT));
                assert_eq!(detail, message);
            }
            other => panic!("expected IntegrityConflict, got {other:?}"),
        }
    }

    #[test]
    fn test_duplicate_on_other_index_has_no_constraint() {
        let conflict = integrity_conflict(11000, "E11000 duplicate key error index: _id_");
        assert!(matches!(
            conflict,
            Some(AppError::IntegrityConflict { constraint: None, .. })
        ));
    }

    #[test]
    fn test_other_write_errors_are_not_conflicts() {
        assert!(integrity_conflict(121, "Document failed validation").is_none());
    }

    #[test]
    fn test_type_filter_uses_label() {
        let filter = MongoUserRepository::type_filter(UserType::Editor);
        assert_eq!(filter.get_str("user_type").unwrap(), "EDITOR");
    }
}
