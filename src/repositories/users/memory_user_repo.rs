//! 인메모리 사용자 저장소
//!
//! `RwLock<BTreeMap>` 기반 구현으로, 개발 환경과 테스트에서 MongoDB 없이
//! 서비스를 실행할 때 사용합니다. ID는 1부터 순차 할당되며 이메일
//! 유일성은 MongoDB의 유니크 인덱스와 동일하게 강제합니다.

use std::collections::BTreeMap;
use std::sync::RwLock;

use async_trait::async_trait;

use crate::core::errors::{AppError, AppResult, ErrorContext};
use crate::domain::entities::users::{User, UserType};
use crate::repositories::users::user_repo::{EMAIL_UNIQUE_CONSTRAINT, UserRepository};

const LOCK_POISONED: &str = "user store lock poisoned";

#[derive(Default)]
struct Store {
    users: BTreeMap<i64, User>,
    last_id: i64,
}

#[derive(Default)]
pub struct InMemoryUserRepository {
    store: RwLock<Store>,
}

impl InMemoryUserRepository {
    pub fn new() -> Self {
        Self::default()
    }
}

#[async_trait]
impl UserRepository for InMemoryUserRepository {
    async fn save(&self, mut user: User) -> AppResult<User> {
        let mut store = self.store.write().context(LOCK_POISONED)?;

        let duplicate = store
            .users
            .values()
            .any(|existing| existing.email == user.email && existing.id != user.id);
        if duplicate {
            return Err(AppError::IntegrityConflict {
                constraint: Some(EMAIL_UNIQUE_CONSTRAINT.to_string()),
                detail: format!("duplicate key on {}: {}", EMAIL_UNIQUE_CONSTRAINT, user.email),
            });
        }

        let id = match user.id {
            Some(id) => {
                store.last_id = store.last_id.max(id);
                id
            }
            None => {
                store.last_id += 1;
                store.last_id
            }
        };
        user.id = Some(id);
        store.users.insert(id, user.clone());

        Ok(user)
    }

    async fn find_all(&self) -> AppResult<Vec<User>> {
        let store = self.store.read().context(LOCK_POISONED)?;
        Ok(store.users.values().cloned().collect())
    }

    async fn find_by_id(&self, id: i64) -> AppResult<Option<User>> {
        let store = self.store.read().context(LOCK_POISONED)?;
        Ok(store.users.get(&id).cloned())
    }

    async fn find_by_user_type(&self, user_type: UserType) -> AppResult<Vec<User>> {
        let store = self.store.read().context(LOCK_POISONED)?;
        Ok(store
            .users
            .values()
            .filter(|user| user.user_type == user_type)
            .cloned()
            .collect())
    }

    async fn exists_by_id(&self, id: i64) -> AppResult<bool> {
        let store = self.store.read().context(LOCK_POISONED)?;
        Ok(store.users.contains_key(&id))
    }

    async fn delete_by_id(&self, id: i64) -> AppResult<()> {
        let mut store = self.store.write().context(LOCK_POISONED)?;
        store.users.remove(&id);
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::NaiveDate;

    fn user(email: &str, user_type: UserType) -> User {
        User::new(
            "Test User".to_string(),
            email.to_string(),
            "+55 11 99999-9999".to_string(),
            NaiveDate::from_ymd_opt(1990, 1, 1).unwrap(),
            user_type,
        )
    }

    #[actix_web::test]
    async fn test_save_assigns_sequential_ids() {
        let repo = InMemoryUserRepository::new();

        let first = repo.save(user("a@example.com", UserType::Admin)).await.unwrap();
        let second = repo.save(user("b@example.com", UserType::Viewer)).await.unwrap();

        assert_eq!(first.id, Some(1));
        assert_eq!(second.id, Some(2));
        assert_eq!(repo.find_all().await.unwrap().len(), 2);
    }

    #[actix_web::test]
    async fn test_duplicate_email_is_integrity_conflict() {
        let repo = InMemoryUserRepository::new();
        repo.save(user("dup@example.com", UserType::Admin)).await.unwrap();

        let result = repo.save(user("dup@example.com", UserType::Editor)).await;

        match result {
            Err(AppError::IntegrityConflict { constraint, .. }) => {
                assert_eq!(constraint.as_deref(), Some(EMAIL_UNIQUE_CONSTRAINT));
            }
            other => panic!("expected IntegrityConflict, got {other:?}"),
        }
        assert_eq!(repo.find_all().await.unwrap().len(), 1);
    }

    #[actix_web::test]
    async fn test_save_with_id_replaces_and_keeps_own_email() {
        let repo = InMemoryUserRepository::new();
        let saved = repo.save(user("same@example.com", UserType::Admin)).await.unwrap();

        let mut changed = saved.clone();
        changed.full_name = "Renamed".to_string();
        let updated = repo.save(changed).await.unwrap();

        assert_eq!(updated.id, saved.id);
        let stored = repo.find_by_id(1).await.unwrap().unwrap();
        assert_eq!(stored.full_name, "Renamed");
        assert_eq!(repo.find_all().await.unwrap().len(), 1);
    }

    #[actix_web::test]
    async fn test_find_by_user_type_and_delete() {
        let repo = InMemoryUserRepository::new();
        repo.save(user("e1@example.com", UserType::Editor)).await.unwrap();
        repo.save(user("a1@example.com", UserType::Admin)).await.unwrap();
        repo.save(user("e2@example.com", UserType::Editor)).await.unwrap();

        let editors = repo.find_by_user_type(UserType::Editor).await.unwrap();
        assert_eq!(editors.len(), 2);
        assert!(repo.find_by_user_type(UserType::Viewer).await.unwrap().is_empty());

        assert!(repo.exists_by_id(2).await.unwrap());
        repo.delete_by_id(2).await.unwrap();
        assert!(!repo.exists_by_id(2).await.unwrap());
        assert!(repo.find_by_id(2).await.unwrap().is_none());

        // 삭제된 ID는 재사용하지 않음
        let next = repo.save(user("v1@example.com", UserType::Viewer)).await.unwrap();
        assert_eq!(next.id, Some(4));
    }
}
