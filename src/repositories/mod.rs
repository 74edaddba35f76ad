//! 데이터 액세스 계층을 담당하는 리포지토리 모듈
//!
//! 서비스가 의존하는 [`users::UserRepository`] 포트와 그 구현체들을 제공합니다.
//! 구현체는 `STORAGE_BACKEND` 설정에 따라 `main`에서 선택되어
//! `Arc<dyn UserRepository>`로 서비스에 주입됩니다.
//!
//! # Examples
//!
//! ```rust,ignore
//! use std::sync::Arc;
//! use crate::repositories::users::{InMemoryUserRepository, UserRepository};
//!
//! let repository: Arc<dyn UserRepository> = Arc::new(InMemoryUserRepository::new());
//! let users = repository.find_all().await?;
//! ```

pub mod users;
