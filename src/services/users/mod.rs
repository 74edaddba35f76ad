//! 사용자 관리 서비스 모듈
//!
//! 사용자 생명주기와 관련된 비즈니스 규칙(존재 확인, 전체 덮어쓰기 수정,
//! 확인 후 삭제)을 담당하는 서비스를 제공합니다.
//!
//! # Examples
//!
//! ```rust,ignore
//! use std::sync::Arc;
//! use crate::repositories::users::InMemoryUserRepository;
//! use crate::services::users::UserService;
//!
//! let service = UserService::new(Arc::new(InMemoryUserRepository::new()));
//! let created = service.create(dto).await?;
//! ```

pub mod user_service;

pub use user_service::UserService;
