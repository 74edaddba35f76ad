//! 비즈니스 로직을 담당하는 서비스 계층 모듈
//!
//! 서비스는 저장소 포트(`Arc<dyn UserRepository>`)를 생성자로 주입받으며,
//! `main`에서 한 번 생성되어 `web::Data`로 모든 워커에 공유됩니다.
//!
//! # Examples
//!
//! ```rust,ignore
//! use actix_web::web;
//! use crate::services::users::UserService;
//!
//! let service = web::Data::new(UserService::new(repository));
//! ```

pub mod users;
