//! Users Entity Module
//!
//! 사용자 도메인의 핵심 엔티티를 정의하는 모듈입니다.
//!
//! # 주요 구성 요소
//!
//! - [`User`] - 영속화되는 사용자 문서 (ID는 저장소가 할당)
//! - [`UserType`] - 권한 유형 (`ADMIN`, `EDITOR`, `VIEWER`)
//!
//! # 사용 예제
//!
//! ```rust,ignore
//! use crate::domain::entities::users::{User, UserType};
//!
//! let user = User::new(
//!     "Ana Souza".to_string(),
//!     "ana@example.com".to_string(),
//!     "+55 11 99999-9999".to_string(),
//!     NaiveDate::from_ymd_opt(1990, 5, 17).unwrap(),
//!     UserType::Editor,
//! );
//! ```

pub mod user;

pub use user::{User, UserType};
