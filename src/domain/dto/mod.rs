//! # Data Transfer Objects
//!
//! 계층 간, 그리고 HTTP 경계에서 주고받는 데이터 구조를 정의합니다.
//!
//! - `users::UserDto` - 유스케이스와 매핑 계층 사이의 작업 표현
//! - `users::request` - 클라이언트 요청 본문 (검증 규칙 포함)
//! - `users::response` - 클라이언트 응답 본문

pub mod users;

pub use users::*;
