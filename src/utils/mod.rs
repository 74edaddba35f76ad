//! 공통 유틸리티 함수 모듈
//!
//! 애플리케이션 전체에서 사용되는 공통 유틸리티 함수들을 제공합니다.
//!
//! # Modules
//!
//! - [`string_utils`] - 문자열 검증, 변환 유틸리티
//! - [`validators`] - 전화번호 형식, 열거형 멤버십 검증 규칙
//!
//! # Examples
//!
//! ```rust,ignore
//! use crate::utils::validators::validate_phone;
//!
//! assert!(validate_phone(Some("+55 11 99999-9999")).is_ok());
//! ```

pub mod string_utils;
pub mod validators;
