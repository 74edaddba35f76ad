//! # Core Module
//!
//! 서비스 전역에서 공유하는 핵심 기능을 제공하는 모듈입니다.
//!
//! ## 모듈 구성
//!
//! ### [`errors`] - 통합 에러 처리
//! - **AppError**: 애플리케이션 전역 에러 타입 (실패 종류별 변형)
//! - **ApiError**: 클라이언트에게 반환되는 구조화된 에러 페이로드
//! - **HTTP 통합**: Actix-Web `ResponseError` 구현으로 상태 코드 자동 매핑
//!
//! ## Spring Framework와의 비교
//!
//! | Spring | 이 모듈 |
//! |--------|---------|
//! | `@RestControllerAdvice` | `impl ResponseError for AppError` |
//! | `@ExceptionHandler` | `AppError::to_api_error()` |
//! | `MethodArgumentNotValidException` | `AppError::FieldValidation` |
//! | `DataIntegrityViolationException` | `AppError::IntegrityConflict` |

pub mod errors;

pub use errors::*;
