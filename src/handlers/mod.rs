//! HTTP 요청 핸들러 모듈
//!
//! - [`users`] - 사용자 CRUD 엔드포인트
//! - [`rejections`] - extractor 실패를 JSON 에러 페이로드로 변환하는 설정

pub mod rejections;
pub mod users;
