//! # User Management Service
//!
//! 사용자 레코드를 관리하는 CRUD 서비스입니다. 필드 단위 입력 검증과
//! 구조화된 JSON 에러 응답을 제공합니다.
//!
//! ## 계층 구성
//!
//! ```text
//! routes / handlers    ← HTTP 어댑터 (요청/응답 DTO, extractor 에러 처리)
//!        │
//! services             ← 유스케이스 (존재 확인, 전체 수정, 확인 후 삭제)
//!        │
//! repositories         ← 영속성 포트 + 인메모리 / MongoDB 어댑터
//! ```
//!
//! 횡단 관심사는 `core`(에러), `config`(환경 설정), `utils`(검증 규칙)에 있습니다.

pub mod core;
pub mod config;
pub mod db;
pub mod domain;
pub mod repositories;
pub mod services;
pub mod utils;
pub mod routes;
pub mod handlers;
