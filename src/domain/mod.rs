//! # Domain Layer Module
//!
//! 도메인 계층을 구성하는 핵심 모듈로, 사용자 엔티티와 API 계약(DTO),
//! 그리고 둘 사이의 변환 규칙을 담당합니다.
//!
//! ## 아키텍처 개요
//!
//! ```text
//! Handlers (HTTP 어댑터)
//!      │  UserRequest ──TryFrom──▶ UserDto
//!      ▼
//! Services (유스케이스)
//!      │  UserDto ◀──From──▶ User
//!      ▼
//! Repositories (영속성 포트)
//! ```
//!
//! ## Spring Framework와의 비교
//!
//! | Spring | 이 시스템 | 역할 |
//! |--------|-----------|------|
//! | `@Entity` | [`entities`] 모듈 | 영속 객체 |
//! | `record UserDTO` | [`dto::users::UserDto`] | 계층 간 작업 표현 |
//! | `@RequestBody` / `@ResponseBody` | [`dto`] 모듈 | API 계약 정의 |
//! | MapStruct / 정적 Mapper | `From` / `TryFrom` 구현 | 무손실 변환 |
//! | `@Valid` | `validator::Validate` derive | 입력 검증 |

pub mod entities;
pub mod dto;
