//! # Domain Entities Module
//!
//! 이 모듈은 비즈니스 도메인의 핵심 엔티티들을 정의합니다.
//! Spring Framework의 JPA Entity와 유사한 역할을 하며, 저장소 문서와 직접 매핑되는
//! 데이터 구조체들을 포함합니다.
//!
//! ## 주요 역할
//!
//! - **도메인 모델링**: 사용자와 권한 유형을 Rust 타입으로 표현
//! - **데이터베이스 매핑**: MongoDB `users` 컬렉션과 1:1 대응되는 문서 구조
//! - **직렬화/역직렬화**: snake_case 필드명으로 BSON/JSON 변환
//!
//! ## Spring Framework와의 비교
//!
//! | Spring JPA Entity | Rust Domain Entity |
//! |------------------|-------------------|
//! | `@Entity` | `#[derive(Serialize, Deserialize)]` |
//! | `@Id @GeneratedValue` | `#[serde(rename = "_id")] id: Option<i64>` |
//! | `@Column(unique = true)` | 저장소의 `email_unique` 인덱스 |
//! | `@Enumerated(EnumType.STRING)` | `strum` + `serde` 라벨 직렬화 |
//!
//! ## 주의사항
//!
//! - **ID 할당**: 엔티티는 ID 없이 생성되며, 저장소가 최초 저장 시 할당
//! - **유일성**: 이메일 중복 검사는 서비스가 아니라 저장소 제약으로 처리

pub mod users;
