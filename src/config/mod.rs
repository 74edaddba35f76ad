//! # Configuration Module
//!
//! 환경 변수 기반 런타임 설정을 제공합니다. `main`에서 `PROFILE`에 맞는
//! `.env` 파일을 먼저 로드한 뒤 이 모듈의 설정 함수들을 호출합니다.
//!
//! ```rust,ignore
//! use crate::config::{ServerConfig, StorageBackend, StorageConfig};
//!
//! match StorageConfig::backend() {
//!     StorageBackend::Memory => { /* 인메모리 저장소 */ }
//!     StorageBackend::MongoDb => { /* MongoDB 저장소 */ }
//! }
//! let address = ServerConfig::bind_address();
//! ```

pub mod data_config;

pub use data_config::*;
