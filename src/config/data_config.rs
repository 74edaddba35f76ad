//! # 런타임 설정
//!
//! 환경 변수 기반의 설정 값들을 제공합니다. 모든 값은 기본값을 가지므로
//! `.env` 파일 없이도 개발 환경에서 바로 실행할 수 있습니다.
//!
//! | 변수 | 기본값 | 설명 |
//! |------|--------|------|
//! | `ENVIRONMENT` | `production` | 실행 환경 (`development`, `test`, `staging`, `production`) |
//! | `HOST` / `PORT` | `0.0.0.0` / `8080` | 바인딩 주소 |
//! | `STORAGE_BACKEND` | 환경별 (아래 참조) | `memory` 또는 `mongodb` |
//! | `MONGODB_URI` | `mongodb://localhost:27017` | MongoDB 연결 URI |
//! | `DATABASE_NAME` | `user_management_dev` | MongoDB 데이터베이스 이름 |
//! | `RATE_LIMIT_PER_SECOND` | `100` | 초당 허용 요청 수 |
//! | `RATE_LIMIT_BURST_SIZE` | `200` | 버스트 허용량 |

use std::env;

use log::warn;

#[derive(Debug, Clone, PartialEq)]
pub enum Environment {
    Development,
    Test,
    Staging,
    Production,
}

impl Environment {
    pub fn current() -> Self {
        Self::from_str(&env::var("ENVIRONMENT").unwrap_or_else(|_| "production".to_string()))
    }

    pub fn from_str(s: &str) -> Self {
        match s.to_lowercase().as_str() {
            "development" | "dev" => Environment::Development,
            "test" | "testing" => Environment::Test,
            "staging" | "stage" => Environment::Staging,
            _ => Environment::Production,
        }
    }
}

/// 사용자 저장소 구현 선택
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum StorageBackend {
    /// 프로세스 메모리 (재시작 시 데이터 유실)
    Memory,
    MongoDb,
}

pub struct StorageConfig;

impl StorageConfig {
    /// `STORAGE_BACKEND`가 없거나 알 수 없는 값이면 환경별 기본값을 사용합니다.
    pub fn backend() -> StorageBackend {
        Self::backend_for(
            env::var("STORAGE_BACKEND").ok().as_deref(),
            &Environment::current(),
        )
    }

    pub fn backend_for(raw: Option<&str>, env: &Environment) -> StorageBackend {
        match raw.map(|value| value.trim().to_lowercase()).as_deref() {
            Some("memory") | Some("in-memory") => StorageBackend::Memory,
            Some("mongodb") | Some("mongo") => StorageBackend::MongoDb,
            other => {
                if let Some(value) = other {
                    warn!("알 수 없는 STORAGE_BACKEND 값: {}. 환경 기본값 사용", value);
                }
                Self::default_backend_for_env(env)
            }
        }
    }

    pub fn default_backend_for_env(env: &Environment) -> StorageBackend {
        match env {
            Environment::Development | Environment::Test => StorageBackend::Memory,
            Environment::Staging | Environment::Production => StorageBackend::MongoDb,
        }
    }

    pub fn mongodb_uri() -> String {
        env::var("MONGODB_URI").unwrap_or_else(|_| "mongodb://localhost:27017".to_string())
    }

    pub fn database_name() -> String {
        env::var("DATABASE_NAME").unwrap_or_else(|_| "user_management_dev".to_string())
    }
}

pub struct ServerConfig;

impl ServerConfig {
    pub fn port() -> u16 {
        env::var("PORT")
            .unwrap_or_else(|_| "8080".to_string())
            .parse()
            .unwrap_or(8080)
    }

    pub fn host() -> String {
        env::var("HOST").unwrap_or_else(|_| "0.0.0.0".to_string())
    }

    pub fn bind_address() -> String {
        format!("{}:{}", Self::host(), Self::port())
    }
}

/// Rate Limiting 설정
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RateLimitConfig {
    pub per_second: u64,
    pub burst_size: u32,
}

impl RateLimitConfig {
    pub const DEFAULT_PER_SECOND: u64 = 100;
    pub const DEFAULT_BURST_SIZE: u32 = 200;

    /// 파싱에 실패한 값은 경고 로그를 남기고 기본값으로 대체합니다.
    pub fn from_env() -> Self {
        Self {
            per_second: parse_or_default("RATE_LIMIT_PER_SECOND", Self::DEFAULT_PER_SECOND),
            burst_size: parse_or_default("RATE_LIMIT_BURST_SIZE", Self::DEFAULT_BURST_SIZE),
        }
    }
}

fn parse_or_default<T>(key: &str, default: T) -> T
where
    T: std::str::FromStr + std::fmt::Display,
    T::Err: std::fmt::Display,
{
    match env::var(key) {
        Ok(raw) => raw.parse::<T>().unwrap_or_else(|e| {
            warn!("{} 파싱 실패: {}. 기본값 {} 사용", key, e, default);
            default
        }),
        Err(_) => default,
    }
}
