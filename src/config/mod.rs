//! # Configuration Module
//!
//! 백엔드 서비스의 설정 관리를 담당하는 모듈입니다.
//! 모든 설정은 환경 변수 기반이며, `main` 에서 `PROFILE` 에 맞는
//! `.env.dev` / `.env.prod` 파일을 먼저 로드합니다.
//!
//! ## 모듈 구성
//!
//! - [`data_config`] - 서버, 데이터베이스, Rate Limiting, 초기 데이터 적재 설정
//! - [`client_config`] - 피어 서비스 전송 클라이언트 (타임아웃, 재시도) 설정
//!
//! ## 사용 예제
//!
//! ```rust,ignore
//! use crate::config::{DatabaseConfig, ServerConfig, PeerClientConfig};
//!
//! let bind_address = ServerConfig::bind_address();
//! let backend = DatabaseConfig::backend();
//! let peer = PeerClientConfig::from_env();
//! ```
//!
//! ## 환경 변수 설정 가이드
//!
//! ```bash
//! # 서버 설정
//! export HOST="0.0.0.0"
//! export PORT="8080"
//! export WORKERS="4"
//!
//! # 저장소 설정
//! export STORE_BACKEND="mongodb"          # mongodb | memory
//! export MONGODB_URI="mongodb://localhost:27017"
//! export DATABASE_NAME="human_resources"
//!
//! # 초기 참조 데이터 (countries.json, states.json, cities.json)
//! export SEED_DATA_DIR="./static"
//! ```

pub mod data_config;
pub mod client_config;

pub use data_config::*;
pub use client_config::*;
