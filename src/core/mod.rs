//! # Core Module
//!
//! - [`errors`] - 통합 에러 타입과 HTTP 응답 매핑
//! - [`state`] - 서비스 묶음(`AppState`)과 저장소 백엔드 선택

pub mod errors;
pub mod state;

pub use errors::*;
pub use state::*;
