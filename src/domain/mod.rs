//! # Domain Layer
//!
//! ```text
//! domain/
//! ├── entities/   ← MongoDB 문서 (저장 표현)
//! ├── dto/        ← 요청/응답 DTO (와이어 표현) 와 엔티티별 매퍼
//! └── mapper.rs   ← EntityMapper trait 과 변환 헬퍼
//! ```

pub mod entities;
pub mod dto;
pub mod mapper;

pub use mapper::EntityMapper;
