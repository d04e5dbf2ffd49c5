//! # Service Layer
//!
//! - [`entity_service`] - 엔티티 공통 CRUD / 조회 / 검색 계약
//! - [`pseudo_stream`] - 조회 결과를 주기적으로 재방출하는 투영

pub mod entity_service;
pub mod pseudo_stream;
