//! # HTTP Handlers
//!
//! - [`entities`] - 여덟 개 엔티티가 공유하는 제네릭 CRUD / 검색 / 스트림 핸들러
//! - [`employees`] - 직원 전용 엔드포인트 (피어 서비스 복제)

pub mod entities;
pub mod employees;
