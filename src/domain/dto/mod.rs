//! # Data Transfer Objects
//!
//! REST 경계에서 주고받는 JSON 표현입니다. 필드 이름은 camelCase 이며,
//! 요청 본문은 `validator` 로 검증된 후 서비스로 전달됩니다.
//!
//! 각 DTO 파일에는 해당 엔티티의 [`EntityMapper`](crate::domain::mapper::EntityMapper)
//! 구현이 함께 있습니다.

pub mod geography;
pub mod organization;

pub use geography::*;
pub use organization::*;
