//! # Domain Entities Module
//!
//! MongoDB 컬렉션과 1:1 로 대응되는 인사(HR) 참조 데이터 문서들을 정의합니다.
//!
//! ## 구성
//!
//! ```text
//! entities/
//! ├── geography/      ← Country, State, City, Location
//! └── organization/   ← Department, Job, JobHistory, Employee
//! ```
//!
//! ## 문서 공통 규칙
//!
//! - `_id` 는 불투명한 문자열이며, 비어 있으면 저장소가 생성합니다.
//! - 외래 키(`countryId`, `managerId` 등)는 단순 문자열이며 참조 무결성을 검사하지 않습니다.
//! - `createdAt` / `updatedAt` 는 저장소가 저장 시점에 채웁니다.
//! - 필드 이름은 camelCase 로 저장됩니다.
//!
//! 각 문서 타입은 [`Document`] trait 을 구현하고, [`EntityDescriptor`] 로
//! 컬렉션 이름, 검색 필드, 외래 키 목록을 선언합니다.
//!
//! ```rust,ignore
//! use crate::domain::entities::{Document, State};
//!
//! assert_eq!(State::DESCRIPTOR.collection, "states");
//! assert!(State::DESCRIPTOR.reference("countryId").is_some());
//! ```

use mongodb::bson::DateTime;
use serde::de::DeserializeOwned;
use serde::Serialize;

/// 외래 키 선언
///
/// `field` 는 문서 필드 이름, `segment` 는 REST 경로에서 사용하는 세그먼트입니다.
/// (예: `countryId` → `/api/states/countries/{countryId}`)
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Reference {
    pub field: &'static str,
    pub segment: &'static str,
}

/// 엔티티 메타데이터
#[derive(Debug, Clone, Copy)]
pub struct EntityDescriptor {
    /// 로그에 사용하는 엔티티 이름
    pub name: &'static str,
    /// MongoDB 컬렉션 이름 (REST 경로 `/api/{collection}` 에도 사용)
    pub collection: &'static str,
    /// `fetch_by_name` 이 검색하고 정렬하는 필드
    pub search_field: &'static str,
    /// 외래 키 목록
    pub references: &'static [Reference],
}

impl EntityDescriptor {
    /// 선언된 외래 키를 필드 이름으로 찾습니다.
    pub fn reference(&self, field: &str) -> Option<&'static Reference> {
        self.references.iter().find(|r| r.field == field)
    }
}

/// 저장소에 저장되는 문서
///
/// 저장소 구현은 이 trait 만으로 식별자 생성과 감사 타임스탬프 관리를 수행합니다.
pub trait Document: Serialize + DeserializeOwned + Clone + Send + Sync + Unpin + 'static {
    const DESCRIPTOR: EntityDescriptor;

    fn id(&self) -> Option<&str>;

    fn set_id(&mut self, id: String);

    fn created_at(&self) -> Option<DateTime>;

    /// 감사 타임스탬프를 설정합니다.
    fn stamp(&mut self, created_at: DateTime, updated_at: DateTime);
}

/// `id`, `created_at`, `updated_at` 필드를 가진 문서 구조체에 [`Document`] 를 구현합니다.
macro_rules! impl_document {
    ($doc:ty, $descriptor:expr) => {
        impl $crate::domain::entities::Document for $doc {
            const DESCRIPTOR: $crate::domain::entities::EntityDescriptor = $descriptor;

            fn id(&self) -> Option<&str> {
                self.id.as_deref().filter(|id| !id.is_empty())
            }

            fn set_id(&mut self, id: String) {
                self.id = Some(id);
            }

            fn created_at(&self) -> Option<mongodb::bson::DateTime> {
                self.created_at
            }

            fn stamp(&mut self, created_at: mongodb::bson::DateTime, updated_at: mongodb::bson::DateTime) {
                self.created_at = Some(created_at);
                self.updated_at = Some(updated_at);
            }
        }
    };
}

pub mod geography;
pub mod organization;

pub use geography::*;
pub use organization::*;
