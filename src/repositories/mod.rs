//! # Repository Layer
//!
//! 컬렉션 단위 문서 저장소 추상화입니다. 모든 엔티티 서비스는
//! [`DocumentStore`] trait 하나에만 의존하며, 두 가지 구현이 있습니다.
//!
//! - [`MongoDocumentStore`] - MongoDB 컬렉션 (운영 환경)
//! - [`InMemoryDocumentStore`] - 프로세스 메모리 (테스트, `STORE_BACKEND=memory`)
//!
//! ## 계약
//!
//! - 없는 키는 에러가 아니라 `None` / 빈 스트림입니다.
//! - `save` 는 ID 가 비어 있으면 새 ID 를 생성하고, 같은 ID 의 문서를 통째로 교체합니다.
//! - `save` 는 `updatedAt` 을 현재 시각으로, `createdAt` 은 기존 값 또는 현재 시각으로 채웁니다.
//! - 목록 조회는 지연 스트림이며, 폴링되기 전까지 저장소에 접근하지 않습니다.
//! - `find_matching` 의 패턴은 정규식이며 대소문자를 구분하지 않고, 결과는 해당 필드 오름차순입니다.

pub mod mongo_store;
pub mod memory_store;

pub use mongo_store::MongoDocumentStore;
pub use memory_store::InMemoryDocumentStore;

use async_trait::async_trait;
use futures_util::stream::BoxStream;

use crate::core::errors::AppResult;
use crate::domain::entities::Document;

/// 저장소가 반환하는 지연 문서 스트림
pub type DocumentStream<D> = BoxStream<'static, AppResult<D>>;

#[async_trait]
pub trait DocumentStore<D: Document>: Send + Sync {
    /// 문서를 삽입하거나 같은 ID 의 문서를 교체하고, 저장된 문서를 반환합니다.
    async fn save(&self, doc: D) -> AppResult<D>;

    async fn find_by_id(&self, id: &str) -> AppResult<Option<D>>;

    /// 저장 순서대로 모든 문서
    fn find_all(&self) -> DocumentStream<D>;

    /// `field == value` 인 문서
    fn find_by_field(&self, field: &str, value: &str) -> DocumentStream<D>;

    /// `field` 가 정규식 `pattern` 과 (대소문자 무시) 일치하는 문서, `field` 오름차순
    fn find_matching(&self, field: &str, pattern: &str) -> DocumentStream<D>;

    /// 문서를 삭제합니다. 삭제된 문서가 있었으면 `true`.
    async fn delete(&self, id: &str) -> AppResult<bool>;

    /// 컬렉션을 비웁니다. 삭제된 문서 수를 반환합니다.
    async fn delete_all(&self) -> AppResult<u64>;
}
