//! MongoDB 문서 저장소

use async_trait::async_trait;
use futures_util::{stream, StreamExt, TryStreamExt};
use log::debug;
use mongodb::bson::{self, doc, oid::ObjectId, DateTime};
use mongodb::Collection;

use crate::core::errors::{AppError, AppResult};
use crate::db::Database;
use crate::domain::entities::Document;
use crate::repositories::{DocumentStore, DocumentStream};

/// 문서 타입 `D` 의 컬렉션 (`D::DESCRIPTOR.collection`) 에 대한 저장소
pub struct MongoDocumentStore<D: Document> {
    collection: Collection<D>,
}

impl<D: Document> MongoDocumentStore<D> {
    pub fn new(database: &Database) -> Self {
        Self {
            collection: database.collection::<D>(),
        }
    }

    /// 필터와 정렬로 조회하는 지연 스트림을 만듭니다.
    ///
    /// 커서는 스트림이 처음 폴링될 때 열리고, 스트림을 drop 하면 함께 닫힙니다.
    fn query(&self, filter: bson::Document, sort: Option<bson::Document>) -> DocumentStream<D> {
        let collection = self.collection.clone();

        stream::once(async move {
            let mut find = collection.find(filter);
            if let Some(sort) = sort {
                find = find.sort(sort);
            }
            find.await.map_err(AppError::from)
        })
        .map_ok(|cursor| cursor.map_err(AppError::from))
        .try_flatten()
        .boxed()
    }
}

#[async_trait]
impl<D: Document> DocumentStore<D> for MongoDocumentStore<D> {
    async fn save(&self, mut doc: D) -> AppResult<D> {
        let id = match doc.id() {
            Some(id) => id.to_string(),
            None => {
                let id = ObjectId::new().to_hex();
                doc.set_id(id.clone());
                id
            }
        };

        let now = DateTime::now();
        let created_at = match doc.created_at() {
            Some(created_at) => created_at,
            None => self
                .collection
                .find_one(doc! { "_id": id.as_str() })
                .await?
                .and_then(|existing| existing.created_at())
                .unwrap_or(now),
        };
        doc.stamp(created_at, now);

        self.collection
            .replace_one(doc! { "_id": id.as_str() }, &doc)
            .upsert(true)
            .await?;

        debug!("💾 {} 저장: {}", D::DESCRIPTOR.collection, id);
        Ok(doc)
    }

    async fn find_by_id(&self, id: &str) -> AppResult<Option<D>> {
        Ok(self.collection.find_one(doc! { "_id": id }).await?)
    }

    fn find_all(&self) -> DocumentStream<D> {
        self.query(doc! {}, None)
    }

    fn find_by_field(&self, field: &str, value: &str) -> DocumentStream<D> {
        let mut filter = bson::Document::new();
        filter.insert(field, value);
        self.query(filter, None)
    }

    fn find_matching(&self, field: &str, pattern: &str) -> DocumentStream<D> {
        let mut filter = bson::Document::new();
        filter.insert(field, doc! { "$regex": pattern, "$options": "i" });

        let mut sort = bson::Document::new();
        sort.insert(field, 1);

        self.query(filter, Some(sort))
    }

    async fn delete(&self, id: &str) -> AppResult<bool> {
        let result = self.collection.delete_one(doc! { "_id": id }).await?;
        Ok(result.deleted_count > 0)
    }

    async fn delete_all(&self) -> AppResult<u64> {
        let result = self.collection.delete_many(doc! {}).await?;
        Ok(result.deleted_count)
    }
}
