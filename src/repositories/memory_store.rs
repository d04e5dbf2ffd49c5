//! 인메모리 문서 저장소
//!
//! MongoDB 없이 같은 계약을 제공합니다. 필드 값 비교와 정렬은 문서를 BSON 으로
//! 직렬화한 결과를 기준으로 하므로, 필드 이름은 MongoDB 에 저장되는 이름과 같습니다.

use std::sync::{Arc, RwLock};

use async_trait::async_trait;
use futures_util::{stream, StreamExt, TryStreamExt};
use mongodb::bson::{self, oid::ObjectId, Bson, DateTime};
use regex::RegexBuilder;

use crate::core::errors::{AppError, AppResult};
use crate::domain::entities::Document;
use crate::repositories::{DocumentStore, DocumentStream};

/// 삽입 순서를 보존하는 문서 목록
pub struct InMemoryDocumentStore<D: Document> {
    documents: Arc<RwLock<Vec<D>>>,
}

impl<D: Document> Default for InMemoryDocumentStore<D> {
    fn default() -> Self {
        Self::new()
    }
}

impl<D: Document> InMemoryDocumentStore<D> {
    pub fn new() -> Self {
        Self {
            documents: Arc::new(RwLock::new(Vec::new())),
        }
    }

    /// 스트림이 폴링될 때 스냅샷을 떠서 `select` 를 적용합니다.
    fn query<F>(&self, select: F) -> DocumentStream<D>
    where
        F: FnOnce(Vec<D>) -> AppResult<Vec<D>> + Send + 'static,
    {
        let documents = Arc::clone(&self.documents);

        stream::once(async move { snapshot(&documents).and_then(select) })
            .map_ok(|docs| stream::iter(docs.into_iter().map(Ok)))
            .try_flatten()
            .boxed()
    }
}

fn snapshot<D: Clone>(documents: &RwLock<Vec<D>>) -> AppResult<Vec<D>> {
    documents
        .read()
        .map(|docs| docs.clone())
        .map_err(|_| AppError::InternalError("in-memory store lock poisoned".to_string()))
}

/// 저장 시 사용되는 이름으로 필드의 문자열 값을 읽습니다.
fn field_value<D: Document>(doc: &D, field: &str) -> Option<String> {
    match bson::to_document(doc).ok()?.get(field)? {
        Bson::String(value) => Some(value.clone()),
        Bson::Null => None,
        other => Some(other.to_string()),
    }
}

#[async_trait]
impl<D: Document> DocumentStore<D> for InMemoryDocumentStore<D> {
    async fn save(&self, mut doc: D) -> AppResult<D> {
        let id = match doc.id() {
            Some(id) => id.to_string(),
            None => {
                let id = ObjectId::new().to_hex();
                doc.set_id(id.clone());
                id
            }
        };

        let mut documents = self
            .documents
            .write()
            .map_err(|_| AppError::InternalError("in-memory store lock poisoned".to_string()))?;

        let now = DateTime::now();
        let position = documents.iter().position(|existing| existing.id() == Some(id.as_str()));
        let created_at = doc
            .created_at()
            .or_else(|| position.and_then(|i| documents[i].created_at()))
            .unwrap_or(now);
        doc.stamp(created_at, now);

        match position {
            Some(i) => documents[i] = doc.clone(),
            None => documents.push(doc.clone()),
        }

        Ok(doc)
    }

    async fn find_by_id(&self, id: &str) -> AppResult<Option<D>> {
        Ok(snapshot(&self.documents)?
            .into_iter()
            .find(|doc| doc.id() == Some(id)))
    }

    fn find_all(&self) -> DocumentStream<D> {
        self.query(Ok)
    }

    fn find_by_field(&self, field: &str, value: &str) -> DocumentStream<D> {
        let field = field.to_string();
        let value = value.to_string();

        self.query(move |docs| {
            Ok(docs
                .into_iter()
                .filter(|doc| field_value(doc, &field).as_deref() == Some(value.as_str()))
                .collect())
        })
    }

    fn find_matching(&self, field: &str, pattern: &str) -> DocumentStream<D> {
        let field = field.to_string();
        let regex = RegexBuilder::new(pattern).case_insensitive(true).build();

        self.query(move |docs| {
            let regex = regex.map_err(|e| AppError::BadRequest(e.to_string()))?;

            let mut matched: Vec<(String, D)> = docs
                .into_iter()
                .filter_map(|doc| {
                    let value = field_value(&doc, &field)?;
                    regex.is_match(&value).then_some((value, doc))
                })
                .collect();
            matched.sort_by(|a, b| a.0.cmp(&b.0));

            Ok(matched.into_iter().map(|(_, doc)| doc).collect())
        })
    }

    async fn delete(&self, id: &str) -> AppResult<bool> {
        let mut documents = self
            .documents
            .write()
            .map_err(|_| AppError::InternalError("in-memory store lock poisoned".to_string()))?;

        let before = documents.len();
        documents.retain(|doc| doc.id() != Some(id));
        Ok(documents.len() < before)
    }

    async fn delete_all(&self) -> AppResult<u64> {
        let mut documents = self
            .documents
            .write()
            .map_err(|_| AppError::InternalError("in-memory store lock poisoned".to_string()))?;

        let removed = documents.len() as u64;
        documents.clear();
        Ok(removed)
    }
}
