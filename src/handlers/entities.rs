//! # Generic Entity Handlers
//!
//! 매퍼 타입 `M` 으로 인스턴스화되는 핸들러들입니다. `AppState: HasService<M>` 로
//! 해당 엔티티 서비스를 찾고, 결과를 HTTP 응답으로 바꿉니다.
//!
//! | 메서드 | 경로 | 서비스 호출 | 성공 | 없음 |
//! |--------|------|-------------|------|------|
//! | `POST` | `` | `create` | 201 | - |
//! | `GET` | `` | `find_all` | 200 | - |
//! | `GET` | `/search?name=` | `fetch_by_name` | 200 | - |
//! | `GET` | `/search/stream?name=` | `fetch_by_name` (SSE) | 200 | - |
//! | `GET` | `/stream` | `find_all` (SSE) | 200 | - |
//! | `GET` | `/{segment}/{fk_id}` | `find_by_reference` | 200 | 빈 배열 |
//! | `GET` | `/{id}` | `find_by_id` | 200 | 404 |
//! | `PUT` | `/{id}` | `update_by_id` | 200 | 404 |
//! | `DELETE` | `/{id}` | `delete_by_id` | 200 | 404 |

use actix_web::http::header;
use actix_web::web::{self, Bytes};
use actix_web::HttpResponse;
use futures_util::{StreamExt, TryStreamExt};
use serde::{Deserialize, Serialize};
use validator::Validate;

use crate::core::errors::AppError;
use crate::core::state::{AppState, HasService};
use crate::domain::mapper::EntityMapper;
use crate::services::entity_service::{DtoStream, EntityService};
use crate::services::pseudo_stream::{repeat_every, REPEAT_PERIOD};

#[derive(Debug, Deserialize)]
pub struct SearchQuery {
    #[serde(default)]
    pub name: String,
}

fn service_of<M>(state: &AppState) -> &EntityService<M>
where
    M: EntityMapper,
    AppState: HasService<M>,
{
    <AppState as HasService<M>>::service(state)
}

pub async fn create<M>(
    state: web::Data<AppState>,
    payload: web::Json<M::Dto>,
) -> Result<HttpResponse, AppError>
where
    M: EntityMapper,
    AppState: HasService<M>,
{
    let dto = payload.into_inner();
    dto.validate()?;

    let created = service_of::<M>(&state).create(dto).await?;
    Ok(HttpResponse::Created().json(created))
}

pub async fn find_all<M>(state: web::Data<AppState>) -> Result<HttpResponse, AppError>
where
    M: EntityMapper,
    AppState: HasService<M>,
{
    let all: Vec<M::Dto> = service_of::<M>(&state).find_all().try_collect().await?;
    Ok(HttpResponse::Ok().json(all))
}

pub async fn find_by_id<M>(
    state: web::Data<AppState>,
    id: web::Path<String>,
) -> Result<HttpResponse, AppError>
where
    M: EntityMapper,
    AppState: HasService<M>,
{
    let id = id.into_inner();
    let dto = service_of::<M>(&state)
        .find_by_id(&id)
        .await?
        .ok_or_else(|| AppError::not_found(&id))?;

    Ok(HttpResponse::Ok().json(dto))
}

/// 외래 키 조회. `field` 는 라우트 등록 시 고정됩니다.
pub async fn find_by_reference<M>(
    state: web::Data<AppState>,
    value: web::Path<String>,
    field: &'static str,
) -> Result<HttpResponse, AppError>
where
    M: EntityMapper,
    AppState: HasService<M>,
{
    let found: Vec<M::Dto> = service_of::<M>(&state)
        .find_by_reference(field, &value)
        .try_collect()
        .await?;

    Ok(HttpResponse::Ok().json(found))
}

pub async fn update_by_id<M>(
    state: web::Data<AppState>,
    id: web::Path<String>,
    payload: web::Json<M::Dto>,
) -> Result<HttpResponse, AppError>
where
    M: EntityMapper,
    AppState: HasService<M>,
{
    let id = id.into_inner();
    let dto = payload.into_inner();
    dto.validate()?;

    let updated = service_of::<M>(&state)
        .update_by_id(&id, dto)
        .await?
        .ok_or_else(|| AppError::not_found(&id))?;

    Ok(HttpResponse::Ok().json(updated))
}

pub async fn delete_by_id<M>(
    state: web::Data<AppState>,
    id: web::Path<String>,
) -> Result<HttpResponse, AppError>
where
    M: EntityMapper,
    AppState: HasService<M>,
{
    let id = id.into_inner();
    let deleted = service_of::<M>(&state)
        .delete_by_id(&id)
        .await?
        .ok_or_else(|| AppError::not_found(&id))?;

    Ok(HttpResponse::Ok().json(deleted))
}

pub async fn search<M>(
    state: web::Data<AppState>,
    query: web::Query<SearchQuery>,
) -> Result<HttpResponse, AppError>
where
    M: EntityMapper,
    AppState: HasService<M>,
{
    let found: Vec<M::Dto> = service_of::<M>(&state)
        .fetch_by_name(&query.name)
        .try_collect()
        .await?;

    Ok(HttpResponse::Ok().json(found))
}

pub async fn search_stream<M>(
    state: web::Data<AppState>,
    query: web::Query<SearchQuery>,
) -> HttpResponse
where
    M: EntityMapper,
    AppState: HasService<M>,
{
    event_stream(service_of::<M>(&state).fetch_by_name(&query.name))
}

pub async fn stream<M>(state: web::Data<AppState>) -> HttpResponse
where
    M: EntityMapper,
    AppState: HasService<M>,
{
    event_stream(service_of::<M>(&state).find_all())
}

/// 조회 결과를 2초마다 재방출하는 `text/event-stream` 응답
///
/// 항목마다 `data: <json>` 이벤트 하나, 원본 에러는 `event: error` 로 한 번 전달됩니다.
/// 클라이언트 연결이 끊기면 스트림과 타이머가 함께 정리됩니다.
fn event_stream<T>(items: DtoStream<T>) -> HttpResponse
where
    T: Serialize + Clone + Send + 'static,
{
    let events = repeat_every(items, REPEAT_PERIOD).map(|item| {
        let frame = match item {
            Ok(dto) => match serde_json::to_string(&dto) {
                Ok(json) => format!("data: {}\n\n", json),
                Err(e) => error_frame(&e.to_string()),
            },
            Err(e) => error_frame(&e.to_string()),
        };
        Ok::<_, AppError>(Bytes::from(frame))
    });

    HttpResponse::Ok()
        .content_type("text/event-stream")
        .insert_header((header::CACHE_CONTROL, "no-cache"))
        .streaming(events)
}

fn error_frame(message: &str) -> String {
    format!("event: error\ndata: {}\n\n", serde_json::json!({ "error": message }))
}
