//! API 라우트 설정 모듈
//!
//! 엔티티마다 `/api/{collection}` 스코프 하나를 등록합니다. 스코프의 경로 구성은
//! 모든 엔티티가 같으며, 외래 키 조회 경로만 엔티티의 `EntityDescriptor` 에서 만들어집니다.
//!
//! ```text
//! /health
//! /api/countries
//! /api/states              (+ /countries/{countryId})
//! /api/cities              (+ /states/{stateId})
//! /api/locations           (+ /cities/{cityId})
//! /api/departments         (+ /locations/{locationId}, /managers/{managerId})
//! /api/jobs
//! /api/job-histories       (+ /jobs/{jobId}, /departments/{departmentId})
//! /api/employees           (+ /departments/{departmentId}, /managers/{managerId}, /jobs/{jobId}, /{id}/replicate)
//! ```
//!
//! # Examples
//!
//! ```rust,ignore
//! App::new()
//!     .app_data(web::Data::new(state))
//!     .configure(configure_all_routes);
//! ```

use actix_web::{get, web, HttpResponse, Scope};
use serde_json::json;

use crate::core::state::{AppState, HasService};
use crate::domain::dto::*;
use crate::domain::entities::{
    City, Country, Department, Document, Employee, Job, JobHistory, Location, State,
};
use crate::domain::mapper::EntityMapper;
use crate::handlers::{employees, entities};

pub fn configure_all_routes(cfg: &mut web::ServiceConfig) {
    cfg.service(health_check);

    cfg.service(entity_scope::<CountryMapper>());
    cfg.service(entity_scope::<StateMapper>());
    cfg.service(entity_scope::<CityMapper>());
    cfg.service(entity_scope::<LocationMapper>());
    cfg.service(entity_scope::<DepartmentMapper>());
    cfg.service(entity_scope::<JobMapper>());
    cfg.service(entity_scope::<JobHistoryMapper>());
    cfg.service(
        entity_scope::<EmployeeMapper>()
            .route("/{id}/replicate", web::post().to(employees::replicate_employee)),
    );
}

/// 엔티티 하나의 REST 스코프
///
/// 고정 경로(`/search`, `/stream`, 외래 키)를 `/{id}` 보다 먼저 등록합니다.
pub fn entity_scope<M>() -> Scope
where
    M: EntityMapper,
    AppState: HasService<M>,
{
    let descriptor = M::Doc::DESCRIPTOR;

    let mut scope = web::scope(&format!("/api/{}", descriptor.collection))
        .route("", web::post().to(entities::create::<M>))
        .route("", web::get().to(entities::find_all::<M>))
        .route("/search", web::get().to(entities::search::<M>))
        .route("/search/stream", web::get().to(entities::search_stream::<M>))
        .route("/stream", web::get().to(entities::stream::<M>));

    for reference in descriptor.references {
        let field = reference.field;
        scope = scope.route(
            &format!("/{}/{{fk_id}}", reference.segment),
            web::get().to(move |state: web::Data<AppState>, value: web::Path<String>| {
                entities::find_by_reference::<M>(state, value, field)
            }),
        );
    }

    scope
        .route("/{id}", web::get().to(entities::find_by_id::<M>))
        .route("/{id}", web::put().to(entities::update_by_id::<M>))
        .route("/{id}", web::delete().to(entities::delete_by_id::<M>))
}

#[get("/health")]
async fn health_check(state: web::Data<AppState>) -> HttpResponse {
    HttpResponse::Ok().json(json!({
        "status": "healthy",
        "service": "human_resources_backend",
        "version": env!("CARGO_PKG_VERSION"),
        "timestamp": chrono::Utc::now().to_rfc3339(),
        "features": {
            "store": state.backend.as_str(),
            "collections": [
                Country::DESCRIPTOR.collection,
                State::DESCRIPTOR.collection,
                City::DESCRIPTOR.collection,
                Location::DESCRIPTOR.collection,
                Department::DESCRIPTOR.collection,
                Job::DESCRIPTOR.collection,
                JobHistory::DESCRIPTOR.collection,
                Employee::DESCRIPTOR.collection,
            ]
        }
    }))
}
