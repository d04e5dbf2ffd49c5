//! # Generic Entity Service
//!
//! 여덟 개 엔티티가 공유하는 CRUD / 조회 / 검색 계약의 단일 구현입니다.
//! 엔티티별 차이는 [`EntityMapper`] 와 문서의 [`EntityDescriptor`] 뿐입니다.
//!
//! ## 실패 의미
//!
//! - 부재는 에러가 아닙니다: `Option::None` 또는 빈 스트림
//! - 생성/수정 중 매핑 실패나 저장소 실패는 `BadRequest`
//! - 목록 조회 중 저장소 실패는 그대로 (`DatabaseError`) 전파됩니다.
//!
//! ## 사용 예제
//!
//! ```rust,ignore
//! let states = StateService::new(Arc::new(InMemoryDocumentStore::new()), StateMapper);
//!
//! let created = states.create(StateDto { name: Some("California".into()), ..Default::default() }).await?;
//! let in_us: Vec<StateDto> = states.find_by_country_id("US1").try_collect().await?;
//! ```

use std::sync::Arc;

use futures_util::stream::BoxStream;
use futures_util::{future, stream, StreamExt, TryStreamExt};
use log::{debug, info};
use validator::Validate;

use crate::core::errors::{AppError, AppResult};
use crate::domain::dto::*;
use crate::domain::entities::{Document, EntityDescriptor};
use crate::domain::mapper::EntityMapper;
use crate::repositories::{DocumentStore, DocumentStream};

/// 서비스가 반환하는 지연 DTO 스트림
pub type DtoStream<T> = BoxStream<'static, AppResult<T>>;

pub struct EntityService<M: EntityMapper> {
    store: Arc<dyn DocumentStore<M::Doc>>,
    mapper: M,
}

impl<M: EntityMapper> EntityService<M> {
    pub fn new(store: Arc<dyn DocumentStore<M::Doc>>, mapper: M) -> Self {
        Self { store, mapper }
    }

    pub fn descriptor(&self) -> EntityDescriptor {
        M::Doc::DESCRIPTOR
    }

    /// 저장하지 않고 DTO 의 검증 규칙과 문서 변환만 확인합니다.
    pub fn check(&self, dto: &M::Dto) -> AppResult<()> {
        dto.validate()?;
        self.mapper.to_document(dto.clone()).map(|_| ())
    }

    /// DTO 를 저장하고 저장된 결과를 반환합니다. ID 가 비어 있으면 저장소가 생성합니다.
    pub async fn create(&self, dto: M::Dto) -> AppResult<M::Dto> {
        let doc = self.mapper.to_document(dto)?;
        let saved = self.store.save(doc).await.map_err(AppError::into_bad_request)?;

        info!("✅ {} 생성: {}", M::Doc::DESCRIPTOR.name, saved.id().unwrap_or_default());
        Ok(self.mapper.to_dto(saved))
    }

    /// 모든 문서. 호출할 때마다 저장소를 다시 조회합니다.
    pub fn find_all(&self) -> DtoStream<M::Dto> {
        self.to_dto_stream(self.store.find_all())
    }

    pub async fn find_by_id(&self, id: &str) -> AppResult<Option<M::Dto>> {
        let found = self.store.find_by_id(id).await?;
        Ok(found.map(|doc| self.mapper.to_dto(doc)))
    }

    /// 외래 키 필드가 `value` 와 같은 문서
    ///
    /// 엔티티가 선언하지 않은 필드는 `BadRequest` 를 내보내는 스트림이 됩니다.
    pub fn find_by_reference(&self, field: &str, value: &str) -> DtoStream<M::Dto> {
        match M::Doc::DESCRIPTOR.reference(field) {
            Some(reference) => self.to_dto_stream(self.store.find_by_field(reference.field, value)),
            None => {
                let error = AppError::BadRequest(format!(
                    "{} has no reference field '{}'",
                    M::Doc::DESCRIPTOR.name,
                    field
                ));
                stream::once(future::ready(Err(error))).boxed()
            }
        }
    }

    /// `id` 에 문서가 있을 때만 `dto` 로 통째로 교체합니다.
    ///
    /// 기록되는 ID 는 `dto` 자신의 ID 이며, 비어 있으면 `id` 를 사용합니다.
    pub async fn update_by_id(&self, id: &str, dto: M::Dto) -> AppResult<Option<M::Dto>> {
        let existing = self.store.find_by_id(id).await.map_err(AppError::into_bad_request)?;
        if existing.is_none() {
            debug!("{} 수정 대상 없음: {}", M::Doc::DESCRIPTOR.name, id);
            return Ok(None);
        }

        let mut doc = self.mapper.to_document(dto)?;
        if doc.id().is_none() {
            doc.set_id(id.to_string());
        }

        let saved = self.store.save(doc).await.map_err(AppError::into_bad_request)?;
        info!("✏️ {} 수정: {}", M::Doc::DESCRIPTOR.name, id);
        Ok(Some(self.mapper.to_dto(saved)))
    }

    /// 문서를 삭제하고 삭제 직전 값을 반환합니다.
    pub async fn delete_by_id(&self, id: &str) -> AppResult<Option<M::Dto>> {
        let Some(existing) = self.store.find_by_id(id).await? else {
            debug!("{} 삭제 대상 없음: {}", M::Doc::DESCRIPTOR.name, id);
            return Ok(None);
        };

        self.store.delete(id).await?;
        info!("🗑️ {} 삭제: {}", M::Doc::DESCRIPTOR.name, id);
        Ok(Some(self.mapper.to_dto(existing)))
    }

    /// 컬렉션 전체를 비웁니다. 초기 데이터 적재 전에 사용합니다.
    pub async fn clear(&self) -> AppResult<u64> {
        let removed = self.store.delete_all().await?;
        debug!("{} 컬렉션 비움: {}건", M::Doc::DESCRIPTOR.collection, removed);
        Ok(removed)
    }

    /// 검색 필드에 `text` 가 (대소문자 무시) 포함된 문서, 검색 필드 오름차순
    ///
    /// `text` 의 정규식 메타문자는 그대로의 문자로 취급됩니다.
    pub fn fetch_by_name(&self, text: &str) -> DtoStream<M::Dto> {
        let pattern = regex::escape(text);
        self.to_dto_stream(self.store.find_matching(M::Doc::DESCRIPTOR.search_field, &pattern))
    }

    fn to_dto_stream(&self, docs: DocumentStream<M::Doc>) -> DtoStream<M::Dto> {
        let mapper = self.mapper.clone();
        docs.map_ok(move |doc| mapper.to_dto(doc)).boxed()
    }
}

pub type CountryService = EntityService<CountryMapper>;
pub type StateService = EntityService<StateMapper>;
pub type CityService = EntityService<CityMapper>;
pub type LocationService = EntityService<LocationMapper>;
pub type DepartmentService = EntityService<DepartmentMapper>;
pub type JobService = EntityService<JobMapper>;
pub type JobHistoryService = EntityService<JobHistoryMapper>;
pub type EmployeeService = EntityService<EmployeeMapper>;

impl StateService {
    pub fn find_by_country_id(&self, country_id: &str) -> DtoStream<StateDto> {
        self.find_by_reference("countryId", country_id)
    }
}

impl CityService {
    pub fn find_by_state_id(&self, state_id: &str) -> DtoStream<CityDto> {
        self.find_by_reference("stateId", state_id)
    }
}

impl LocationService {
    pub fn find_by_city_id(&self, city_id: &str) -> DtoStream<LocationDto> {
        self.find_by_reference("cityId", city_id)
    }
}

impl DepartmentService {
    pub fn find_by_location_id(&self, location_id: &str) -> DtoStream<DepartmentDto> {
        self.find_by_reference("locationId", location_id)
    }

    pub fn find_by_manager_id(&self, manager_id: &str) -> DtoStream<DepartmentDto> {
        self.find_by_reference("managerId", manager_id)
    }
}

impl JobHistoryService {
    pub fn find_by_job_id(&self, job_id: &str) -> DtoStream<JobHistoryDto> {
        self.find_by_reference("jobId", job_id)
    }

    pub fn find_by_department_id(&self, department_id: &str) -> DtoStream<JobHistoryDto> {
        self.find_by_reference("departmentId", department_id)
    }
}

impl EmployeeService {
    pub fn find_by_department_id(&self, department_id: &str) -> DtoStream<EmployeeDto> {
        self.find_by_reference("departmentId", department_id)
    }

    pub fn find_by_manager_id(&self, manager_id: &str) -> DtoStream<EmployeeDto> {
        self.find_by_reference("managerId", manager_id)
    }

    pub fn find_by_job_id(&self, job_id: &str) -> DtoStream<EmployeeDto> {
        self.find_by_reference("jobId", job_id)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::repositories::InMemoryDocumentStore;

    fn state_service() -> StateService {
        StateService::new(Arc::new(InMemoryDocumentStore::new()), StateMapper)
    }

    fn state(name: &str, country_id: &str) -> StateDto {
        StateDto {
            name: Some(name.to_string()),
            country_id: Some(country_id.to_string()),
            ..StateDto::default()
        }
    }

    #[tokio::test]
    async fn test_check_does_not_store() {
        let service = state_service();
        service.check(&state("Acre", "BR")).unwrap();

        let bad = StateDto { created_at: Some("yesterday".to_string()), ..state("Goias", "BR") };
        assert!(matches!(service.check(&bad), Err(AppError::BadRequest(_))));

        let jobs = JobService::new(Arc::new(InMemoryDocumentStore::new()), JobMapper);
        let negative = JobDto { title: Some("Intern".to_string()), min_salary: Some(-1.0), ..JobDto::default() };
        assert!(matches!(jobs.check(&negative), Err(AppError::BadRequest(_))));

        let stored: Vec<StateDto> = service.find_all().try_collect().await.unwrap();
        assert!(stored.is_empty());
    }

    #[tokio::test]
    async fn test_state_lifecycle() {
        let service = state_service();

        let created = service.create(state("California", "US1")).await.unwrap();
        let id = created.id.clone().expect("generated id");
        assert!(!id.is_empty());

        let in_us: Vec<StateDto> = service.find_by_country_id("US1").try_collect().await.unwrap();
        assert_eq!(in_us, vec![created.clone()]);

        let renamed = StateDto { name: Some("Calif.".to_string()), ..StateDto::default() };
        let updated = service.update_by_id(&id, renamed).await.unwrap().expect("updated");
        assert_eq!(updated.id.as_deref(), Some(id.as_str()));

        let found = service.find_by_id(&id).await.unwrap().expect("present");
        assert_eq!(found.name.as_deref(), Some("Calif."));

        let deleted = service.delete_by_id(&id).await.unwrap().expect("deleted");
        assert_eq!(deleted, found);
        assert_eq!(service.find_by_id(&id).await.unwrap(), None);
    }

    #[tokio::test]
    async fn test_create_then_find_returns_same_dto() {
        let service = state_service();
        let created = service.create(state("Nevada", "US1")).await.unwrap();

        let id = created.id.clone().unwrap();
        assert_eq!(service.find_by_id(&id).await.unwrap(), Some(created));
    }

    #[tokio::test]
    async fn test_absent_id_is_empty_not_error() {
        let service = state_service();
        service.create(state("Texas", "US1")).await.unwrap();

        assert_eq!(service.find_by_id("missing").await.unwrap(), None);
        assert_eq!(service.update_by_id("missing", state("X", "Y")).await.unwrap(), None);
        assert_eq!(service.delete_by_id("missing").await.unwrap(), None);

        let all: Vec<StateDto> = service.find_all().try_collect().await.unwrap();
        assert_eq!(all.len(), 1);
        assert_eq!(all[0].name.as_deref(), Some("Texas"));
    }

    #[tokio::test]
    async fn test_update_preserves_created_at() {
        let service = state_service();
        let created = service.create(state("Oregon", "US1")).await.unwrap();
        let id = created.id.clone().unwrap();

        let updated = service
            .update_by_id(&id, state("Oregon State", "US1"))
            .await
            .unwrap()
            .unwrap();
        assert_eq!(updated.created_at, created.created_at);
    }

    #[tokio::test]
    async fn test_fetch_by_name_sorted_and_case_insensitive() {
        let service = CityService::new(Arc::new(InMemoryDocumentStore::new()), CityMapper);
        for name in ["Sacramento", "San Jose", "Fresno", "san diego", "Santa Ana"] {
            service
                .create(CityDto { name: Some(name.to_string()), ..CityDto::default() })
                .await
                .unwrap();
        }

        let found: Vec<CityDto> = service.fetch_by_name("SAN").try_collect().await.unwrap();
        let names: Vec<String> = found.into_iter().filter_map(|c| c.name).collect();

        assert_eq!(names, vec!["San Jose", "Santa Ana", "san diego"]);
        assert!(names.iter().all(|n| n.to_lowercase().contains("san")));
    }

    #[tokio::test]
    async fn test_fetch_by_name_matches_literally() {
        let service = JobService::new(Arc::new(InMemoryDocumentStore::new()), JobMapper);
        service
            .create(JobDto { title: Some("C++ Developer".to_string()), ..JobDto::default() })
            .await
            .unwrap();
        service
            .create(JobDto { title: Some("CCC Developer".to_string()), ..JobDto::default() })
            .await
            .unwrap();

        let found: Vec<JobDto> = service.fetch_by_name("c++").try_collect().await.unwrap();
        assert_eq!(found.len(), 1);
        assert_eq!(found[0].title.as_deref(), Some("C++ Developer"));
    }

    #[tokio::test]
    async fn test_employee_search_uses_first_name() {
        let service = EmployeeService::new(Arc::new(InMemoryDocumentStore::new()), EmployeeMapper);
        service
            .create(EmployeeDto {
                first_name: Some("Ada".to_string()),
                last_name: Some("Lovelace".to_string()),
                ..EmployeeDto::default()
            })
            .await
            .unwrap();

        let by_first: Vec<EmployeeDto> = service.fetch_by_name("ada").try_collect().await.unwrap();
        let by_last: Vec<EmployeeDto> = service.fetch_by_name("love").try_collect().await.unwrap();
        assert_eq!(by_first.len(), 1);
        assert!(by_last.is_empty());
    }

    #[tokio::test]
    async fn test_find_by_undeclared_reference_is_bad_request() {
        let service = state_service();
        let result: AppResult<Vec<StateDto>> = service.find_by_reference("stateId", "x").try_collect().await;
        assert!(matches!(result, Err(AppError::BadRequest(_))));
    }

    #[tokio::test]
    async fn test_department_references() {
        let service = DepartmentService::new(Arc::new(InMemoryDocumentStore::new()), DepartmentMapper);
        service
            .create(DepartmentDto {
                name: Some("Research".to_string()),
                location_id: Some("L1".to_string()),
                manager_id: Some("E9".to_string()),
                ..DepartmentDto::default()
            })
            .await
            .unwrap();

        let by_location: Vec<DepartmentDto> = service.find_by_location_id("L1").try_collect().await.unwrap();
        let by_manager: Vec<DepartmentDto> = service.find_by_manager_id("E9").try_collect().await.unwrap();
        let none: Vec<DepartmentDto> = service.find_by_manager_id("E1").try_collect().await.unwrap();

        assert_eq!(by_location.len(), 1);
        assert_eq!(by_manager, by_location);
        assert!(none.is_empty());
    }

    #[tokio::test]
    async fn test_create_with_unparsable_timestamp_is_bad_request() {
        let service = JobHistoryService::new(Arc::new(InMemoryDocumentStore::new()), JobHistoryMapper);
        let dto = JobHistoryDto { start_date: Some("01/02/2020".to_string()), ..JobHistoryDto::default() };

        assert!(matches!(service.create(dto).await, Err(AppError::BadRequest(_))));
        let all: Vec<JobHistoryDto> = service.find_all().try_collect().await.unwrap();
        assert!(all.is_empty());
    }

    #[tokio::test]
    async fn test_failed_update_leaves_store_untouched() {
        let service = state_service();
        let created = service.create(state("Utah", "US1")).await.unwrap();
        let id = created.id.clone().unwrap();

        let bad = StateDto { created_at: Some("garbage".to_string()), ..state("Utah2", "US1") };
        assert!(service.update_by_id(&id, bad).await.is_err());
        assert_eq!(service.find_by_id(&id).await.unwrap(), Some(created));
    }
}
