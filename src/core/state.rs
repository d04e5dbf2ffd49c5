//! # Application State
//!
//! `main` 에서 한 번 만들어 `web::Data<AppState>` 로 모든 워커가 공유하는
//! 서비스 묶음입니다. 각 서비스는 생성자로 저장소와 매퍼를 주입받습니다.
//!
//! ```rust,ignore
//! let state = AppState::build(&database, PeerClient::new(PeerClientConfig::from_env())?);
//! App::new().app_data(web::Data::new(state));
//! ```

use std::sync::Arc;

use crate::client::PeerClient;
use crate::config::StoreBackend;
use crate::db::Database;
use crate::domain::dto::*;
use crate::domain::entities::Document;
use crate::domain::mapper::EntityMapper;
use crate::repositories::{DocumentStore, InMemoryDocumentStore, MongoDocumentStore};
use crate::services::entity_service::*;

/// 문서 타입별 저장소를 만들어 주는 백엔드
pub trait StoreProvider {
    fn backend(&self) -> StoreBackend;

    fn store<D: Document>(&self) -> Arc<dyn DocumentStore<D>>;
}

impl StoreProvider for Database {
    fn backend(&self) -> StoreBackend {
        StoreBackend::MongoDb
    }

    fn store<D: Document>(&self) -> Arc<dyn DocumentStore<D>> {
        Arc::new(MongoDocumentStore::<D>::new(self))
    }
}

/// 호출할 때마다 빈 인메모리 저장소를 만듭니다.
#[derive(Debug, Clone, Copy, Default)]
pub struct InMemoryStores;

impl StoreProvider for InMemoryStores {
    fn backend(&self) -> StoreBackend {
        StoreBackend::Memory
    }

    fn store<D: Document>(&self) -> Arc<dyn DocumentStore<D>> {
        Arc::new(InMemoryDocumentStore::<D>::new())
    }
}

pub struct AppState {
    pub countries: CountryService,
    pub states: StateService,
    pub cities: CityService,
    pub locations: LocationService,
    pub departments: DepartmentService,
    pub jobs: JobService,
    pub job_histories: JobHistoryService,
    pub employees: EmployeeService,
    pub peer_client: Arc<PeerClient>,
    pub backend: StoreBackend,
}

impl AppState {
    pub fn build(stores: &impl StoreProvider, peer_client: PeerClient) -> Self {
        Self {
            countries: EntityService::new(stores.store(), CountryMapper),
            states: EntityService::new(stores.store(), StateMapper),
            cities: EntityService::new(stores.store(), CityMapper),
            locations: EntityService::new(stores.store(), LocationMapper),
            departments: EntityService::new(stores.store(), DepartmentMapper),
            jobs: EntityService::new(stores.store(), JobMapper),
            job_histories: EntityService::new(stores.store(), JobHistoryMapper),
            employees: EntityService::new(stores.store(), EmployeeMapper),
            peer_client: Arc::new(peer_client),
            backend: stores.backend(),
        }
    }
}

/// 매퍼 타입으로 해당 엔티티 서비스를 꺼냅니다. 제네릭 핸들러가 사용합니다.
pub trait HasService<M: EntityMapper> {
    fn service(&self) -> &EntityService<M>;
}

macro_rules! has_service {
    ($($mapper:ty => $field:ident),* $(,)?) => {
        $(
            impl HasService<$mapper> for AppState {
                fn service(&self) -> &EntityService<$mapper> {
                    &self.$field
                }
            }
        )*
    };
}

has_service! {
    CountryMapper => countries,
    StateMapper => states,
    CityMapper => cities,
    LocationMapper => locations,
    DepartmentMapper => departments,
    JobMapper => jobs,
    JobHistoryMapper => job_histories,
    EmployeeMapper => employees,
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::PeerClientConfig;

    #[tokio::test]
    async fn test_in_memory_state_shares_stores_per_service() {
        let state = AppState::build(&InMemoryStores, PeerClient::new(PeerClientConfig::default()).unwrap());
        assert_eq!(state.backend, StoreBackend::Memory);

        let created = state
            .countries
            .create(CountryDto { name: Some("Korea".to_string()), ..CountryDto::default() })
            .await
            .unwrap();

        let via_trait: &CountryService = state.service();
        let found = via_trait.find_by_id(created.id.as_deref().unwrap()).await.unwrap();
        assert_eq!(found, Some(created));
    }
}
