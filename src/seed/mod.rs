//! # Reference Data Seeding
//!
//! `SEED_DATA_DIR` 이 설정되면 시작 시 국가, 주, 도시 컬렉션을 비우고
//! 해당 디렉터리의 JSON 배열 파일로 다시 채웁니다.
//!
//! | 파일 | 컬렉션 |
//! |------|--------|
//! | `countries-data.json` | `countries` |
//! | `states-data.json` | `states` |
//! | `cities-data.json` | `cities` |
//!
//! 파일이 없으면 경고만 남기고 건너뜁니다. 형식이 잘못된 파일은 시작을 중단시킵니다.

use std::io::ErrorKind;
use std::path::Path;

use log::{info, warn};

use crate::core::errors::{AppError, AppResult, ErrorContext};
use crate::core::state::AppState;
use crate::domain::mapper::EntityMapper;
use crate::services::entity_service::EntityService;

pub const COUNTRIES_FILE: &str = "countries-data.json";
pub const STATES_FILE: &str = "states-data.json";
pub const CITIES_FILE: &str = "cities-data.json";

/// 컬렉션별 적재 건수. 파일이 없어 건너뛴 경우 `None`.
#[derive(Debug, Default, PartialEq)]
pub struct SeedReport {
    pub countries: Option<usize>,
    pub states: Option<usize>,
    pub cities: Option<usize>,
}

pub async fn seed_reference_data(state: &AppState, dir: &Path) -> AppResult<SeedReport> {
    info!("🌱 초기 참조 데이터 적재: {}", dir.display());

    let report = SeedReport {
        countries: seed_file(&state.countries, dir, COUNTRIES_FILE).await?,
        states: seed_file(&state.states, dir, STATES_FILE).await?,
        cities: seed_file(&state.cities, dir, CITIES_FILE).await?,
    };

    info!("✅ 초기 참조 데이터 적재 완료: {:?}", report);
    Ok(report)
}

async fn seed_file<M: EntityMapper>(
    service: &EntityService<M>,
    dir: &Path,
    file_name: &str,
) -> AppResult<Option<usize>> {
    let path = dir.join(file_name);
    let json = match tokio::fs::read_to_string(&path).await {
        Err(e) if e.kind() == ErrorKind::NotFound => {
            warn!("⚠️ 초기 데이터 파일 없음, 건너뜀: {}", path.display());
            return Ok(None);
        }
        read => read.with_context(|| format!("{} 읽기 실패", path.display()))?,
    };
    let count = seed_collection(service, &json).await?;

    info!("📥 {} → {}건", file_name, count);
    Ok(Some(count))
}

/// JSON 배열을 파싱하여 컬렉션을 비운 뒤 모두 저장합니다.
///
/// 모든 항목의 파싱, 검증, 문서 변환이 끝난 뒤에만 컬렉션을 비웁니다.
/// 하나라도 실패하면 컬렉션은 건드리지 않습니다.
pub async fn seed_collection<M: EntityMapper>(service: &EntityService<M>, json: &str) -> AppResult<usize> {
    let collection = service.descriptor().collection;
    let items: Vec<M::Dto> = serde_json::from_str(json)
        .map_err(|e| AppError::BadRequest(format!("{} 초기 데이터 형식 오류: {}", collection, e)))?;

    for (index, item) in items.iter().enumerate() {
        service
            .check(item)
            .map_err(|e| AppError::BadRequest(format!("{} 초기 데이터 {}번 항목 오류: {}", collection, index, e)))?;
    }

    service.clear().await?;

    let count = items.len();
    for item in items {
        service.create(item).await?;
    }

    Ok(count)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::client::PeerClient;
    use crate::config::PeerClientConfig;
    use crate::core::state::InMemoryStores;
    use crate::domain::dto::{CountryDto, JobDto, StateDto};
    use futures_util::TryStreamExt;

    fn state() -> AppState {
        AppState::build(&InMemoryStores, PeerClient::new(PeerClientConfig::default()).unwrap())
    }

    #[tokio::test]
    async fn test_seed_collection_replaces_existing_documents() {
        let state = state();
        state
            .countries
            .create(CountryDto { name: Some("Atlantis".to_string()), ..CountryDto::default() })
            .await
            .unwrap();

        let count = seed_collection(&state.countries, r#"[{"id":"BR","name":"Brazil"},{"name":"Chile"}]"#)
            .await
            .unwrap();
        assert_eq!(count, 2);

        let all: Vec<CountryDto> = state.countries.find_all().try_collect().await.unwrap();
        let names: Vec<_> = all.iter().filter_map(|c| c.name.as_deref()).collect();
        assert_eq!(names, vec!["Brazil", "Chile"]);
        assert_eq!(all[0].id.as_deref(), Some("BR"));
    }

    #[tokio::test]
    async fn test_malformed_seed_leaves_collection_untouched() {
        let state = state();
        state
            .states
            .create(StateDto { name: Some("Bahia".to_string()), ..StateDto::default() })
            .await
            .unwrap();

        let result = seed_collection(&state.states, r#"{"name":"not an array"}"#).await;
        assert!(matches!(result, Err(AppError::BadRequest(_))));

        let all: Vec<StateDto> = state.states.find_all().try_collect().await.unwrap();
        assert_eq!(all.len(), 1);
    }

    #[tokio::test]
    async fn test_bad_item_leaves_collection_untouched() {
        let state = state();
        state
            .states
            .create(StateDto { name: Some("Bahia".to_string()), ..StateDto::default() })
            .await
            .unwrap();

        let result = seed_collection(
            &state.states,
            r#"[{"name":"Acre"},{"name":"Goias","createdAt":"yesterday"}]"#,
        )
        .await;
        match result {
            Err(AppError::BadRequest(msg)) => assert!(msg.contains("1번")),
            other => panic!("Expected BadRequest, got {:?}", other),
        }

        let all: Vec<StateDto> = state.states.find_all().try_collect().await.unwrap();
        let names: Vec<_> = all.iter().filter_map(|s| s.name.as_deref()).collect();
        assert_eq!(names, vec!["Bahia"]);
    }

    #[tokio::test]
    async fn test_invalid_item_is_rejected_before_clearing() {
        let state = state();
        state
            .jobs
            .create(JobDto { title: Some("Engineer".to_string()), ..JobDto::default() })
            .await
            .unwrap();

        let result = seed_collection(&state.jobs, r#"[{"title":"Intern","minSalary":5,"maxSalary":1}]"#).await;
        assert!(matches!(result, Err(AppError::BadRequest(_))));

        let all: Vec<JobDto> = state.jobs.find_all().try_collect().await.unwrap();
        assert_eq!(all.len(), 1);
        assert_eq!(all[0].title.as_deref(), Some("Engineer"));
    }

    #[tokio::test]
    async fn test_missing_files_are_skipped() {
        let state = state();
        let report = seed_reference_data(&state, Path::new("./does-not-exist")).await.unwrap();
        assert_eq!(report, SeedReport::default());
    }

    #[tokio::test]
    async fn test_bundled_reference_data_loads() {
        let state = state();
        let dir = Path::new(env!("CARGO_MANIFEST_DIR")).join("static");

        let report = seed_reference_data(&state, &dir).await.unwrap();
        assert!(report.countries.unwrap() > 0);
        assert!(report.states.unwrap() > 0);
        assert!(report.cities.unwrap() > 0);

        let in_brazil: Vec<StateDto> = state.states.find_by_country_id("BR").try_collect().await.unwrap();
        assert!(!in_brazil.is_empty());
    }
}
