//! # DTO ⇄ 문서 매핑
//!
//! [`EntityMapper`] 는 와이어 표현(DTO)과 저장 표현(문서) 사이의 순수 변환입니다.
//! 비즈니스 로직은 없으며, 유효한 DTO 에 대해 손실 없이 양방향으로 동작합니다.
//!
//! - 타임스탬프: DTO 에서는 RFC 3339 문자열, 문서에서는 BSON `DateTime` (밀리초 정밀도)
//! - 문서가 정확히 표현할 수 있는 형태만 받습니다: UTC `Z` 표기, 소수 초는 없거나 정확히 3자리.
//!   예) `2024-01-02T03:04:05Z`, `2024-01-02T03:04:05.123Z`
//! - 파싱할 수 없거나 위 형태가 아닌 타임스탬프(오프셋, 밀리초 미만 정밀도 등)는 `BadRequest` 입니다.
//! - 빈 문자열 ID 는 "ID 없음" 으로 정규화되어 저장소가 새 ID 를 생성합니다.

use chrono::{SecondsFormat, TimeZone, Utc};
use mongodb::bson::DateTime;
use serde::de::DeserializeOwned;
use serde::Serialize;
use validator::Validate;

use crate::core::errors::{AppError, AppResult};
use crate::domain::entities::Document;
use crate::utils::string_utils::clean_optional_string;

/// 엔티티별 DTO ⇄ 문서 변환기
pub trait EntityMapper: Clone + Send + Sync + 'static {
    type Dto: Serialize + DeserializeOwned + Validate + Clone + Send + Sync + Unpin + 'static;
    type Doc: Document;

    /// DTO 를 문서로 변환합니다. 타임스탬프 파싱 실패 시 `BadRequest`.
    fn to_document(&self, dto: Self::Dto) -> AppResult<Self::Doc>;

    fn to_dto(&self, doc: Self::Doc) -> Self::Dto;
}

pub fn normalize_id(id: Option<String>) -> Option<String> {
    clean_optional_string(id)
}

/// RFC 3339 문자열을 BSON `DateTime` 으로 변환합니다.
///
/// `None` 이나 공백 문자열은 `None` 입니다. [`format_timestamp`] 가 같은 문자열을
/// 돌려주지 못하는 입력은 거부됩니다.
pub fn parse_timestamp(field: &str, value: Option<String>) -> AppResult<Option<DateTime>> {
    let Some(raw) = clean_optional_string(value) else {
        return Ok(None);
    };
    let invalid = |reason: String| AppError::BadRequest(format!("Invalid {} '{}': {}", field, raw, reason));

    let parsed = chrono::DateTime::parse_from_rfc3339(&raw).map_err(|e| invalid(e.to_string()))?;
    if parsed.timestamp_subsec_nanos() % 1_000_000 != 0 {
        return Err(invalid("sub-millisecond precision is not supported".to_string()));
    }

    let millis = parsed.timestamp_millis();
    if render_millis(millis).as_deref() != Some(raw.as_str()) {
        return Err(invalid(
            "expected UTC 'Z' form with whole seconds or 3 fractional digits".to_string(),
        ));
    }

    Ok(Some(DateTime::from_millis(millis)))
}

pub fn format_timestamp(value: Option<DateTime>) -> Option<String> {
    value.and_then(|dt| render_millis(dt.timestamp_millis()))
}

fn render_millis(millis: i64) -> Option<String> {
    Utc.timestamp_millis_opt(millis)
        .single()
        .map(|dt| dt.to_rfc3339_opts(SecondsFormat::AutoSi, true))
}
