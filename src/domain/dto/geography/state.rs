use serde::{Deserialize, Serialize};
use validator::Validate;

use crate::core::errors::AppResult;
use crate::domain::entities::State;
use crate::domain::mapper::{format_timestamp, normalize_id, parse_timestamp, EntityMapper};

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize, Validate)]
#[serde(rename_all = "camelCase")]
pub struct StateDto {
    #[serde(default)]
    pub id: Option<String>,
    pub name: Option<String>,
    #[validate(length(max = 10, message = "약어는 10자 이하여야 합니다"))]
    pub acronym: Option<String>,
    pub country_id: Option<String>,
    #[serde(default)]
    pub created_at: Option<String>,
    #[serde(default)]
    pub updated_at: Option<String>,
}

#[derive(Debug, Clone, Copy, Default)]
pub struct StateMapper;

impl EntityMapper for StateMapper {
    type Dto = StateDto;
    type Doc = State;

    fn to_document(&self, dto: StateDto) -> AppResult<State> {
        let StateDto { id, name, acronym, country_id, created_at, updated_at } = dto;

        Ok(State {
            id: normalize_id(id),
            name,
            acronym,
            country_id,
            created_at: parse_timestamp("createdAt", created_at)?,
            updated_at: parse_timestamp("updatedAt", updated_at)?,
        })
    }

    fn to_dto(&self, doc: State) -> StateDto {
        let State { id, name, acronym, country_id, created_at, updated_at } = doc;

        StateDto {
            id,
            name,
            acronym,
            country_id,
            created_at: format_timestamp(created_at),
            updated_at: format_timestamp(updated_at),
        }
    }
}
