use serde::{Deserialize, Serialize};
use validator::Validate;

use crate::core::errors::AppResult;
use crate::domain::entities::Country;
use crate::domain::mapper::{format_timestamp, normalize_id, parse_timestamp, EntityMapper};

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize, Validate)]
#[serde(rename_all = "camelCase")]
pub struct CountryDto {
    #[serde(default)]
    pub id: Option<String>,
    #[validate(length(max = 100, message = "국가 이름은 100자 이하여야 합니다"))]
    pub name: Option<String>,
    #[serde(default)]
    pub created_at: Option<String>,
    #[serde(default)]
    pub updated_at: Option<String>,
}

#[derive(Debug, Clone, Copy, Default)]
pub struct CountryMapper;

impl EntityMapper for CountryMapper {
    type Dto = CountryDto;
    type Doc = Country;

    fn to_document(&self, dto: CountryDto) -> AppResult<Country> {
        Ok(Country {
            id: normalize_id(dto.id),
            name: dto.name,
            created_at: parse_timestamp("createdAt", dto.created_at)?,
            updated_at: parse_timestamp("updatedAt", dto.updated_at)?,
        })
    }

    fn to_dto(&self, doc: Country) -> CountryDto {
        CountryDto {
            id: doc.id,
            name: doc.name,
            created_at: format_timestamp(doc.created_at),
            updated_at: format_timestamp(doc.updated_at),
        }
    }
}
