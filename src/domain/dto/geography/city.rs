use serde::{Deserialize, Serialize};
use validator::Validate;

use crate::core::errors::AppResult;
use crate::domain::entities::City;
use crate::domain::mapper::{format_timestamp, normalize_id, parse_timestamp, EntityMapper};

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize, Validate)]
#[serde(rename_all = "camelCase")]
pub struct CityDto {
    #[serde(default)]
    pub id: Option<String>,
    pub name: Option<String>,
    pub state_id: Option<String>,
    #[serde(default)]
    pub created_at: Option<String>,
    #[serde(default)]
    pub updated_at: Option<String>,
}

#[derive(Debug, Clone, Copy, Default)]
pub struct CityMapper;

impl EntityMapper for CityMapper {
    type Dto = CityDto;
    type Doc = City;

    fn to_document(&self, dto: CityDto) -> AppResult<City> {
        Ok(City {
            id: normalize_id(dto.id),
            name: dto.name,
            state_id: dto.state_id,
            created_at: parse_timestamp("createdAt", dto.created_at)?,
            updated_at: parse_timestamp("updatedAt", dto.updated_at)?,
        })
    }

    fn to_dto(&self, doc: City) -> CityDto {
        CityDto {
            id: doc.id,
            name: doc.name,
            state_id: doc.state_id,
            created_at: format_timestamp(doc.created_at),
            updated_at: format_timestamp(doc.updated_at),
        }
    }
}
