use serde::{Deserialize, Serialize};
use validator::Validate;

use crate::core::errors::AppResult;
use crate::domain::entities::Location;
use crate::domain::mapper::{format_timestamp, normalize_id, parse_timestamp, EntityMapper};

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize, Validate)]
#[serde(rename_all = "camelCase")]
pub struct LocationDto {
    #[serde(default)]
    pub id: Option<String>,
    pub street: Option<String>,
    #[validate(length(max = 20, message = "우편번호는 20자 이하여야 합니다"))]
    pub postal_code: Option<String>,
    pub city_id: Option<String>,
    #[serde(default)]
    pub created_at: Option<String>,
    #[serde(default)]
    pub updated_at: Option<String>,
}

#[derive(Debug, Clone, Copy, Default)]
pub struct LocationMapper;

impl EntityMapper for LocationMapper {
    type Dto = LocationDto;
    type Doc = Location;

    fn to_document(&self, dto: LocationDto) -> AppResult<Location> {
        let LocationDto { id, street, postal_code, city_id, created_at, updated_at } = dto;

        Ok(Location {
            id: normalize_id(id),
            street,
            postal_code,
            city_id,
            created_at: parse_timestamp("createdAt", created_at)?,
            updated_at: parse_timestamp("updatedAt", updated_at)?,
        })
    }

    fn to_dto(&self, doc: Location) -> LocationDto {
        let Location { id, street, postal_code, city_id, created_at, updated_at } = doc;

        LocationDto {
            id,
            street,
            postal_code,
            city_id,
            created_at: format_timestamp(created_at),
            updated_at: format_timestamp(updated_at),
        }
    }
}
