use serde::{Deserialize, Serialize};
use validator::Validate;

use crate::core::errors::AppResult;
use crate::domain::entities::Department;
use crate::domain::mapper::{format_timestamp, normalize_id, parse_timestamp, EntityMapper};

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize, Validate)]
#[serde(rename_all = "camelCase")]
pub struct DepartmentDto {
    #[serde(default)]
    pub id: Option<String>,
    pub name: Option<String>,
    #[validate(length(max = 500, message = "부서 설명은 500자 이하여야 합니다"))]
    pub description: Option<String>,
    pub location_id: Option<String>,
    pub manager_id: Option<String>,
    #[serde(default)]
    pub created_at: Option<String>,
    #[serde(default)]
    pub updated_at: Option<String>,
}

#[derive(Debug, Clone, Copy, Default)]
pub struct DepartmentMapper;

impl EntityMapper for DepartmentMapper {
    type Dto = DepartmentDto;
    type Doc = Department;

    fn to_document(&self, dto: DepartmentDto) -> AppResult<Department> {
        let DepartmentDto { id, name, description, location_id, manager_id, created_at, updated_at } = dto;

        Ok(Department {
            id: normalize_id(id),
            name,
            description,
            location_id,
            manager_id,
            created_at: parse_timestamp("createdAt", created_at)?,
            updated_at: parse_timestamp("updatedAt", updated_at)?,
        })
    }

    fn to_dto(&self, doc: Department) -> DepartmentDto {
        let Department { id, name, description, location_id, manager_id, created_at, updated_at } = doc;

        DepartmentDto {
            id,
            name,
            description,
            location_id,
            manager_id,
            created_at: format_timestamp(created_at),
            updated_at: format_timestamp(updated_at),
        }
    }
}
