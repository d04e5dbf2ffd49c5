//! 부서 문서 (`departments` 컬렉션)

use mongodb::bson::DateTime;
use serde::{Deserialize, Serialize};
use crate::domain::entities::{EntityDescriptor, Reference};

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Department {
    #[serde(rename = "_id", skip_serializing_if = "Option::is_none")]
    pub id: Option<String>,
    pub name: Option<String>,
    pub description: Option<String>,
    pub location_id: Option<String>,
    /// 부서장 직원 ID (검증하지 않음)
    pub manager_id: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub created_at: Option<DateTime>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub updated_at: Option<DateTime>,
}

impl_document!(Department, EntityDescriptor {
    name: "department",
    collection: "departments",
    search_field: "name",
    references: &[
        Reference { field: "locationId", segment: "locations" },
        Reference { field: "managerId", segment: "managers" },
    ],
});
