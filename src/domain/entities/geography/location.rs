//! 주소 문서 (`locations` 컬렉션)
//!
//! 검색은 도로명(`street`) 기준입니다.

use mongodb::bson::DateTime;
use serde::{Deserialize, Serialize};
use crate::domain::entities::{EntityDescriptor, Reference};

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Location {
    #[serde(rename = "_id", skip_serializing_if = "Option::is_none")]
    pub id: Option<String>,
    pub street: Option<String>,
    pub postal_code: Option<String>,
    pub city_id: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub created_at: Option<DateTime>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub updated_at: Option<DateTime>,
}

impl_document!(Location, EntityDescriptor {
    name: "location",
    collection: "locations",
    search_field: "street",
    references: &[Reference { field: "cityId", segment: "cities" }],
});
