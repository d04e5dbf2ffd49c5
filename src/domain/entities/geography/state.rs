//! 주(State) 문서 (`states` 컬렉션)

use mongodb::bson::DateTime;
use serde::{Deserialize, Serialize};
use crate::domain::entities::{EntityDescriptor, Reference};

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct State {
    #[serde(rename = "_id", skip_serializing_if = "Option::is_none")]
    pub id: Option<String>,
    pub name: Option<String>,
    /// 약어 (예: "CA")
    pub acronym: Option<String>,
    pub country_id: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub created_at: Option<DateTime>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub updated_at: Option<DateTime>,
}

impl_document!(State, EntityDescriptor {
    name: "state",
    collection: "states",
    search_field: "name",
    references: &[Reference { field: "countryId", segment: "countries" }],
});
