//! 도시 문서 (`cities` 컬렉션)

use mongodb::bson::DateTime;
use serde::{Deserialize, Serialize};
use crate::domain::entities::{EntityDescriptor, Reference};

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct City {
    #[serde(rename = "_id", skip_serializing_if = "Option::is_none")]
    pub id: Option<String>,
    pub name: Option<String>,
    pub state_id: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub created_at: Option<DateTime>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub updated_at: Option<DateTime>,
}

impl_document!(City, EntityDescriptor {
    name: "city",
    collection: "cities",
    search_field: "name",
    references: &[Reference { field: "stateId", segment: "states" }],
});
