//! 국가 문서 (`countries` 컬렉션)

use mongodb::bson::DateTime;
use serde::{Deserialize, Serialize};
use crate::domain::entities::EntityDescriptor;

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Country {
    #[serde(rename = "_id", skip_serializing_if = "Option::is_none")]
    pub id: Option<String>,
    pub name: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub created_at: Option<DateTime>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub updated_at: Option<DateTime>,
}

impl_document!(Country, EntityDescriptor {
    name: "country",
    collection: "countries",
    search_field: "name",
    references: &[],
});
