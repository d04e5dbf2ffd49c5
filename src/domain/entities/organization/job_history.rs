//! 직무 이력 문서 (`job-histories` 컬렉션)
//!
//! 이름 필드가 없으므로 검색은 `jobId` 기준입니다.

use mongodb::bson::DateTime;
use serde::{Deserialize, Serialize};
use crate::domain::entities::{EntityDescriptor, Reference};

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct JobHistory {
    #[serde(rename = "_id", skip_serializing_if = "Option::is_none")]
    pub id: Option<String>,
    pub start_date: Option<DateTime>,
    pub end_date: Option<DateTime>,
    pub job_id: Option<String>,
    pub department_id: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub created_at: Option<DateTime>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub updated_at: Option<DateTime>,
}

impl_document!(JobHistory, EntityDescriptor {
    name: "job history",
    collection: "job-histories",
    search_field: "jobId",
    references: &[
        Reference { field: "jobId", segment: "jobs" },
        Reference { field: "departmentId", segment: "departments" },
    ],
});
