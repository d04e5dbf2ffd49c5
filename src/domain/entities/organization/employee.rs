//! 직원 문서 (`employees` 컬렉션)

use mongodb::bson::DateTime;
use serde::{Deserialize, Serialize};
use crate::domain::entities::{EntityDescriptor, Reference};

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Employee {
    #[serde(rename = "_id", skip_serializing_if = "Option::is_none")]
    pub id: Option<String>,
    pub first_name: Option<String>,
    pub last_name: Option<String>,
    pub email: Option<String>,
    pub phone_number: Option<String>,
    pub salary: Option<f64>,
    /// 수수료 비율
    pub commission: Option<f64>,
    pub birth_date: Option<DateTime>,
    pub hire_date: Option<DateTime>,
    pub department_id: Option<String>,
    pub manager_id: Option<String>,
    pub job_id: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub created_at: Option<DateTime>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub updated_at: Option<DateTime>,
}

impl_document!(Employee, EntityDescriptor {
    name: "employee",
    collection: "employees",
    search_field: "firstName",
    references: &[
        Reference { field: "departmentId", segment: "departments" },
        Reference { field: "managerId", segment: "managers" },
        Reference { field: "jobId", segment: "jobs" },
    ],
});
