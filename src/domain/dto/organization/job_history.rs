use serde::{Deserialize, Serialize};
use validator::Validate;

use crate::core::errors::AppResult;
use crate::domain::entities::JobHistory;
use crate::domain::mapper::{format_timestamp, normalize_id, parse_timestamp, EntityMapper};

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize, Validate)]
#[serde(rename_all = "camelCase")]
pub struct JobHistoryDto {
    #[serde(default)]
    pub id: Option<String>,
    /// RFC 3339
    pub start_date: Option<String>,
    /// RFC 3339
    pub end_date: Option<String>,
    pub job_id: Option<String>,
    pub department_id: Option<String>,
    #[serde(default)]
    pub created_at: Option<String>,
    #[serde(default)]
    pub updated_at: Option<String>,
}

#[derive(Debug, Clone, Copy, Default)]
pub struct JobHistoryMapper;

impl EntityMapper for JobHistoryMapper {
    type Dto = JobHistoryDto;
    type Doc = JobHistory;

    fn to_document(&self, dto: JobHistoryDto) -> AppResult<JobHistory> {
        let JobHistoryDto { id, start_date, end_date, job_id, department_id, created_at, updated_at } = dto;

        Ok(JobHistory {
            id: normalize_id(id),
            start_date: parse_timestamp("startDate", start_date)?,
            end_date: parse_timestamp("endDate", end_date)?,
            job_id,
            department_id,
            created_at: parse_timestamp("createdAt", created_at)?,
            updated_at: parse_timestamp("updatedAt", updated_at)?,
        })
    }

    fn to_dto(&self, doc: JobHistory) -> JobHistoryDto {
        let JobHistory { id, start_date, end_date, job_id, department_id, created_at, updated_at } = doc;

        JobHistoryDto {
            id,
            start_date: format_timestamp(start_date),
            end_date: format_timestamp(end_date),
            job_id,
            department_id,
            created_at: format_timestamp(created_at),
            updated_at: format_timestamp(updated_at),
        }
    }
}
