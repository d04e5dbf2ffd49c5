use serde::{Deserialize, Serialize};
use validator::{Validate, ValidationError};

use crate::core::errors::AppResult;
use crate::domain::entities::Job;
use crate::domain::mapper::{format_timestamp, normalize_id, parse_timestamp, EntityMapper};

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize, Validate)]
#[serde(rename_all = "camelCase")]
#[validate(schema(function = "validate_salary_range"))]
pub struct JobDto {
    #[serde(default)]
    pub id: Option<String>,
    pub title: Option<String>,
    #[validate(range(min = 0.0, message = "최소 급여는 0 이상이어야 합니다"))]
    pub min_salary: Option<f64>,
    #[validate(range(min = 0.0, message = "최대 급여는 0 이상이어야 합니다"))]
    pub max_salary: Option<f64>,
    #[serde(default)]
    pub created_at: Option<String>,
    #[serde(default)]
    pub updated_at: Option<String>,
}

fn validate_salary_range(job: &JobDto) -> Result<(), ValidationError> {
    if let (Some(min), Some(max)) = (job.min_salary, job.max_salary) {
        if min > max {
            return Err(ValidationError::new("salary_range")
                .with_message("최소 급여가 최대 급여보다 클 수 없습니다".into()));
        }
    }
    Ok(())
}

#[derive(Debug, Clone, Copy, Default)]
pub struct JobMapper;

impl EntityMapper for JobMapper {
    type Dto = JobDto;
    type Doc = Job;

    fn to_document(&self, dto: JobDto) -> AppResult<Job> {
        Ok(Job {
            id: normalize_id(dto.id),
            title: dto.title,
            min_salary: dto.min_salary,
            max_salary: dto.max_salary,
            created_at: parse_timestamp("createdAt", dto.created_at)?,
            updated_at: parse_timestamp("updatedAt", dto.updated_at)?,
        })
    }

    fn to_dto(&self, doc: Job) -> JobDto {
        JobDto {
            id: doc.id,
            title: doc.title,
            min_salary: doc.min_salary,
            max_salary: doc.max_salary,
            created_at: format_timestamp(doc.created_at),
            updated_at: format_timestamp(doc.updated_at),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_inverted_salary_range_fails_validation() {
        let dto = JobDto {
            title: Some("Engineer".to_string()),
            min_salary: Some(9000.0),
            max_salary: Some(3000.0),
            ..JobDto::default()
        };
        assert!(dto.validate().is_err());
    }

    #[test]
    fn test_negative_salary_fails_validation() {
        let dto = JobDto { min_salary: Some(-1.0), ..JobDto::default() };
        assert!(dto.validate().is_err());

        let dto = JobDto { min_salary: Some(1000.0), max_salary: Some(2000.0), ..JobDto::default() };
        assert!(dto.validate().is_ok());
    }
}
