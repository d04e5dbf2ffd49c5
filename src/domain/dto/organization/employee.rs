use serde::{Deserialize, Serialize};
use validator::Validate;

use crate::core::errors::AppResult;
use crate::domain::entities::Employee;
use crate::domain::mapper::{format_timestamp, normalize_id, parse_timestamp, EntityMapper};

/// 직원 DTO
///
/// 피어 서비스로 전달될 때도 이 형태가 그대로 JSON 본문이 됩니다.
/// 전달이 포기되면 `EmployeeDto::default()` (모든 필드 `null`) 가 반환됩니다.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize, Validate)]
#[serde(rename_all = "camelCase")]
pub struct EmployeeDto {
    #[serde(default)]
    pub id: Option<String>,
    #[validate(length(max = 100, message = "이름은 100자 이하여야 합니다"))]
    pub first_name: Option<String>,
    #[validate(length(max = 100, message = "성은 100자 이하여야 합니다"))]
    pub last_name: Option<String>,
    #[validate(email(message = "유효한 이메일 주소를 입력해주세요"))]
    pub email: Option<String>,
    pub phone_number: Option<String>,
    #[validate(range(min = 0.0, message = "급여는 0 이상이어야 합니다"))]
    pub salary: Option<f64>,
    #[validate(range(min = 0.0, message = "수수료는 0 이상이어야 합니다"))]
    pub commission: Option<f64>,
    pub birth_date: Option<String>,
    pub hire_date: Option<String>,
    pub department_id: Option<String>,
    pub manager_id: Option<String>,
    pub job_id: Option<String>,
    #[serde(default)]
    pub created_at: Option<String>,
    #[serde(default)]
    pub updated_at: Option<String>,
}

#[derive(Debug, Clone, Copy, Default)]
pub struct EmployeeMapper;

impl EntityMapper for EmployeeMapper {
    type Dto = EmployeeDto;
    type Doc = Employee;

    fn to_document(&self, dto: EmployeeDto) -> AppResult<Employee> {
        let EmployeeDto {
            id,
            first_name,
            last_name,
            email,
            phone_number,
            salary,
            commission,
            birth_date,
            hire_date,
            department_id,
            manager_id,
            job_id,
            created_at,
            updated_at,
        } = dto;

        Ok(Employee {
            id: normalize_id(id),
            first_name,
            last_name,
            email,
            phone_number,
            salary,
            commission,
            birth_date: parse_timestamp("birthDate", birth_date)?,
            hire_date: parse_timestamp("hireDate", hire_date)?,
            department_id,
            manager_id,
            job_id,
            created_at: parse_timestamp("createdAt", created_at)?,
            updated_at: parse_timestamp("updatedAt", updated_at)?,
        })
    }

    fn to_dto(&self, doc: Employee) -> EmployeeDto {
        let Employee {
            id,
            first_name,
            last_name,
            email,
            phone_number,
            salary,
            commission,
            birth_date,
            hire_date,
            department_id,
            manager_id,
            job_id,
            created_at,
            updated_at,
        } = doc;

        EmployeeDto {
            id,
            first_name,
            last_name,
            email,
            phone_number,
            salary,
            commission,
            birth_date: format_timestamp(birth_date),
            hire_date: format_timestamp(hire_date),
            department_id,
            manager_id,
            job_id,
            created_at: format_timestamp(created_at),
            updated_at: format_timestamp(updated_at),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_invalid_email_fails_validation() {
        let dto = EmployeeDto { email: Some("not-an-email".to_string()), ..EmployeeDto::default() };
        assert!(dto.validate().is_err());

        let dto = EmployeeDto { email: Some("jane@example.com".to_string()), ..EmployeeDto::default() };
        assert!(dto.validate().is_ok());
    }

    #[test]
    fn test_negative_commission_fails_validation() {
        let dto = EmployeeDto { commission: Some(-0.1), ..EmployeeDto::default() };
        assert!(dto.validate().is_err());
    }

    #[test]
    fn test_dates_survive_mapping() {
        let dto = EmployeeDto {
            first_name: Some("Jane".to_string()),
            birth_date: Some("1990-05-17T00:00:00Z".to_string()),
            hire_date: Some("2021-09-01T09:00:00Z".to_string()),
            ..EmployeeDto::default()
        };

        let doc = EmployeeMapper.to_document(dto.clone()).unwrap();
        assert!(doc.birth_date.is_some());

        let back = EmployeeMapper.to_dto(doc.clone());
        assert_eq!(back.first_name, dto.first_name);
        assert_eq!(EmployeeMapper.to_document(back).unwrap(), doc);
    }
}
