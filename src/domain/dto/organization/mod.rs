pub mod department;
pub mod job;
pub mod job_history;
pub mod employee;

pub use department::{DepartmentDto, DepartmentMapper};
pub use job::{JobDto, JobMapper};
pub use job_history::{JobHistoryDto, JobHistoryMapper};
pub use employee::{EmployeeDto, EmployeeMapper};
