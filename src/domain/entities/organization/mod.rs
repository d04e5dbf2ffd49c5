//! 조직 데이터: 부서, 직무, 직무 이력, 직원

pub mod department;
pub mod job;
pub mod job_history;
pub mod employee;

pub use department::Department;
pub use job::Job;
pub use job_history::JobHistory;
pub use employee::Employee;
