//! Entity models and request/response DTOs.

pub mod school;
pub mod student;

pub use school::{CreateSchoolRequest, School, SchoolSummary, UpdateSchoolRequest};
pub use student::{CreateStudentRequest, ListStudentsQuery, Student, UpdateStudentRequest};
