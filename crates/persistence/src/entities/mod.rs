//! Entity definitions (database row mappings).

mod school;
mod student;

pub use school::SchoolEntity;
pub use student::StudentEntity;
