//! Repository implementations (the persistence gateway).

mod school;
mod student;

pub use school::SchoolRepository;
pub use student::StudentRepository;
