//! Domain aggregates exposed by the employee service layer.

pub mod dashboard;
pub mod department;
pub mod employee;
pub mod types;
