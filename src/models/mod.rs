//! Database models shared across the employee repository.

pub mod config;
pub mod dashboard;
pub mod department;
pub mod employee;
