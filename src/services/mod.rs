use std::collections::BTreeMap;

use thiserror::Error;

use crate::domain::types::TypeConstraintError;
use crate::forms::employee::FormError;
use crate::repository::errors::RepositoryError;

pub mod dashboard;
pub mod departments;
pub mod employees;

#[derive(Debug, Error)]
pub enum ServiceError {
    #[error("Employee not found")]
    NotFound,

    /// Form input failed validation; field name mapped to message.
    #[error("{}", join_messages(.0))]
    Validation(BTreeMap<String, String>),

    #[error("{0}")]
    TypeConstraint(String),

    #[error("Department does not exist")]
    InvalidReference,

    #[error(transparent)]
    Repository(RepositoryError),
}

pub type ServiceResult<T> = Result<T, ServiceError>;

fn join_messages(errors: &BTreeMap<String, String>) -> String {
    errors.values().cloned().collect::<Vec<_>>().join(", ")
}

impl From<RepositoryError> for ServiceError {
    fn from(err: RepositoryError) -> Self {
        match err {
            RepositoryError::NotFound => ServiceError::NotFound,
            RepositoryError::InvalidReference(_) => ServiceError::InvalidReference,
            other => ServiceError::Repository(other),
        }
    }
}

impl From<TypeConstraintError> for ServiceError {
    fn from(val: TypeConstraintError) -> Self {
        ServiceError::TypeConstraint(val.to_string())
    }
}

impl From<FormError> for ServiceError {
    fn from(err: FormError) -> Self {
        match err {
            FormError::Invalid(errors) => ServiceError::Validation(errors),
            FormError::TypeConstraint(err) => err.into(),
        }
    }
}
