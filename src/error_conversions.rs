//! Error conversion glue between the domain layer and the repository.
//!
//! The domain layer must not depend on repository error types, but
//! repository implementations still need `?` to lift constraint failures
//! found in stored rows.

use crate::domain::types::TypeConstraintError;
use crate::repository::errors::RepositoryError;

impl From<TypeConstraintError> for RepositoryError {
    fn from(val: TypeConstraintError) -> Self {
        RepositoryError::ValidationError(val.to_string())
    }
}
