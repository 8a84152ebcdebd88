//! Diesel model for the read-only departments table.

use diesel::prelude::*;

use crate::domain::department::Department as DomainDepartment;
use crate::domain::types::{DepartmentId, DepartmentName, TypeConstraintError};

#[derive(Debug, Clone, Identifiable, Queryable, Selectable)]
#[diesel(table_name = crate::schema::departments)]
/// Diesel model for [`crate::domain::department::Department`].
pub struct Department {
    pub id: i32,
    pub name: String,
    pub status: bool,
}

impl TryFrom<Department> for DomainDepartment {
    type Error = TypeConstraintError;

    fn try_from(department: Department) -> Result<Self, Self::Error> {
        Ok(Self {
            id: DepartmentId::new(department.id)?,
            name: DepartmentName::new(department.name)?,
            status: department.status,
        })
    }
}
