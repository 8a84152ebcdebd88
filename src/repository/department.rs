use diesel::prelude::*;

use crate::{
    domain::{department::Department, types::DepartmentId},
    models::department::Department as DbDepartment,
    repository::{
        DepartmentReader, DieselRepository,
        errors::{RepositoryError, RepositoryResult},
    },
};

impl DepartmentReader for DieselRepository {
    fn list_departments(&self) -> RepositoryResult<Vec<Department>> {
        use crate::schema::departments;

        let mut conn = self.conn()?;
        departments::table
            .order(departments::id.asc())
            .select(DbDepartment::as_select())
            .load::<DbDepartment>(&mut conn)?
            .into_iter()
            .map(|db_department| Department::try_from(db_department).map_err(RepositoryError::from))
            .collect()
    }

    fn get_department_by_id(&self, id: DepartmentId) -> RepositoryResult<Option<Department>> {
        use crate::schema::departments;

        let mut conn = self.conn()?;
        let db_department = departments::table
            .find(id.get())
            .select(DbDepartment::as_select())
            .first::<DbDepartment>(&mut conn)
            .optional()?;

        db_department
            .map(|department| Department::try_from(department).map_err(RepositoryError::from))
            .transpose()
    }
}
