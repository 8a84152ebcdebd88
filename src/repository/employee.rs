//! Repository implementation for employee records.

use chrono::Utc;
use diesel::prelude::*;

use crate::{
    domain::{
        employee::{Employee, NewEmployee, UpdateEmployee},
        types::EmployeeId,
    },
    models::employee::{
        Employee as DbEmployee, NewEmployee as DbNewEmployee, UpdateEmployee as DbUpdateEmployee,
    },
    repository::{
        DieselRepository, EmployeeListQuery, EmployeeReader, EmployeeWriter,
        errors::{RepositoryError, RepositoryResult},
    },
};

impl EmployeeReader for DieselRepository {
    fn get_employee_by_id(&self, id: EmployeeId) -> RepositoryResult<Option<Employee>> {
        use crate::schema::employees;

        let mut conn = self.conn()?;
        let db_employee = employees::table
            .find(id.get())
            .first::<DbEmployee>(&mut conn)
            .optional()?;

        match db_employee {
            Some(db_employee) => Ok(Some(
                Employee::try_from(db_employee).map_err(RepositoryError::from)?,
            )),
            None => Ok(None),
        }
    }

    fn list_employees(&self, query: EmployeeListQuery) -> RepositoryResult<(usize, Vec<Employee>)> {
        use crate::schema::employees;

        let mut conn = self.conn()?;

        let total = employees::table.count().get_result::<i64>(&mut conn)? as usize;

        let mut items = employees::table
            .order(employees::id.asc())
            .into_boxed::<diesel::sqlite::Sqlite>();

        if let Some(pagination) = &query.pagination {
            let offset = pagination
                .offset()
                .filter(|offset| *offset < total)
                .and_then(|offset| i64::try_from(offset).ok());
            let Some(offset) = offset else {
                return Ok((total, Vec::new()));
            };
            let limit = i64::try_from(pagination.per_page).unwrap_or(i64::MAX);
            items = items.offset(offset).limit(limit);
        }

        let employees = items
            .load::<DbEmployee>(&mut conn)?
            .into_iter()
            .map(|db_employee| Employee::try_from(db_employee).map_err(RepositoryError::from))
            .collect::<Result<Vec<_>, RepositoryError>>()?;

        Ok((total, employees))
    }
}

impl EmployeeWriter for DieselRepository {
    fn create_employee(&self, new_employee: &NewEmployee) -> RepositoryResult<Employee> {
        use crate::schema::employees;

        let mut conn = self.conn()?;
        let insertable = DbNewEmployee::new(new_employee, Utc::now().naive_utc());

        let db_employee = diesel::insert_into(employees::table)
            .values(&insertable)
            .get_result::<DbEmployee>(&mut conn)?;

        Employee::try_from(db_employee).map_err(RepositoryError::from)
    }

    fn update_employee(
        &self,
        employee_id: EmployeeId,
        updates: &UpdateEmployee,
    ) -> RepositoryResult<Employee> {
        use crate::schema::employees;

        let mut conn = self.conn()?;
        let changeset = DbUpdateEmployee::new(updates, Utc::now().naive_utc());

        let db_employee = diesel::update(employees::table.find(employee_id.get()))
            .set(&changeset)
            .get_result::<DbEmployee>(&mut conn)?;

        Employee::try_from(db_employee).map_err(RepositoryError::from)
    }

    fn delete_employee(&self, employee_id: EmployeeId) -> RepositoryResult<()> {
        use crate::schema::employees;

        let mut conn = self.conn()?;

        let deleted =
            diesel::delete(employees::table.find(employee_id.get())).execute(&mut conn)?;

        if deleted == 0 {
            return Err(RepositoryError::NotFound);
        }
        Ok(())
    }
}
