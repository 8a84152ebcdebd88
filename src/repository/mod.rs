use chrono::NaiveDate;

use crate::db::{DbConnection, DbPool};
use crate::domain::dashboard::{DepartmentSalary, SalaryRangeCount};
use crate::domain::department::Department;
use crate::domain::employee::{Employee, NewEmployee, UpdateEmployee};
use crate::domain::types::{DepartmentId, EmployeeId};
use crate::repository::errors::RepositoryResult;

pub mod dashboard;
pub mod department;
pub mod employee;
pub mod errors;
#[cfg(feature = "test-mocks")]
pub mod mock;

/// Page size used when a listing does not ask for one.
pub const DEFAULT_PAGE_SIZE: usize = 10;
/// Largest page size a listing may request.
pub const MAX_PAGE_SIZE: usize = 100;

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Pagination {
    pub page: usize,
    pub per_page: usize,
}

impl Pagination {
    /// Normalizes raw request values: page 0 becomes 1 and the page size is
    /// clamped to `1..=MAX_PAGE_SIZE`.
    pub fn new(page: usize, per_page: usize) -> Self {
        Self {
            page: page.max(1),
            per_page: per_page.clamp(1, MAX_PAGE_SIZE),
        }
    }

    /// Rows to skip, or `None` when the page is too far out to address.
    pub fn offset(&self) -> Option<usize> {
        (self.page - 1).checked_mul(self.per_page)
    }

    /// Number of pages needed for `total` rows.
    pub fn total_pages(&self, total: usize) -> usize {
        total.div_ceil(self.per_page)
    }
}

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct EmployeeListQuery {
    pub pagination: Option<Pagination>,
}

impl EmployeeListQuery {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn paginate(mut self, page: usize, per_page: usize) -> Self {
        self.pagination = Some(Pagination::new(page, per_page));
        self
    }
}

/// Employee row reduced to what the youngest-by-department report needs.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DepartmentBirthday {
    pub department_name: String,
    pub name: String,
    pub dob: NaiveDate,
}

/// Diesel-backed repository shared by every reader and writer trait.
#[derive(Clone)]
pub struct DieselRepository {
    pool: DbPool,
}

impl DieselRepository {
    pub fn new(pool: DbPool) -> Self {
        Self { pool }
    }

    fn conn(&self) -> RepositoryResult<DbConnection> {
        Ok(self.pool.get()?)
    }
}

pub trait EmployeeReader {
    fn get_employee_by_id(&self, id: EmployeeId) -> RepositoryResult<Option<Employee>>;
    /// Returns the total number of employees together with the requested page.
    fn list_employees(&self, query: EmployeeListQuery) -> RepositoryResult<(usize, Vec<Employee>)>;
}

pub trait EmployeeWriter {
    fn create_employee(&self, new_employee: &NewEmployee) -> RepositoryResult<Employee>;
    fn update_employee(
        &self,
        employee_id: EmployeeId,
        updates: &UpdateEmployee,
    ) -> RepositoryResult<Employee>;
    /// Fails with [`errors::RepositoryError::NotFound`] when no row was removed.
    fn delete_employee(&self, employee_id: EmployeeId) -> RepositoryResult<()>;
}

pub trait DepartmentReader {
    fn list_departments(&self) -> RepositoryResult<Vec<Department>>;
    fn get_department_by_id(&self, id: DepartmentId) -> RepositoryResult<Option<Department>>;
}

pub trait DashboardReader {
    fn department_highest_salaries(&self) -> RepositoryResult<Vec<DepartmentSalary>>;
    fn salary_range_counts(&self) -> RepositoryResult<Vec<SalaryRangeCount>>;
    /// Employees holding the latest date of birth within their department.
    fn youngest_by_department(&self) -> RepositoryResult<Vec<DepartmentBirthday>>;
}
