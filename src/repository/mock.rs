//! Mock repository implementations for isolating services in tests.

use mockall::mock;

use crate::domain::dashboard::{DepartmentSalary, SalaryRangeCount};
use crate::domain::department::Department;
use crate::domain::employee::{Employee, NewEmployee, UpdateEmployee};
use crate::domain::types::{DepartmentId, EmployeeId};
use crate::repository::errors::RepositoryResult;
use crate::repository::{
    DashboardReader, DepartmentBirthday, DepartmentReader, EmployeeListQuery, EmployeeReader,
    EmployeeWriter,
};

mock! {
    pub Repository {}

    impl EmployeeReader for Repository {
        fn get_employee_by_id(&self, id: EmployeeId) -> RepositoryResult<Option<Employee>>;
        fn list_employees(&self, query: EmployeeListQuery) -> RepositoryResult<(usize, Vec<Employee>)>;
    }

    impl EmployeeWriter for Repository {
        fn create_employee(&self, new_employee: &NewEmployee) -> RepositoryResult<Employee>;
        fn update_employee(
            &self,
            employee_id: EmployeeId,
            updates: &UpdateEmployee,
        ) -> RepositoryResult<Employee>;
        fn delete_employee(&self, employee_id: EmployeeId) -> RepositoryResult<()>;
    }

    impl DepartmentReader for Repository {
        fn list_departments(&self) -> RepositoryResult<Vec<Department>>;
        fn get_department_by_id(&self, id: DepartmentId) -> RepositoryResult<Option<Department>>;
    }

    impl DashboardReader for Repository {
        fn department_highest_salaries(&self) -> RepositoryResult<Vec<DepartmentSalary>>;
        fn salary_range_counts(&self) -> RepositoryResult<Vec<SalaryRangeCount>>;
        fn youngest_by_department(&self) -> RepositoryResult<Vec<DepartmentBirthday>>;
    }
}
