//! Services behind the employee REST endpoints and browser pages.

use std::collections::BTreeMap;

use crate::domain::department::Department;
use crate::domain::employee::Employee;
use crate::domain::types::EmployeeId;
use crate::dto::api::{DeleteResponse, EmployeesPage, EmployeesQuery};
use crate::dto::employees::{EmployeeFormPageData, EmployeeRow, IndexPageData};
use crate::forms::employee::EmployeeForm;
use crate::pagination::Paginated;
use crate::repository::{
    DepartmentReader, EmployeeListQuery, EmployeeReader, EmployeeWriter, Pagination,
};
use crate::services::{ServiceError, ServiceResult};

/// Identifiers that cannot exist are reported as missing rather than invalid.
fn employee_id(id: i32) -> ServiceResult<EmployeeId> {
    EmployeeId::new(id).map_err(|_| ServiceError::NotFound)
}

/// Returns one page of employees ordered by id together with the page count.
pub fn list_employees<R>(repo: &R, query: &EmployeesQuery) -> ServiceResult<EmployeesPage>
where
    R: EmployeeReader + ?Sized,
{
    let pagination = Pagination::new(query.page(), query.page_size());

    let (total, employees) = repo.list_employees(
        EmployeeListQuery::new().paginate(pagination.page, pagination.per_page),
    )?;

    Ok(EmployeesPage {
        employees,
        total_pages: pagination.total_pages(total),
    })
}

pub fn get_employee<R>(repo: &R, id: i32) -> ServiceResult<Employee>
where
    R: EmployeeReader + ?Sized,
{
    repo.get_employee_by_id(employee_id(id)?)?
        .ok_or(ServiceError::NotFound)
}

/// Validates the payload and inserts a new employee.
pub fn create_employee<R>(repo: &R, form: EmployeeForm) -> ServiceResult<Employee>
where
    R: EmployeeWriter + ?Sized,
{
    let new_employee = form.into_new_employee()?;
    Ok(repo.create_employee(&new_employee)?)
}

/// Validates the payload and replaces every editable field of `id`.
pub fn update_employee<R>(repo: &R, id: i32, form: EmployeeForm) -> ServiceResult<Employee>
where
    R: EmployeeWriter + ?Sized,
{
    let employee_id = employee_id(id)?;
    let updates = form.into_update_employee()?;
    Ok(repo.update_employee(employee_id, &updates)?)
}

pub fn delete_employee<R>(repo: &R, id: i32) -> ServiceResult<DeleteResponse>
where
    R: EmployeeWriter + ?Sized,
{
    repo.delete_employee(employee_id(id)?)?;
    Ok(DeleteResponse { id, deleted: true })
}

/// Loads the paginated employee table for the index page.
pub fn load_index_page<R>(repo: &R, query: &EmployeesQuery) -> ServiceResult<IndexPageData>
where
    R: EmployeeReader + DepartmentReader + ?Sized,
{
    let pagination = Pagination::new(query.page(), query.page_size());
    let page = list_employees(repo, query)?;
    let departments = repo.list_departments()?;

    let rows = page
        .employees
        .iter()
        .map(|employee| EmployeeRow::new(employee, &departments))
        .collect();

    Ok(IndexPageData {
        employees: Paginated::new(
            rows,
            pagination.page,
            pagination.per_page,
            page.total_pages,
        ),
    })
}

/// Create-mode form: defaults with the first department preselected when
/// one exists.
pub fn load_new_employee_page<R>(repo: &R) -> ServiceResult<EmployeeFormPageData>
where
    R: DepartmentReader + ?Sized,
{
    let departments = repo.list_departments()?;
    let form = EmployeeForm {
        department_id: departments.first().map_or(0, |department| department.id.get()),
        ..EmployeeForm::default()
    };

    Ok(EmployeeFormPageData {
        form,
        departments,
        errors: BTreeMap::new(),
    })
}

/// Edit-mode form hydrated from the stored employee.
pub fn load_edit_employee_page<R>(repo: &R, id: i32) -> ServiceResult<EmployeeFormPageData>
where
    R: EmployeeReader + DepartmentReader + ?Sized,
{
    let employee = get_employee(repo, id)?;
    let departments = repo.list_departments()?;

    Ok(EmployeeFormPageData {
        form: EmployeeForm::from(&employee),
        departments,
        errors: BTreeMap::new(),
    })
}

/// Re-renders a rejected submission with its field errors.
pub fn load_invalid_form_page<R>(
    repo: &R,
    form: EmployeeForm,
    errors: BTreeMap<String, String>,
) -> ServiceResult<EmployeeFormPageData>
where
    R: DepartmentReader + ?Sized,
{
    let departments: Vec<Department> = repo.list_departments()?;

    Ok(EmployeeFormPageData {
        form,
        departments,
        errors,
    })
}

/// Creates or updates depending on whether the form carries an id.
pub fn save_employee<R>(repo: &R, form: EmployeeForm) -> ServiceResult<Employee>
where
    R: EmployeeWriter + ?Sized,
{
    match form.id {
        Some(id) => update_employee(repo, id, form),
        None => create_employee(repo, form),
    }
}
