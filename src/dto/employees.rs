//! DTOs shaped for the employee list and form templates.

use std::collections::BTreeMap;

use serde::Serialize;

use crate::domain::department::{Department, department_name};
use crate::domain::employee::Employee;
use crate::forms::employee::EmployeeForm;
use crate::pagination::Paginated;

/// Table row of the employee list.
#[derive(Debug, Clone, Serialize, PartialEq)]
pub struct EmployeeRow {
    pub id: i32,
    pub name: String,
    pub phone: String,
    pub email: String,
    pub salary: f64,
    pub department: Option<String>,
    pub status: bool,
    pub edit_url: String,
}

impl EmployeeRow {
    pub fn new(employee: &Employee, departments: &[Department]) -> Self {
        Self {
            id: employee.id.get(),
            name: employee.name.to_string(),
            phone: employee.phone.to_string(),
            email: employee.email.to_string(),
            salary: employee.salary.get(),
            department: department_name(departments, employee.department_id).map(str::to_string),
            status: employee.status,
            edit_url: format!("/edit-employee/{}", employee.id),
        }
    }
}

/// Data required to render the main index template.
pub struct IndexPageData {
    pub employees: Paginated<EmployeeRow>,
}

/// Data required to render the add / edit form.
pub struct EmployeeFormPageData {
    pub form: EmployeeForm,
    pub departments: Vec<Department>,
    /// Field name to message, empty on first render.
    pub errors: BTreeMap<String, String>,
}

impl EmployeeFormPageData {
    pub fn is_edit(&self) -> bool {
        self.form.id.is_some()
    }
}
