use chrono::{NaiveDate, NaiveDateTime};
use serde::{Deserialize, Serialize};

use crate::domain::types::{
    DepartmentId, EmployeeEmail, EmployeeId, EmployeeName, PhoneNumber, PhotoUrl, Salary,
};

/// Employee record as stored by the server.
#[derive(Clone, Debug, Serialize, Deserialize, PartialEq)]
pub struct Employee {
    pub id: EmployeeId,
    pub name: EmployeeName,
    pub phone: PhoneNumber,
    pub email: EmployeeEmail,
    pub salary: Salary,
    pub dob: NaiveDate,
    pub department_id: DepartmentId,
    pub photo: Option<PhotoUrl>,
    pub status: bool,
    /// Set by the server on insert.
    pub created: NaiveDateTime,
    /// Refreshed by the server on every update.
    pub modified: NaiveDateTime,
}

/// Validated field set for inserting an employee.
#[derive(Clone, Debug, PartialEq)]
pub struct NewEmployee {
    pub name: EmployeeName,
    pub phone: PhoneNumber,
    pub email: EmployeeEmail,
    pub salary: Salary,
    pub dob: NaiveDate,
    pub department_id: DepartmentId,
    pub photo: Option<PhotoUrl>,
    pub status: bool,
}

/// Full replacement of the editable employee fields.
#[derive(Clone, Debug, PartialEq)]
pub struct UpdateEmployee {
    pub name: EmployeeName,
    pub phone: PhoneNumber,
    pub email: EmployeeEmail,
    pub salary: Salary,
    pub dob: NaiveDate,
    pub department_id: DepartmentId,
    pub photo: Option<PhotoUrl>,
    pub status: bool,
}

impl From<NewEmployee> for UpdateEmployee {
    fn from(value: NewEmployee) -> Self {
        Self {
            name: value.name,
            phone: value.phone,
            email: value.email,
            salary: value.salary,
            dob: value.dob,
            department_id: value.department_id,
            photo: value.photo,
            status: value.status,
        }
    }
}

impl From<&Employee> for UpdateEmployee {
    fn from(employee: &Employee) -> Self {
        Self {
            name: employee.name.clone(),
            phone: employee.phone.clone(),
            email: employee.email.clone(),
            salary: employee.salary,
            dob: employee.dob,
            department_id: employee.department_id,
            photo: employee.photo.clone(),
            status: employee.status,
        }
    }
}
