use chrono::{NaiveDate, NaiveDateTime};
use diesel::prelude::*;

use crate::domain::employee::{
    Employee as DomainEmployee, NewEmployee as DomainNewEmployee,
    UpdateEmployee as DomainUpdateEmployee,
};
use crate::domain::types::{
    DepartmentId, EmployeeEmail, EmployeeId, EmployeeName, PhoneNumber, PhotoUrl, Salary,
    TypeConstraintError,
};
use crate::models::department::Department;

#[derive(Debug, Clone, Identifiable, Queryable, Selectable, Associations)]
#[diesel(table_name = crate::schema::employees)]
#[diesel(belongs_to(Department, foreign_key = department_id))]
/// Diesel model for [`crate::domain::employee::Employee`].
pub struct Employee {
    pub id: i32,
    pub name: String,
    pub phone: String,
    pub email: String,
    pub salary: f64,
    pub dob: NaiveDate,
    pub department_id: i32,
    pub photo: Option<String>,
    pub status: bool,
    pub created: NaiveDateTime,
    pub modified: NaiveDateTime,
}

#[derive(Insertable)]
#[diesel(table_name = crate::schema::employees)]
/// Insertable form of [`Employee`].
pub struct NewEmployee<'a> {
    pub name: &'a str,
    pub phone: &'a str,
    pub email: &'a str,
    pub salary: f64,
    pub dob: NaiveDate,
    pub department_id: i32,
    pub photo: Option<&'a str>,
    pub status: bool,
    pub created: NaiveDateTime,
    pub modified: NaiveDateTime,
}

#[derive(AsChangeset)]
#[diesel(table_name = crate::schema::employees)]
#[diesel(treat_none_as_null = true)]
/// Data used when updating an [`Employee`] record.
pub struct UpdateEmployee<'a> {
    pub name: &'a str,
    pub phone: &'a str,
    pub email: &'a str,
    pub salary: f64,
    pub dob: NaiveDate,
    pub department_id: i32,
    pub photo: Option<&'a str>,
    pub status: bool,
    pub modified: NaiveDateTime,
}

impl TryFrom<Employee> for DomainEmployee {
    type Error = TypeConstraintError;

    fn try_from(employee: Employee) -> Result<Self, Self::Error> {
        Ok(Self {
            id: EmployeeId::new(employee.id)?,
            name: EmployeeName::new(employee.name)?,
            phone: PhoneNumber::new(employee.phone)?,
            email: EmployeeEmail::new(employee.email)?,
            salary: Salary::new(employee.salary)?,
            dob: employee.dob,
            department_id: DepartmentId::new(employee.department_id)?,
            photo: employee.photo.map(PhotoUrl::new).transpose()?,
            status: employee.status,
            created: employee.created,
            modified: employee.modified,
        })
    }
}

impl<'a> NewEmployee<'a> {
    /// Builds the insertable row stamping both timestamps with `now`.
    pub fn new(employee: &'a DomainNewEmployee, now: NaiveDateTime) -> Self {
        Self {
            name: employee.name.as_str(),
            phone: employee.phone.as_str(),
            email: employee.email.as_str(),
            salary: employee.salary.get(),
            dob: employee.dob,
            department_id: employee.department_id.get(),
            photo: employee.photo.as_ref().map(PhotoUrl::as_str),
            status: employee.status,
            created: now,
            modified: now,
        }
    }
}

impl<'a> UpdateEmployee<'a> {
    /// Builds the changeset refreshing `modified` with `now`.
    pub fn new(employee: &'a DomainUpdateEmployee, now: NaiveDateTime) -> Self {
        Self {
            name: employee.name.as_str(),
            phone: employee.phone.as_str(),
            email: employee.email.as_str(),
            salary: employee.salary.get(),
            dob: employee.dob,
            department_id: employee.department_id.get(),
            photo: employee.photo.as_ref().map(PhotoUrl::as_str),
            status: employee.status,
            modified: now,
        }
    }
}
