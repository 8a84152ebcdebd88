//! Employee form shared by the browser pages, the JSON API and the client.

use std::borrow::Cow;
use std::collections::BTreeMap;

use serde::{Deserialize, Deserializer, Serialize};
use thiserror::Error;
use validator::{Validate, ValidateEmail, ValidateUrl, ValidationError, ValidationErrors};

use crate::domain::employee::{Employee, NewEmployee, UpdateEmployee};
use crate::domain::types::{
    DepartmentId, EmployeeEmail, EmployeeName, PhoneNumber, PhotoUrl, Salary, TypeConstraintError,
    contains_markup, is_valid_phone, parse_date_of_birth,
};

/// Salary prefilled on the create form.
pub const DEFAULT_SALARY_AMOUNT: f64 = 30_000.0;

#[derive(Debug, Error)]
pub enum FormError {
    /// Field name mapped to the first message reported for it.
    #[error("{}", summarize(.0))]
    Invalid(BTreeMap<String, String>),
    #[error(transparent)]
    TypeConstraint(#[from] TypeConstraintError),
}

fn summarize(errors: &BTreeMap<String, String>) -> String {
    errors.values().cloned().collect::<Vec<_>>().join(", ")
}

fn default_status() -> bool {
    true
}

/// Numeric input as JSON sends it or as an HTML form field sends it.
#[derive(Deserialize)]
#[serde(untagged)]
enum NumericInput {
    Number(f64),
    Text(String),
}

/// Blank or unparseable salaries become NaN so validation reports them as
/// missing instead of the extractor rejecting the whole form.
fn deserialize_salary<'de, D>(deserializer: D) -> Result<f64, D::Error>
where
    D: Deserializer<'de>,
{
    Ok(match NumericInput::deserialize(deserializer)? {
        NumericInput::Number(value) => value,
        NumericInput::Text(text) => parse_salary(&text),
    })
}

/// Blank or unparseable department ids become 0, which validation rejects.
fn deserialize_department_id<'de, D>(deserializer: D) -> Result<i32, D::Error>
where
    D: Deserializer<'de>,
{
    Ok(match NumericInput::deserialize(deserializer)? {
        NumericInput::Number(value)
            if value.fract() == 0.0
                && value >= f64::from(i32::MIN)
                && value <= f64::from(i32::MAX) =>
        {
            value as i32
        }
        NumericInput::Number(_) => 0,
        NumericInput::Text(text) => text.trim().parse().unwrap_or(0),
    })
}

/// Parses raw salary input; anything that is not a number yields NaN.
pub fn parse_salary(text: &str) -> f64 {
    text.trim().parse().unwrap_or(f64::NAN)
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, Validate)]
/// Editable employee fields. Server-managed fields (`created`, `modified`)
/// are never part of the form; `id` is only carried by the edit page.
pub struct EmployeeForm {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub id: Option<i32>,
    #[validate(length(min = 1, message = "Name is required"))]
    pub name: String,
    #[validate(length(min = 1, message = "Phone number is required"))]
    pub phone: String,
    pub email: String,
    #[serde(deserialize_with = "deserialize_salary")]
    pub salary: f64,
    #[validate(length(min = 1, message = "Date of Birth is required"))]
    pub dob: String,
    #[validate(range(min = 1, message = "Department is required"))]
    #[serde(deserialize_with = "deserialize_department_id")]
    pub department_id: i32,
    #[serde(default)]
    pub photo: Option<String>,
    #[serde(default = "default_status")]
    pub status: bool,
}

impl Default for EmployeeForm {
    fn default() -> Self {
        Self {
            id: None,
            name: String::new(),
            phone: String::new(),
            email: String::new(),
            salary: DEFAULT_SALARY_AMOUNT,
            dob: String::new(),
            department_id: 0,
            photo: None,
            status: true,
        }
    }
}

fn field_error(code: &'static str, message: &'static str) -> ValidationError {
    let mut error = ValidationError::new(code);
    error.message = Some(Cow::from(message));
    error
}

impl EmployeeForm {
    /// Runs the derived rules plus the format checks the derive cannot
    /// express, reporting every failing field at once.
    pub fn validate_form(&self) -> Result<(), ValidationErrors> {
        let mut errors = match self.validate() {
            Ok(()) => ValidationErrors::new(),
            Err(errors) => errors,
        };

        if contains_markup(&self.name) {
            errors.add("name", field_error("markup", "Name must not contain markup"));
        }

        let phone = self.phone.trim();
        if !phone.is_empty() && !is_valid_phone(phone) {
            errors.add("phone", field_error("phone", "Invalid phone number"));
        }

        let email = self.email.trim();
        if email.is_empty() {
            errors.add("email", field_error("required", "Email is required"));
        } else if !email.validate_email() {
            errors.add("email", field_error("email", "Invalid email"));
        }

        if self.salary.is_nan() {
            errors.add("salary", field_error("required", "Salary is required"));
        } else if !(self.salary.is_finite() && self.salary > 0.0) {
            errors.add("salary", field_error("range", "Salary must be positive"));
        }

        if !self.dob.trim().is_empty() && parse_date_of_birth(&self.dob).is_err() {
            errors.add("dob", field_error("date", "Invalid date"));
        }

        let photo = self.photo.as_deref().map(str::trim).unwrap_or_default();
        if !photo.is_empty() && !photo.validate_url() {
            errors.add("photo", field_error("url", "Invalid photo URL"));
        }

        if errors.is_empty() {
            Ok(())
        } else {
            Err(errors)
        }
    }

    /// Validation result keyed by field name, first message per field.
    pub fn field_errors(&self) -> BTreeMap<String, String> {
        match self.validate_form() {
            Ok(()) => BTreeMap::new(),
            Err(errors) => errors_by_field(&errors),
        }
    }

    pub fn into_new_employee(self) -> Result<NewEmployee, FormError> {
        if let Err(errors) = self.validate_form() {
            return Err(FormError::Invalid(errors_by_field(&errors)));
        }

        Ok(NewEmployee {
            name: EmployeeName::new(self.name)?,
            phone: PhoneNumber::new(self.phone)?,
            email: EmployeeEmail::new(self.email)?,
            salary: Salary::new(self.salary)?,
            dob: parse_date_of_birth(&self.dob)?,
            department_id: DepartmentId::new(self.department_id)?,
            photo: PhotoUrl::optional(self.photo.as_deref().unwrap_or_default())?,
            status: self.status,
        })
    }

    pub fn into_update_employee(self) -> Result<UpdateEmployee, FormError> {
        self.into_new_employee().map(UpdateEmployee::from)
    }
}

/// Hydrates the edit form; `created` and `modified` are dropped and `dob`
/// keeps only its date part.
impl From<&Employee> for EmployeeForm {
    fn from(employee: &Employee) -> Self {
        Self {
            id: Some(employee.id.get()),
            name: employee.name.to_string(),
            phone: employee.phone.to_string(),
            email: employee.email.to_string(),
            salary: employee.salary.get(),
            dob: employee.dob.format("%Y-%m-%d").to_string(),
            department_id: employee.department_id.get(),
            photo: employee.photo.as_ref().map(ToString::to_string),
            status: employee.status,
        }
    }
}

pub fn errors_by_field(errors: &ValidationErrors) -> BTreeMap<String, String> {
    errors
        .field_errors()
        .into_iter()
        .map(|(field, field_errors)| {
            let message = field_errors
                .iter()
                .find_map(|error| error.message.as_ref())
                .map(ToString::to_string)
                .unwrap_or_else(|| "Invalid value".to_string());
            (field.to_string(), message)
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use chrono::NaiveDate;

    use super::*;

    fn valid_form() -> EmployeeForm {
        EmployeeForm {
            name: "Ada Lovelace".to_string(),
            phone: "5551234567".to_string(),
            email: "ada@example.com".to_string(),
            salary: 85_000.0,
            dob: "1990-04-01".to_string(),
            department_id: 2,
            ..EmployeeForm::default()
        }
    }

    #[test]
    fn defaults_match_create_mode() {
        let form = EmployeeForm::default();
        assert_eq!(form.salary, DEFAULT_SALARY_AMOUNT);
        assert!(form.status);
        assert_eq!(form.id, None);
    }

    #[test]
    fn valid_form_converts_to_domain() {
        let new = valid_form().into_new_employee().expect("valid form");

        assert_eq!(new.name.as_str(), "Ada Lovelace");
        assert_eq!(new.dob, NaiveDate::from_ymd_opt(1990, 4, 1).unwrap());
        assert_eq!(new.department_id.get(), 2);
        assert_eq!(new.photo, None);
        assert!(new.status);
    }

    #[test]
    fn empty_form_reports_required_messages() {
        let form = EmployeeForm {
            salary: 0.0,
            ..EmployeeForm::default()
        };

        let errors = form.field_errors();

        assert_eq!(errors["name"], "Name is required");
        assert_eq!(errors["phone"], "Phone number is required");
        assert_eq!(errors["email"], "Email is required");
        assert_eq!(errors["salary"], "Salary must be positive");
        assert_eq!(errors["dob"], "Date of Birth is required");
        assert_eq!(errors["department_id"], "Department is required");
    }

    #[test]
    fn phone_must_have_ten_digits() {
        let form = EmployeeForm {
            phone: "12345".to_string(),
            ..valid_form()
        };

        assert_eq!(form.field_errors()["phone"], "Invalid phone number");
        assert!(matches!(
            form.into_new_employee(),
            Err(FormError::Invalid(_))
        ));
    }

    #[test]
    fn malformed_values_are_reported() {
        let form = EmployeeForm {
            email: "not-an-email".to_string(),
            salary: -5.0,
            dob: "04/01/1990".to_string(),
            photo: Some("nope".to_string()),
            ..valid_form()
        };

        let errors = form.field_errors();

        assert_eq!(errors["email"], "Invalid email");
        assert_eq!(errors["salary"], "Salary must be positive");
        assert_eq!(errors["dob"], "Invalid date");
        assert_eq!(errors["photo"], "Invalid photo URL");
    }

    #[test]
    fn blank_numeric_fields_reach_validation() {
        let form: EmployeeForm = serde_json::from_value(serde_json::json!({
            "name": "Ada Lovelace",
            "phone": "5551234567",
            "email": "ada@example.com",
            "salary": "",
            "dob": "1990-04-01",
            "department_id": ""
        }))
        .expect("blank numbers deserialize");

        assert!(form.salary.is_nan());
        assert_eq!(form.department_id, 0);
        let errors = form.field_errors();
        assert_eq!(errors["salary"], "Salary is required");
        assert_eq!(errors["department_id"], "Department is required");
    }

    #[test]
    fn numeric_fields_accept_numbers_and_text() {
        let form: EmployeeForm = serde_json::from_value(serde_json::json!({
            "name": "Ada Lovelace",
            "phone": "5551234567",
            "email": "ada@example.com",
            "salary": "85000.5",
            "dob": "1990-04-01",
            "department_id": 3
        }))
        .expect("mixed numbers deserialize");

        assert_eq!(form.salary, 85_000.5);
        assert_eq!(form.department_id, 3);
        assert!(form.field_errors().is_empty());
        assert!(parse_salary("abc").is_nan());
    }

    #[test]
    fn markup_in_name_is_reported() {
        let form = EmployeeForm {
            name: "<b>Ada</b>".to_string(),
            ..valid_form()
        };

        assert_eq!(form.field_errors()["name"], "Name must not contain markup");

        let plain = EmployeeForm {
            name: "Smith & Jones".to_string(),
            ..valid_form()
        };
        let new = plain.into_new_employee().expect("plain text is valid");
        assert_eq!(new.name.as_str(), "Smith & Jones");
    }

    #[test]
    fn timestamp_dob_keeps_date_part() {
        let form = EmployeeForm {
            dob: "1990-04-01T00:00:00.000Z".to_string(),
            ..valid_form()
        };

        let update = form.into_update_employee().expect("valid form");
        assert_eq!(update.dob, NaiveDate::from_ymd_opt(1990, 4, 1).unwrap());
    }

    #[test]
    fn blank_photo_means_no_photo() {
        let form = EmployeeForm {
            photo: Some("  ".to_string()),
            ..valid_form()
        };

        assert_eq!(form.into_new_employee().unwrap().photo, None);
    }

    #[test]
    fn json_payload_ignores_server_fields() {
        let form: EmployeeForm = serde_json::from_value(serde_json::json!({
            "name": "Ada",
            "phone": "5551234567",
            "email": "ada@example.com",
            "salary": 1000,
            "dob": "1990-04-01",
            "department_id": 1,
            "created": "2024-01-01T00:00:00",
            "modified": "2024-01-01T00:00:00"
        }))
        .expect("deserializes");

        assert!(form.status);
        assert_eq!(form.photo, None);
        assert!(form.validate_form().is_ok());
    }
}
