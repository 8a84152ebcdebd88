//! Wire shapes exchanged over the `/dev` REST API.
//!
//! Both the server and the typed client use these, so every type derives
//! `Serialize` and `Deserialize` with the field names the browser client
//! expects.

use serde::{Deserialize, Serialize};

use crate::domain::employee::Employee;
use crate::repository::DEFAULT_PAGE_SIZE;

/// Query string of `GET /employees`.
#[derive(Debug, Default, Clone, Serialize, Deserialize)]
pub struct EmployeesQuery {
    pub page: Option<usize>,
    #[serde(rename = "pageSize")]
    pub page_size: Option<usize>,
}

impl EmployeesQuery {
    pub fn page(&self) -> usize {
        self.page.unwrap_or(1)
    }

    pub fn page_size(&self) -> usize {
        self.page_size.unwrap_or(DEFAULT_PAGE_SIZE)
    }
}

/// One page of employees.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct EmployeesPage {
    pub employees: Vec<Employee>,
    #[serde(rename = "totalPages")]
    pub total_pages: usize,
}

/// Single employee wrapped the way the fetch, create and update
/// endpoints return it.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct EmployeeEnvelope {
    #[serde(rename = "employeeData")]
    pub employee_data: Employee,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct DeleteResponse {
    pub id: i32,
    pub deleted: bool,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ErrorResponse {
    pub error: String,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn query_defaults() {
        let query: EmployeesQuery = serde_json::from_str("{}").unwrap();
        assert_eq!(query.page(), 1);
        assert_eq!(query.page_size(), DEFAULT_PAGE_SIZE);

        let query: EmployeesQuery =
            serde_json::from_str(r#"{"page": 3, "pageSize": 25}"#).unwrap();
        assert_eq!(query.page(), 3);
        assert_eq!(query.page_size(), 25);
    }

    #[test]
    fn page_uses_camel_case_total() {
        let page = EmployeesPage {
            employees: vec![],
            total_pages: 4,
        };

        let value = serde_json::to_value(&page).unwrap();
        assert_eq!(value, serde_json::json!({"employees": [], "totalPages": 4}));
    }
}
