//! Typed wrapper over the `/dev` REST API.

use async_trait::async_trait;
use reqwest::{Client, StatusCode};
use serde::Serialize;
use serde::de::DeserializeOwned;

use crate::client::error::{ClientError, ClientResult};
use crate::domain::dashboard::{DepartmentSalary, SalaryRangeCount, YoungestEmployee};
use crate::domain::department::Department;
use crate::domain::employee::Employee;
use crate::dto::api::{DeleteResponse, EmployeeEnvelope, EmployeesPage, ErrorResponse};
use crate::forms::employee::EmployeeForm;

/// Every REST call the views need. Implemented over HTTP by
/// [`HttpEmployeeApi`]; tests substitute an in-memory double.
#[async_trait]
pub trait EmployeeApi: Send + Sync {
    async fn list_employees(&self, page: usize, page_size: usize) -> ClientResult<EmployeesPage>;
    async fn get_employee(&self, id: i32) -> ClientResult<Employee>;
    async fn create_employee(&self, form: &EmployeeForm) -> ClientResult<Employee>;
    async fn update_employee(&self, id: i32, form: &EmployeeForm) -> ClientResult<Employee>;
    async fn delete_employee(&self, id: i32) -> ClientResult<DeleteResponse>;
    async fn list_departments(&self) -> ClientResult<Vec<Department>>;
    async fn department_highest_salaries(&self) -> ClientResult<Vec<DepartmentSalary>>;
    async fn salary_range_counts(&self) -> ClientResult<Vec<SalaryRangeCount>>;
    async fn youngest_by_department(&self) -> ClientResult<Vec<YoungestEmployee>>;
}

#[derive(Debug, Clone)]
pub struct HttpEmployeeApi {
    client: Client,
    base_url: String,
}

impl HttpEmployeeApi {
    /// `base_url` includes the API prefix, e.g. `http://localhost:8080/dev`.
    pub fn new(base_url: &str) -> ClientResult<Self> {
        let client = Client::builder()
            .timeout(std::time::Duration::from_secs(30))
            .build()?;
        Ok(Self {
            client,
            base_url: base_url.trim_end_matches('/').to_string(),
        })
    }

    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    fn url(&self, path: &str) -> String {
        format!("{}/{}", self.base_url, path.trim_start_matches('/'))
    }

    async fn handle_response<T: DeserializeOwned>(
        &self,
        response: reqwest::Response,
    ) -> ClientResult<T> {
        let status = response.status();
        if !status.is_success() {
            let text = response.text().await?;
            let message = serde_json::from_str::<ErrorResponse>(&text)
                .map(|body| body.error)
                .unwrap_or(text);
            return match status {
                StatusCode::NOT_FOUND => Err(ClientError::NotFound(message)),
                StatusCode::BAD_REQUEST => Err(ClientError::Validation(message)),
                _ => Err(ClientError::Internal(message)),
            };
        }
        let bytes = response.bytes().await?;
        Ok(serde_json::from_slice(&bytes)?)
    }

    async fn get<T: DeserializeOwned>(&self, path: &str) -> ClientResult<T> {
        let response = self.client.get(self.url(path)).send().await?;
        self.handle_response(response).await
    }

    async fn send_json<T: DeserializeOwned, B: Serialize + Sync>(
        &self,
        method: reqwest::Method,
        path: &str,
        body: &B,
    ) -> ClientResult<T> {
        let response = self
            .client
            .request(method, self.url(path))
            .json(body)
            .send()
            .await?;
        self.handle_response(response).await
    }
}

#[async_trait]
impl EmployeeApi for HttpEmployeeApi {
    async fn list_employees(&self, page: usize, page_size: usize) -> ClientResult<EmployeesPage> {
        self.get(&format!("employees?page={page}&pageSize={page_size}"))
            .await
    }

    async fn get_employee(&self, id: i32) -> ClientResult<Employee> {
        let envelope: EmployeeEnvelope = self.get(&format!("employee/{id}")).await?;
        Ok(envelope.employee_data)
    }

    async fn create_employee(&self, form: &EmployeeForm) -> ClientResult<Employee> {
        let envelope: EmployeeEnvelope = self
            .send_json(reqwest::Method::POST, "employees", form)
            .await?;
        Ok(envelope.employee_data)
    }

    async fn update_employee(&self, id: i32, form: &EmployeeForm) -> ClientResult<Employee> {
        let envelope: EmployeeEnvelope = self
            .send_json(reqwest::Method::PUT, &format!("employees/{id}"), form)
            .await?;
        Ok(envelope.employee_data)
    }

    async fn delete_employee(&self, id: i32) -> ClientResult<DeleteResponse> {
        let response = self
            .client
            .delete(self.url(&format!("employee/{id}")))
            .send()
            .await?;
        self.handle_response(response).await
    }

    async fn list_departments(&self) -> ClientResult<Vec<Department>> {
        self.get("departments/get-all-departments").await
    }

    async fn department_highest_salaries(&self) -> ClientResult<Vec<DepartmentSalary>> {
        self.get("dashboard/department-wise-highest-salary").await
    }

    async fn salary_range_counts(&self) -> ClientResult<Vec<SalaryRangeCount>> {
        self.get("dashboard/salary-range-count").await
    }

    async fn youngest_by_department(&self) -> ClientResult<Vec<YoungestEmployee>> {
        self.get("dashboard/youngest-by-department").await
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn base_url_is_normalized() {
        let api = HttpEmployeeApi::new("http://localhost:8080/dev/").expect("client builds");

        assert_eq!(api.base_url(), "http://localhost:8080/dev");
        assert_eq!(api.url("/employees"), "http://localhost:8080/dev/employees");
        assert_eq!(api.url("employee/3"), "http://localhost:8080/dev/employee/3");
    }
}
