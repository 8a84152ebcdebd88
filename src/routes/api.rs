//! JSON endpoints mounted under the configured API prefix (`/dev`).

use actix_web::error::{InternalError, JsonPayloadError, QueryPayloadError};
use actix_web::{HttpRequest, HttpResponse, Responder, delete, get, post, put, web};
use chrono::Local;

use crate::dto::api::{EmployeeEnvelope, EmployeesQuery, ErrorResponse};
use crate::forms::employee::EmployeeForm;
use crate::repository::DieselRepository;
use crate::services::{
    ServiceError, dashboard as dashboard_service, departments as departments_service,
    employees as employees_service,
};

fn error_body(message: impl Into<String>) -> ErrorResponse {
    ErrorResponse {
        error: message.into(),
    }
}

/// Logs the failure and renders it as `{"error": message}`.
fn error_response(err: ServiceError, action: &str) -> HttpResponse {
    match err {
        ServiceError::NotFound => HttpResponse::NotFound().json(error_body(err.to_string())),
        ServiceError::Validation(_)
        | ServiceError::TypeConstraint(_)
        | ServiceError::InvalidReference => {
            log::error!("Rejected request to {action}: {err}");
            HttpResponse::BadRequest().json(error_body(err.to_string()))
        }
        ServiceError::Repository(_) => {
            log::error!("Failed to {action}: {err}");
            HttpResponse::InternalServerError().json(error_body(err.to_string()))
        }
    }
}

/// Extractor configuration so malformed bodies answer with the same error shape.
pub fn json_config() -> web::JsonConfig {
    web::JsonConfig::default().error_handler(|err: JsonPayloadError, _req: &HttpRequest| {
        let response = HttpResponse::BadRequest().json(error_body(err.to_string()));
        InternalError::from_response(err, response).into()
    })
}

pub fn query_config() -> web::QueryConfig {
    web::QueryConfig::default().error_handler(|err: QueryPayloadError, _req: &HttpRequest| {
        let response = HttpResponse::BadRequest().json(error_body(err.to_string()));
        InternalError::from_response(err, response).into()
    })
}

#[get("/employees")]
pub async fn api_list_employees(
    repo: web::Data<DieselRepository>,
    query: web::Query<EmployeesQuery>,
) -> impl Responder {
    match employees_service::list_employees(repo.get_ref(), &query) {
        Ok(page) => HttpResponse::Ok().json(page),
        Err(err) => error_response(err, "list employees"),
    }
}

#[get("/employee/{id}")]
pub async fn api_get_employee(
    id: web::Path<i32>,
    repo: web::Data<DieselRepository>,
) -> impl Responder {
    match employees_service::get_employee(repo.get_ref(), id.into_inner()) {
        Ok(employee) => HttpResponse::Ok().json(EmployeeEnvelope {
            employee_data: employee,
        }),
        Err(err) => error_response(err, "fetch employee"),
    }
}

#[post("/employees")]
pub async fn api_create_employee(
    repo: web::Data<DieselRepository>,
    web::Json(form): web::Json<EmployeeForm>,
) -> impl Responder {
    match employees_service::create_employee(repo.get_ref(), form) {
        Ok(employee) => HttpResponse::Created().json(EmployeeEnvelope {
            employee_data: employee,
        }),
        Err(err) => error_response(err, "create employee"),
    }
}

#[put("/employees/{id}")]
pub async fn api_update_employee(
    id: web::Path<i32>,
    repo: web::Data<DieselRepository>,
    web::Json(form): web::Json<EmployeeForm>,
) -> impl Responder {
    match employees_service::update_employee(repo.get_ref(), id.into_inner(), form) {
        Ok(employee) => HttpResponse::Ok().json(EmployeeEnvelope {
            employee_data: employee,
        }),
        Err(err) => error_response(err, "update employee"),
    }
}

#[delete("/employee/{id}")]
pub async fn api_delete_employee(
    id: web::Path<i32>,
    repo: web::Data<DieselRepository>,
) -> impl Responder {
    match employees_service::delete_employee(repo.get_ref(), id.into_inner()) {
        Ok(response) => HttpResponse::Ok().json(response),
        Err(err) => error_response(err, "delete employee"),
    }
}

#[get("/departments/get-all-departments")]
pub async fn api_list_departments(repo: web::Data<DieselRepository>) -> impl Responder {
    match departments_service::list_departments(repo.get_ref()) {
        Ok(departments) => HttpResponse::Ok().json(departments),
        Err(err) => error_response(err, "list departments"),
    }
}

#[get("/dashboard/department-wise-highest-salary")]
pub async fn api_department_highest_salary(repo: web::Data<DieselRepository>) -> impl Responder {
    match dashboard_service::department_highest_salaries(repo.get_ref()) {
        Ok(rows) => HttpResponse::Ok().json(rows),
        Err(err) => error_response(err, "load highest salaries"),
    }
}

#[get("/dashboard/salary-range-count")]
pub async fn api_salary_range_count(repo: web::Data<DieselRepository>) -> impl Responder {
    match dashboard_service::salary_range_counts(repo.get_ref()) {
        Ok(rows) => HttpResponse::Ok().json(rows),
        Err(err) => error_response(err, "load salary ranges"),
    }
}

#[get("/dashboard/youngest-by-department")]
pub async fn api_youngest_by_department(repo: web::Data<DieselRepository>) -> impl Responder {
    let today = Local::now().date_naive();
    match dashboard_service::youngest_by_department(repo.get_ref(), today) {
        Ok(rows) => HttpResponse::Ok().json(rows),
        Err(err) => error_response(err, "load youngest employees"),
    }
}

/// Registers every JSON endpoint on the given scope.
pub fn configure(cfg: &mut web::ServiceConfig) {
    cfg.app_data(json_config())
        .app_data(query_config())
        .service(api_list_employees)
        .service(api_get_employee)
        .service(api_create_employee)
        .service(api_update_employee)
        .service(api_delete_employee)
        .service(api_list_departments)
        .service(api_department_highest_salary)
        .service(api_salary_range_count)
        .service(api_youngest_by_department);
}
