use actix_web::{HttpResponse, Responder, get, post, web};
use actix_web_flash_messages::{FlashMessage, IncomingFlashMessages};
use tera::Tera;

use crate::dto::api::EmployeesQuery;
use crate::dto::employees::EmployeeFormPageData;
use crate::forms::employee::EmployeeForm;
use crate::repository::DieselRepository;
use crate::routes::{base_context, redirect, render_template};
use crate::services::{ServiceError, employees as employees_service};

fn render_form(
    tera: &Tera,
    flash_messages: &IncomingFlashMessages,
    data: &EmployeeFormPageData,
) -> HttpResponse {
    let current_page = if data.is_edit() {
        "edit-employee"
    } else {
        "add-employee"
    };
    let mut context = base_context(flash_messages, current_page);
    context.insert("form", &data.form);
    context.insert("departments", &data.departments);
    context.insert("errors", &data.errors);
    context.insert("is_edit", &data.is_edit());

    render_template(tera, "employees/form.html", &context)
}

#[get("/")]
pub async fn show_index(
    params: web::Query<EmployeesQuery>,
    repo: web::Data<DieselRepository>,
    flash_messages: IncomingFlashMessages,
    tera: web::Data<Tera>,
) -> impl Responder {
    match employees_service::load_index_page(repo.get_ref(), &params) {
        Ok(data) => {
            let mut context = base_context(&flash_messages, "index");
            context.insert("employees", &data.employees);
            context.insert("page_sizes", &[5, 10, 25, 50]);
            render_template(&tera, "employees/index.html", &context)
        }
        Err(err) => {
            log::error!("Failed to list employees: {err}");
            HttpResponse::InternalServerError().finish()
        }
    }
}

#[get("/add-employee")]
pub async fn add_employee(
    repo: web::Data<DieselRepository>,
    flash_messages: IncomingFlashMessages,
    tera: web::Data<Tera>,
) -> impl Responder {
    match employees_service::load_new_employee_page(repo.get_ref()) {
        Ok(data) => render_form(&tera, &flash_messages, &data),
        Err(err) => {
            log::error!("Failed to load the employee form: {err}");
            HttpResponse::InternalServerError().finish()
        }
    }
}

#[get("/edit-employee/{employee_id}")]
pub async fn edit_employee(
    employee_id: web::Path<i32>,
    repo: web::Data<DieselRepository>,
    flash_messages: IncomingFlashMessages,
    tera: web::Data<Tera>,
) -> impl Responder {
    match employees_service::load_edit_employee_page(repo.get_ref(), employee_id.into_inner()) {
        Ok(data) => render_form(&tera, &flash_messages, &data),
        Err(ServiceError::NotFound) => {
            FlashMessage::error("Employee not found.").send();
            redirect("/")
        }
        Err(err) => {
            log::error!("Failed to load the employee: {err}");
            HttpResponse::InternalServerError().finish()
        }
    }
}

#[post("/employee/save")]
pub async fn save_employee(
    repo: web::Data<DieselRepository>,
    flash_messages: IncomingFlashMessages,
    tera: web::Data<Tera>,
    web::Form(form): web::Form<EmployeeForm>,
) -> impl Responder {
    let back = match form.id {
        Some(id) => format!("/edit-employee/{id}"),
        None => "/add-employee".to_string(),
    };

    match employees_service::save_employee(repo.get_ref(), form.clone()) {
        Ok(_) => {
            FlashMessage::success("Employee saved.").send();
            redirect("/")
        }
        Err(ServiceError::Validation(errors)) => {
            match employees_service::load_invalid_form_page(repo.get_ref(), form, errors) {
                Ok(data) => render_form(&tera, &flash_messages, &data),
                Err(err) => {
                    log::error!("Failed to load the employee form: {err}");
                    HttpResponse::InternalServerError().finish()
                }
            }
        }
        Err(ServiceError::NotFound) => {
            FlashMessage::error("Employee not found.").send();
            redirect("/")
        }
        Err(err @ (ServiceError::InvalidReference | ServiceError::TypeConstraint(_))) => {
            FlashMessage::error(err.to_string()).send();
            redirect(&back)
        }
        Err(err) => {
            log::error!("Failed to save the employee: {err}");
            FlashMessage::error("Failed to save the employee.").send();
            redirect(&back)
        }
    }
}

#[post("/employee/{employee_id}/delete")]
pub async fn delete_employee(
    employee_id: web::Path<i32>,
    repo: web::Data<DieselRepository>,
) -> impl Responder {
    match employees_service::delete_employee(repo.get_ref(), employee_id.into_inner()) {
        Ok(_) => FlashMessage::success("Employee deleted.").send(),
        Err(ServiceError::NotFound) => FlashMessage::error("Employee not found.").send(),
        Err(err) => {
            log::error!("Failed to delete the employee: {err}");
            FlashMessage::error("Failed to delete the employee.").send();
        }
    }
    redirect("/")
}
