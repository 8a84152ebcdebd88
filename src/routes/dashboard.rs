use actix_web::{HttpResponse, Responder, get, web};
use actix_web_flash_messages::IncomingFlashMessages;
use chrono::Local;
use tera::Tera;

use crate::repository::DieselRepository;
use crate::routes::{base_context, render_template};
use crate::services::dashboard as dashboard_service;

#[get("/dashboard")]
pub async fn show_dashboard(
    repo: web::Data<DieselRepository>,
    flash_messages: IncomingFlashMessages,
    tera: web::Data<Tera>,
) -> impl Responder {
    match dashboard_service::load_dashboard(repo.get_ref(), Local::now().date_naive()) {
        Ok(data) => {
            let mut context = base_context(&flash_messages, "dashboard");
            context.insert("highest_salaries", &data.highest_salaries);
            context.insert("salary_ranges", &data.salary_ranges);
            context.insert("youngest", &data.youngest);
            render_template(&tera, "dashboard/index.html", &context)
        }
        Err(err) => {
            log::error!("Failed to load the dashboard: {err}");
            HttpResponse::InternalServerError().finish()
        }
    }
}
