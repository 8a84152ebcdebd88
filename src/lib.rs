#[cfg(feature = "server")]
use actix_cors::Cors;
#[cfg(feature = "server")]
use actix_files::Files;
#[cfg(feature = "server")]
use actix_web::cookie::Key;
#[cfg(feature = "server")]
use actix_web::{App, HttpServer, middleware, web};
#[cfg(feature = "server")]
use actix_web_flash_messages::{FlashMessagesFramework, storage::CookieMessageStore};
#[cfg(feature = "server")]
use tera::Tera;

#[cfg(feature = "server")]
use crate::db::{PoolOptions, establish_connection_pool};
#[cfg(feature = "server")]
use crate::models::config::ServerConfig;
#[cfg(feature = "server")]
use crate::repository::DieselRepository;

#[cfg(feature = "client")]
pub mod client;
#[cfg(feature = "data")]
pub mod db;
#[cfg(feature = "data")]
pub mod domain;
#[cfg(feature = "data")]
pub mod dto;
#[cfg(feature = "data")]
mod error_conversions;
#[cfg(feature = "data")]
pub mod forms;
#[cfg(feature = "data")]
pub mod models;
#[cfg(feature = "data")]
pub mod pagination;
#[cfg(feature = "data")]
pub mod repository;
#[cfg(feature = "server")]
pub mod routes;
#[cfg(feature = "data")]
pub mod schema;
#[cfg(feature = "server")]
pub mod services;

/// Registers the browser pages and, under `api_prefix`, the JSON API.
#[cfg(feature = "server")]
pub fn configure_services(cfg: &mut web::ServiceConfig, api_prefix: &str) {
    use crate::routes::dashboard::show_dashboard;
    use crate::routes::employees::{
        add_employee, delete_employee, edit_employee, save_employee, show_index,
    };

    cfg.service(web::scope(api_prefix).configure(routes::api::configure))
        .service(show_index)
        .service(add_employee)
        .service(edit_employee)
        .service(save_employee)
        .service(delete_employee)
        .service(show_dashboard);
}

/// Builds and runs the Actix-Web HTTP server using the provided configuration.
#[cfg(feature = "server")]
pub async fn run(server_config: ServerConfig) -> std::io::Result<()> {
    let pool_options = PoolOptions {
        max_size: server_config.db_pool_size,
        busy_timeout: Some(std::time::Duration::from_secs(
            server_config.db_busy_timeout_secs,
        )),
        ..PoolOptions::default()
    };

    // Establish Diesel connection pool for the SQLite database.
    let pool = establish_connection_pool(&server_config.database_url, &pool_options).map_err(
        |e| std::io::Error::other(format!("Failed to establish database connection: {e}")),
    )?;

    let repo = DieselRepository::new(pool);

    let secret_key = Key::try_from(server_config.secret.as_bytes())
        .map_err(|e| std::io::Error::other(format!("Invalid secret key: {e}")))?;

    let message_store = CookieMessageStore::builder(secret_key).build();
    let message_framework = FlashMessagesFramework::builder(message_store).build();

    let tera = Tera::new(&server_config.templates_dir)
        .map_err(|e| std::io::Error::other(format!("Template parsing error(s): {e}")))?;

    let bind_address = (server_config.address.clone(), server_config.port);
    log::info!(
        "Starting server on {}:{} with API under {}",
        bind_address.0,
        bind_address.1,
        server_config.api_prefix
    );

    HttpServer::new(move || {
        let api_prefix = server_config.api_prefix.clone();
        App::new()
            .wrap(Cors::permissive())
            .wrap(message_framework.clone())
            .wrap(middleware::Compress::default())
            .wrap(middleware::Logger::default())
            .service(Files::new("/assets", "./assets"))
            .configure(move |cfg| configure_services(cfg, &api_prefix))
            .app_data(web::Data::new(tera.clone()))
            .app_data(web::Data::new(repo.clone()))
            .app_data(web::Data::new(server_config.clone()))
    })
    .bind(bind_address)?
    .run()
    .await
}
