#[cfg(feature = "server")]
use actix_cors::Cors;
#[cfg(feature = "server")]
use actix_web::{App, HttpServer, middleware, web};

#[cfg(feature = "server")]
use crate::db::establish_connection_pool;
#[cfg(feature = "server")]
use crate::models::config::ServerConfig;
#[cfg(feature = "server")]
use crate::repository::DieselRepository;

pub mod db;
pub mod domain;
#[cfg(feature = "server")]
pub mod dto;
pub mod error_conversions;
#[cfg(feature = "server")]
pub mod forms;
pub mod models;
pub mod pagination;
pub mod repository;
#[cfg(feature = "server")]
pub mod routes;
pub mod schema;
#[cfg(feature = "server")]
pub mod services;

/// Registers the JSON API under `/api` together with the shared app data.
#[cfg(feature = "server")]
pub fn configure(cfg: &mut web::ServiceConfig, repo: DieselRepository) {
    use crate::routes::{clients, orders};

    cfg.app_data(web::Data::new(repo))
        .app_data(web::QueryConfig::default().error_handler(routes::query_error_handler))
        .app_data(web::JsonConfig::default().error_handler(routes::json_error_handler))
        .app_data(web::PathConfig::default().error_handler(routes::path_error_handler))
        .service(
            web::scope("/api")
                .service(clients::add_client)
                .service(clients::show_client)
                .service(orders::create_order)
                .service(orders::search_orders)
                .service(orders::show_order),
        );
}

/// Builds and runs the Actix-Web HTTP server using the provided configuration.
#[cfg(feature = "server")]
pub async fn run(server_config: ServerConfig) -> std::io::Result<()> {
    // Establish Diesel connection pool for the SQLite database.
    let pool = establish_connection_pool(&server_config.database_url).map_err(|e| {
        std::io::Error::other(format!("Failed to establish database connection: {e}"))
    })?;

    let repo = DieselRepository::new(pool);

    let bind_address = (server_config.address.clone(), server_config.port);
    log::info!(
        "Starting server on {}:{}",
        server_config.address,
        server_config.port
    );

    HttpServer::new(move || {
        App::new()
            .wrap(Cors::permissive())
            .wrap(middleware::Compress::default())
            .wrap(middleware::Logger::default())
            .configure(|cfg| configure(cfg, repo.clone()))
    })
    .bind(bind_address)?
    .run()
    .await
}
