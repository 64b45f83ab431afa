use actix_web::{web, App, HttpServer};
use dotenv::dotenv;
use log::{error, info};
use std::sync::Arc;

use employee_functions::config::AppConfig;
use employee_functions::db::{self, EmployeeStore, PgEmployeeStore};
use employee_functions::handlers;
use employee_functions::utils::event_grid::{EventGridPublisher, EventPublisher};

fn startup_error<E: std::fmt::Display>(context: &str, err: E) -> std::io::Error {
    error!("{}: {}", context, err);
    std::io::Error::new(std::io::ErrorKind::Other, format!("{}: {}", context, err))
}

#[actix_web::main]
async fn main() -> std::io::Result<()> {
    dotenv().ok();
    env_logger::init();

    let config = AppConfig::from_env().map_err(|err| startup_error("Invalid configuration", err))?;

    let pool = db::create_pool(&config)
        .await
        .map_err(|err| startup_error("Failed to connect to the database", err))?;
    db::ensure_schema(&pool)
        .await
        .map_err(|err| startup_error("Failed to prepare the employees table", err))?;

    let publisher = EventGridPublisher::new(&config.event_grid)
        .map_err(|err| startup_error("Failed to create Event Grid client", err))?;

    let store: Arc<dyn EmployeeStore> = Arc::new(PgEmployeeStore::new(pool));
    let publisher: Arc<dyn EventPublisher> = Arc::new(publisher);
    let store = web::Data::from(store);
    let publisher = web::Data::from(publisher);

    info!("Starting server at {}", config.bind_address);

    HttpServer::new(move || {
        App::new()
            .app_data(store.clone())
            .app_data(publisher.clone())
            .configure(handlers::configure)
    })
    .bind(&config.bind_address)?
    .run()
    .await
}
