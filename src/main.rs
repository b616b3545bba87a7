use std::time::Duration;

use crate::{
    clock::SystemClock, configuration::Configuration, configuration_handler::ConfigurationHandler,
    database_interface::DatabaseInterface, http::create_app, local_repository::LocalRepository,
    types::Booking,
};
use tokio::time::sleep;
use tracing::{error, info};
use tracing_subscriber::EnvFilter;

mod booking_manager;
mod clock;
mod configuration;
mod configuration_handler;
mod database_interface;
mod error;
mod http;
mod local_repository;
mod repository;
mod schema;
#[cfg(test)]
mod testutils;
mod types;

#[tokio::main]
async fn main() -> std::io::Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .init();

    println!("########################");
    println!("# Room Booking Manager #");
    println!("########################");

    let configuration = ConfigurationHandler::parse_arguments();

    let address = format!("0.0.0.0:{}", configuration.port());
    println!("Accessable at:\n{}", address);
    let listener = tokio::net::TcpListener::bind(address).await?;

    let app = if let Some(database_url) = configuration.database_url() {
        let backend = loop {
            match DatabaseInterface::new(&database_url) {
                Ok(backend) => {
                    info!("Successfully connected to database");
                    break backend;
                }
                Err(err) => {
                    error!(?err, "Failed to establish database connection: {database_url}. Retry in 1 sec. You may want to restart it with database disabled (impersistent bookings).");
                    sleep(Duration::from_secs(1)).await;
                }
            }
        };
        create_app(backend.clone(), backend, SystemClock)
    } else {
        let rooms = LocalRepository::with_example_rooms(configuration.rooms());
        info!(rooms = configuration.rooms(), "Running without database");
        create_app(rooms, LocalRepository::<Booking>::default(), SystemClock)
    };

    axum::serve(listener, app).await
}
