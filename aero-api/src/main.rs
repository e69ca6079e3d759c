use std::net::SocketAddr;
use std::sync::Arc;

use aero_api::{app, AppState};
use aero_store::{DbClient, PostgresBookingRepository, PostgresFlightRepository};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

#[tokio::main]
async fn main() {
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "aero_api=debug,tower_http=debug,axum::rejection=trace".into()),
        )
        .with(tracing_subscriber::fmt::layer())
        .init();

    let config = aero_store::app_config::Config::load().expect("Failed to load config");
    tracing::info!("Starting Aero API on port {}", config.server.port);

    let db = match DbClient::new(&config.database).await {
        Ok(db) => db,
        Err(e) => {
            tracing::error!("Failed to initialize connection pool: {e}");
            std::process::exit(1);
        }
    };

    // Fatal: do not accept traffic against a database we cannot reach.
    if let Err(e) = db.ping().await {
        tracing::error!("Database liveness check failed: {e}");
        std::process::exit(1);
    }

    if let Err(e) = db.migrate().await {
        tracing::error!("Database migration failed: {e}");
        std::process::exit(1);
    }

    let app_state = AppState {
        flight_repo: Arc::new(PostgresFlightRepository::new(db.pool.clone())),
        booking_repo: Arc::new(PostgresBookingRepository::new(db.pool.clone())),
    };

    let app = app(app_state);

    let addr = SocketAddr::from(([0, 0, 0, 0], config.server.port));
    tracing::info!("Listening on {}", addr);

    let listener = tokio::net::TcpListener::bind(addr)
        .await
        .expect("Failed to bind listener");
    axum::serve(listener, app).await.expect("Server error");
}
