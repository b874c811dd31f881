use desk_booker::{
    adapters::postgres::{PostgresBookingStore, PostgresDeskDirectory},
    api::{handlers::AppState, router::create_router},
    application::booking::ServiceDependencies,
    config,
};
use std::sync::Arc;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error + Send + Sync>> {
    // Initialize tracing
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| config::DEFAULT_LOG_FILTER.into()),
        )
        .with(tracing_subscriber::fmt::layer())
        .init();

    let database_url = config::database_url();

    // Initialize database connection pool
    let pool = sqlx::postgres::PgPoolOptions::new()
        .max_connections(config::database_max_connections())
        .connect(&database_url)
        .await?;

    sqlx::migrate!("./migrations").run(&pool).await?;
    tracing::info!("Database migrations applied");

    // Initialize adapters
    let booking_store = Arc::new(PostgresBookingStore::new(pool.clone()));
    let service_deps = ServiceDependencies {
        desk_directory: Arc::new(PostgresDeskDirectory::new(pool.clone())),
        booking_store: booking_store.clone(),
        booking_ledger: booking_store,
    };

    let app = create_router(Arc::new(AppState { service_deps }));

    let addr = format!("0.0.0.0:{}", config::http_port());
    let listener = tokio::net::TcpListener::bind(&addr).await?;

    tracing::info!("Server listening on {}", addr);

    axum::serve(listener, app).await?;

    Ok(())
}
