use constitution_api::{
    AppState,
    config::{AppConfig, Env},
    create_router,
    repository::PostgresRepository,
};
use sqlx::postgres::PgPoolOptions;
use tokio::net::TcpListener;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

/// main
///
/// Loads configuration, sets up logging, connects the pool and serves the API.
#[tokio::main]
async fn main() {
    // 1. Configuration (fail-fast on missing DATABASE_URL).
    dotenv::dotenv().ok();
    let config = AppConfig::load();

    // 2. Logging. RUST_LOG wins over the defaults below.
    let env_filter = tracing_subscriber::EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| "constitution_api=debug,tower_http=info,sqlx=warn".into());

    match config.env {
        Env::Local => {
            tracing_subscriber::registry()
                .with(env_filter)
                .with(tracing_subscriber::fmt::layer().pretty())
                .init();
        }
        Env::Production => {
            // JSON lines for the log aggregator.
            tracing_subscriber::registry()
                .with(env_filter)
                .with(tracing_subscriber::fmt::layer().json())
                .init();
        }
    }

    tracing::info!("Application starting in {:?} mode", config.env);

    // 3. Database pool. Every repository call borrows one connection per procedure.
    let pool = PgPoolOptions::new()
        .max_connections(config.db_max_connections)
        .connect(&config.db_url)
        .await
        .expect("FATAL: Failed to connect to Postgres. Check DATABASE_URL.");

    let bind_addr = config.bind_addr.clone();
    let swagger = config.env == Env::Local;
    tracing::info!(
        permits = config.rate_limit_permits,
        window_secs = config.rate_limit_window_secs,
        "Fixed-window rate limiter configured"
    );

    // 4. State and router.
    let app_state = AppState::from_postgres(PostgresRepository::new(pool), config);
    let app = create_router(app_state);

    let listener = TcpListener::bind(&bind_addr)
        .await
        .expect("FATAL: Failed to bind the HTTP listener. Check BIND_ADDR.");

    tracing::info!("Listening on {}", bind_addr);
    if swagger {
        tracing::info!("API Documentation (Swagger UI) available at: http://{}/swagger-ui", bind_addr);
    }

    axum::serve(listener, app)
        .await
        .expect("FATAL: HTTP server terminated unexpectedly");
}
