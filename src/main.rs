//! Inventario Server - IT Equipment Inventory
//!
//! REST API server for tracking notebooks, celulares and terminais.

use axum::{
    routing::{delete, get, patch, post},
    Router,
};
use std::net::SocketAddr;
use std::sync::Arc;
use tower_http::{
    compression::CompressionLayer,
    cors::{Any, CorsLayer},
    trace::TraceLayer,
};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

use inventario_server::{
    api, config::AppConfig, repository::Repository, services::Services, AppState,
};

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    // Load environment variables from .env file
    dotenvy::dotenv().ok();

    // Load configuration
    let config = AppConfig::load().expect("Failed to load configuration");

    // Initialize tracing
    let filter = tracing_subscriber::EnvFilter::try_from_default_env().unwrap_or_else(|_| {
        format!("inventario_server={},tower_http=debug", config.logging.level).into()
    });

    let registry = tracing_subscriber::registry().with(filter);
    if config.logging.format == "json" {
        registry
            .with(tracing_subscriber::fmt::layer().json())
            .init();
    } else {
        registry.with(tracing_subscriber::fmt::layer()).init();
    }

    tracing::info!("Starting Inventario Server v{}", env!("CARGO_PKG_VERSION"));

    // Save server address before moving config
    let server_host = config.server.host.clone();
    let server_port = config.server.port;

    // Create repository and services
    let repository = Repository::new();
    repository.seed(&config.seed).await;
    let services = Services::new(repository);

    // Create application state
    let state = AppState {
        config: Arc::new(config),
        services: Arc::new(services),
    };

    // Build router
    let app = create_router(state);

    // Start server
    let addr = SocketAddr::new(server_host.parse().expect("Invalid host address"), server_port);

    tracing::info!("Server listening on http://{}", addr);

    let listener = tokio::net::TcpListener::bind(addr).await?;
    axum::serve(listener, app).await?;

    Ok(())
}

/// Create the application router with all routes
fn create_router(state: AppState) -> Router {
    // CORS configuration
    let cors = CorsLayer::new()
        .allow_origin(Any)
        .allow_methods(Any)
        .allow_headers(Any);

    let api = Router::new()
        // Health check
        .route("/health", get(api::health::health_check))
        .route("/ready", get(api::health::readiness_check))
        // Authentication
        .route("/auth/login", post(api::auth::login))
        // Users
        .route("/users", get(api::users::list_users))
        .route("/users", post(api::users::create_user))
        .route("/users/:id", get(api::users::get_user))
        .route("/users/:id", patch(api::users::update_user))
        .route("/users/:id", delete(api::users::delete_user))
        // Notebooks
        .route("/notebooks", get(api::notebooks::list_notebooks))
        .route("/notebooks", post(api::notebooks::create_notebook))
        .route("/notebooks/:id", get(api::notebooks::get_notebook))
        .route("/notebooks/:id", patch(api::notebooks::update_notebook))
        .route("/notebooks/:id", delete(api::notebooks::delete_notebook))
        // Celulares
        .route("/celulares", get(api::celulares::list_celulares))
        .route("/celulares", post(api::celulares::create_celular))
        .route("/celulares/:id", get(api::celulares::get_celular))
        .route("/celulares/:id", patch(api::celulares::update_celular))
        .route("/celulares/:id", delete(api::celulares::delete_celular))
        // Terminais
        .route("/terminais", get(api::terminais::list_terminais))
        .route("/terminais", post(api::terminais::create_terminal))
        .route("/terminais/:id", get(api::terminais::get_terminal))
        .route("/terminais/:id", patch(api::terminais::update_terminal))
        .route("/terminais/:id", delete(api::terminais::delete_terminal))
        // Historico
        .route("/historico", get(api::historico::list_historico))
        .route(
            "/historico/equipment/:equipmentId",
            get(api::historico::list_equipment_historico),
        )
        // Dashboard
        .route("/dashboard/stats", get(api::stats::dashboard_stats))
        // Backup
        .route("/backup/export", get(api::backup::export_backup))
        .route("/backup/import", post(api::backup::import_backup))
        .with_state(state);

    // OpenAPI documentation
    let openapi = api::openapi::create_openapi_router();

    Router::new()
        .nest("/api", api)
        .merge(openapi)
        .layer(TraceLayer::new_for_http())
        .layer(CompressionLayer::new())
        .layer(cors)
}
