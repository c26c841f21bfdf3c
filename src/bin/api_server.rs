// src/bin/api_server.rs

use std::sync::Arc;

use tower_http::cors::{Any, CorsLayer};
use tracing::{info, warn};
use utoipa::OpenApi;
use utoipa_swagger_ui::SwaggerUi;

use farm_directory::infra::config;
use farm_directory::ingest::{seed_if_empty, SAMPLE_CSV};
use farm_directory::transport;
use farm_directory::{PgCollection, PlaceRepository};

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    dotenv::dotenv().ok();
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("info")),
        )
        .init();

    // --- Storage Initialization ---
    let collection_name = config::collection_name();
    info!(collection = %collection_name, "connecting to database");
    let collection = Arc::new(PgCollection::connect(&config::database_url(), &collection_name).await?);
    let repository = PlaceRepository::new(collection);

    // --- Startup Seeding ---
    //
    // Mirrors the bootstrap behavior of the original deployment: an empty
    // collection is filled from sample data so the map has something to show.
    let seed_csv = match config::seed_csv_path() {
        Some(path) => std::fs::read_to_string(&path)?,
        None => SAMPLE_CSV.to_string(),
    };
    match seed_if_empty(&repository, &seed_csv).await {
        Ok(0) => {}
        Ok(inserted) => info!(inserted, "seeded empty collection"),
        Err(err) => warn!(error = %err, "startup seeding failed, continuing"),
    }

    // --- API Server Initialization ---
    let app_state = transport::http::AppState { repository };
    let cors = CorsLayer::new().allow_origin(Any).allow_methods(Any).allow_headers(Any);
    let app = transport::http::create_router(app_state)
        .merge(SwaggerUi::new("/swagger-ui").url(
            "/api-docs/openapi.json",
            transport::http::ApiDoc::openapi(),
        ))
        .layer(cors);

    let addr = format!("0.0.0.0:{}", config::port());
    let listener = tokio::net::TcpListener::bind(&addr).await?;
    info!(%addr, "api server listening");

    tokio::select! {
        result = axum::serve(listener, app) => {
            result?;
        }
        _ = tokio::signal::ctrl_c() => {
            info!("shutdown signal received");
        }
    }

    Ok(())
}
