use axum::routing::{get, post};
use axum::Router;
use utoipa::OpenApi;

use crate::transport::http::handlers::{health, places};
use crate::transport::http::types::{ApiResponse, AppState};

#[derive(OpenApi)]
#[openapi(
    paths(
        health::healthcheck_handler,
        places::list_places_handler,
        places::get_place_handler,
        places::create_place_handler,
        places::update_place_handler,
        places::delete_place_handler,
        places::seed_places_handler
    ),
    components(schemas(
        ApiResponse,
        crate::domain::error::FieldError,
        crate::domain::place::Coordinates,
        crate::domain::place::Place,
        crate::domain::place::PlaceDocument,
        crate::domain::place::PlaceDraft,
        crate::domain::place::PlacePatch
    ))
)]
#[allow(dead_code)]
pub struct ApiDoc;

pub fn create_router(app_state: AppState) -> Router {
    Router::new()
        .route("/health", get(health::healthcheck_handler))
        .route(
            "/api/places",
            get(places::list_places_handler).post(places::create_place_handler),
        )
        .route("/api/places/seed", post(places::seed_places_handler))
        .route(
            "/api/places/:id",
            get(places::get_place_handler)
                .put(places::update_place_handler)
                .delete(places::delete_place_handler),
        )
        .with_state(app_state)
}
