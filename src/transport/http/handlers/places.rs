//! REST handlers for the place collection.
//!
//! Thin shims over `PlaceRepository`: extract, delegate, map the result
//! into the envelope. All input checking lives in the repository.

use axum::extract::rejection::JsonRejection;
use axum::extract::{Path, State};
use axum::http::StatusCode;
use axum::response::IntoResponse;
use axum::Json;
use serde_json::json;

use crate::domain::place::{PlaceDraft, PlacePatch};
use crate::ingest::seed::{seed_if_empty, SAMPLE_CSV};
use crate::transport::http::handlers::common::repo_error_response;
use crate::transport::http::types::{json_422, ApiResponse, AppState};

#[utoipa::path(
    get,
    path = "/api/places",
    responses(
        (status = 200, description = "All stored places", body = ApiResponse),
        (status = 500, description = "Storage fault", body = ApiResponse)
    )
)]
pub async fn list_places_handler(State(state): State<AppState>) -> impl IntoResponse {
    match state.repository.list().await {
        Ok(places) => (StatusCode::OK, Json(ApiResponse::ok(json!(places)))).into_response(),
        Err(err) => repo_error_response(err).into_response(),
    }
}

#[utoipa::path(
    get,
    path = "/api/places/{id}",
    params(("id" = String, Path, description = "Place identifier")),
    responses(
        (status = 200, description = "The place", body = ApiResponse),
        (status = 400, description = "Malformed identifier", body = ApiResponse),
        (status = 404, description = "No such place", body = ApiResponse),
        (status = 500, description = "Storage fault", body = ApiResponse)
    )
)]
pub async fn get_place_handler(
    State(state): State<AppState>,
    Path(id): Path<String>,
) -> impl IntoResponse {
    match state.repository.get_by_id(&id).await {
        Ok(place) => (StatusCode::OK, Json(ApiResponse::ok(json!(place)))).into_response(),
        Err(err) => repo_error_response(err).into_response(),
    }
}

#[utoipa::path(
    post,
    path = "/api/places",
    request_body = PlaceDraft,
    responses(
        (status = 201, description = "Place created", body = ApiResponse),
        (status = 400, description = "Validation failed", body = ApiResponse),
        (status = 422, description = "Invalid JSON body", body = ApiResponse),
        (status = 500, description = "Storage fault", body = ApiResponse)
    )
)]
pub async fn create_place_handler(
    State(state): State<AppState>,
    request: Result<Json<PlaceDraft>, JsonRejection>,
) -> impl IntoResponse {
    let Json(draft) = match request {
        Ok(v) => v,
        Err(e) => return json_422(e, "a place object").into_response(),
    };
    match state.repository.create(draft).await {
        Ok(place) => (StatusCode::CREATED, Json(ApiResponse::ok(json!(place)))).into_response(),
        Err(err) => repo_error_response(err).into_response(),
    }
}

#[utoipa::path(
    put,
    path = "/api/places/{id}",
    params(("id" = String, Path, description = "Place identifier")),
    request_body = PlacePatch,
    responses(
        (status = 200, description = "Place updated", body = ApiResponse),
        (status = 400, description = "Malformed identifier or validation failed", body = ApiResponse),
        (status = 404, description = "No such place", body = ApiResponse),
        (status = 422, description = "Invalid JSON body", body = ApiResponse),
        (status = 500, description = "Storage fault", body = ApiResponse)
    )
)]
pub async fn update_place_handler(
    State(state): State<AppState>,
    Path(id): Path<String>,
    request: Result<Json<PlacePatch>, JsonRejection>,
) -> impl IntoResponse {
    let Json(patch) = match request {
        Ok(v) => v,
        Err(e) => return json_422(e, "a partial place object").into_response(),
    };
    match state.repository.update(&id, patch).await {
        Ok(place) => (StatusCode::OK, Json(ApiResponse::ok(json!(place)))).into_response(),
        Err(err) => repo_error_response(err).into_response(),
    }
}

#[utoipa::path(
    delete,
    path = "/api/places/{id}",
    params(("id" = String, Path, description = "Place identifier")),
    responses(
        (status = 200, description = "Place deleted", body = ApiResponse),
        (status = 400, description = "Malformed identifier", body = ApiResponse),
        (status = 404, description = "No such place", body = ApiResponse),
        (status = 500, description = "Storage fault", body = ApiResponse)
    )
)]
pub async fn delete_place_handler(
    State(state): State<AppState>,
    Path(id): Path<String>,
) -> impl IntoResponse {
    match state.repository.delete(&id).await {
        Ok(deleted) => {
            (StatusCode::OK, Json(ApiResponse::ok(json!({ "deleted": deleted })))).into_response()
        }
        Err(err) => repo_error_response(err).into_response(),
    }
}

#[utoipa::path(
    post,
    path = "/api/places/seed",
    responses(
        (status = 200, description = "Seed result (inserted = 0 when data already present)", body = ApiResponse),
        (status = 500, description = "Storage fault", body = ApiResponse)
    )
)]
pub async fn seed_places_handler(State(state): State<AppState>) -> impl IntoResponse {
    match seed_if_empty(&state.repository, SAMPLE_CSV).await {
        Ok(inserted) => {
            (StatusCode::OK, Json(ApiResponse::ok(json!({ "inserted": inserted })))).into_response()
        }
        Err(err) => repo_error_response(err).into_response(),
    }
}
