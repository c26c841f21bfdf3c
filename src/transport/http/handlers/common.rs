use axum::http::StatusCode;
use axum::Json;
use serde_json::json;

use crate::domain::error::RepoError;
use crate::transport::http::types::ApiResponse;

/// Maps a repository failure onto a status code and envelope.
///
/// Field errors and malformed ids are caller-correctable (400, with the
/// full field-error list when there is one); an unknown id is 404; storage
/// faults surface opaque as 500.
pub fn repo_error_response(err: RepoError) -> (StatusCode, Json<ApiResponse>) {
    match err {
        RepoError::Fields(problems) => (
            StatusCode::BAD_REQUEST,
            Json(ApiResponse::err_with(
                "validation failed",
                json!({ "errors": problems }),
            )),
        ),
        RepoError::Validation(err) if err.is_not_found() => (
            StatusCode::NOT_FOUND,
            Json(ApiResponse::err(err.to_string())),
        ),
        RepoError::Validation(err) => (
            StatusCode::BAD_REQUEST,
            Json(ApiResponse::err(err.to_string())),
        ),
        RepoError::Database(err) => (
            StatusCode::INTERNAL_SERVER_ERROR,
            Json(ApiResponse::err(err.to_string())),
        ),
    }
}
