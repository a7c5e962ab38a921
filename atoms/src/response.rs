use lambda_http::{http::StatusCode, Body, Error, Response};
use serde::Serialize;

use crate::error::GalleryError;

/// JSON response with the open CORS header every route returns
pub fn json_response<T: Serialize>(status: StatusCode, body: &T) -> Result<Response<Body>, Error> {
    Ok(Response::builder()
        .status(status)
        .header("Content-Type", "application/json")
        .header("Access-Control-Allow-Origin", "*")
        .body(serde_json::to_string(body)?.into())
        .map_err(Box::new)?)
}

/// The single place error kinds become HTTP responses
pub fn error_response(err: &GalleryError) -> Result<Response<Body>, Error> {
    let status = err.status_code();

    match status.as_u16() {
        400..=499 => tracing::warn!("Client error: {} - {}", status, err),
        _ => tracing::error!("Server error: {} - {}", status, err),
    }

    json_response(status, &serde_json::json!({ "error": err.public_message() }))
}
