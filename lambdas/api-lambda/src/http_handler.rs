use std::sync::Arc;

use gallery_atoms::response::json_response;
use gallery_atoms::{groups, images};
use gallery_shared::AppState;
use lambda_http::{
    http::{header::HeaderValue, Method, StatusCode},
    Body, Error, Request, Response,
};

fn with_cors_headers(mut resp: Response<Body>) -> Response<Body> {
    let headers = resp.headers_mut();
    headers.insert("Access-Control-Allow-Origin", HeaderValue::from_static("*"));
    headers.insert(
        "Access-Control-Allow-Methods",
        HeaderValue::from_static("POST,OPTIONS"),
    );
    headers.insert(
        "Access-Control-Allow-Headers",
        HeaderValue::from_static("Content-Type,Authorization"),
    );
    resp
}

fn error_body(status: StatusCode, message: &str) -> Result<Response<Body>, Error> {
    json_response(status, &serde_json::json!({ "error": message }))
}

/// Main Lambda handler - routes requests to the group and image atoms
pub(crate) async fn function_handler(
    event: Request,
    state: Arc<AppState>,
) -> Result<Response<Body>, Error> {
    let method = event.method();
    let path = event.uri().path();
    let body = event.body();
    tracing::info!("Gallery API invoked - Method: {} Path: {}", method, path);

    // Handle CORS preflight
    if method == Method::OPTIONS {
        let resp = Response::builder()
            .status(StatusCode::OK)
            .body(Body::Empty)
            .map_err(Box::new)?;
        return Ok(with_cors_headers(resp));
    }

    let parts: Vec<&str> = path.split('/').filter(|s| !s.is_empty()).collect();

    match (method, parts.as_slice()) {
        // POST /groups
        (&Method::POST, ["groups"]) => {
            groups::create_group_handler(
                state.store.as_ref(),
                state.ids.as_ref(),
                &state.settings.groups_table,
                body,
            )
            .await
        }
        // POST /groups/{group_id}/images
        (&Method::POST, ["groups", group_id, "images"]) => {
            images::create_image_handler(
                state.store.as_ref(),
                state.signer.as_ref(),
                state.ids.as_ref(),
                &state.settings,
                group_id,
                body,
            )
            .await
        }
        (_, ["groups"] | ["groups", _, "images"]) => {
            error_body(StatusCode::METHOD_NOT_ALLOWED, "Method not allowed")
        }
        _ => {
            tracing::warn!("No route for {} {}", method, path);
            error_body(StatusCode::NOT_FOUND, "Not found")
        }
    }
}
