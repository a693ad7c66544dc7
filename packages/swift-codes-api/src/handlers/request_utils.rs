//! Request utilities for HTTP endpoints.

use http_body_util::BodyExt;
use hyper::{body::Bytes, Request, Response};
use percent_encoding::percent_decode_str;
use serde::Serialize;

use crate::router::RouterError;
use swift_codes_core::SwiftError;

/// Type alias for matchit parameters with explicit lifetimes
pub type MatchitParams<'a, 'b> = matchit::Params<'a, 'b>;

/// Reads the full request body.
pub async fn read_request_body<B>(req: Request<B>) -> Result<Bytes, RouterError>
where
    B: hyper::body::Body,
    B::Error: std::fmt::Display,
{
    let body = req
        .into_body()
        .collect()
        .await
        .map_err(|e| RouterError::BadRequest(format!("Failed to read request body: {}", e)))?;
    Ok(body.to_bytes())
}

/// Extracts and percent-decodes a path parameter.
pub fn path_param(params: &MatchitParams<'_, '_>, name: &str) -> Result<String, RouterError> {
    let raw = params
        .get(name)
        .ok_or_else(|| RouterError::BadRequest(format!("Missing path parameter '{}'", name)))?;
    percent_decode_str(raw)
        .decode_utf8()
        .map(|decoded| decoded.into_owned())
        .map_err(|e| RouterError::BadRequest(format!("Invalid path parameter '{}': {}", name, e)))
}

/// Map SwiftError to appropriate RouterError
pub fn map_swift_error_to_router_error(e: SwiftError) -> RouterError {
    match e {
        SwiftError::NotFound { .. } | SwiftError::CountryNotFound { .. } => {
            RouterError::NotFound(e.to_string())
        }
        SwiftError::BadRequest(msg) => RouterError::BadRequest(msg),
        SwiftError::BucketNotFound(_)
        | SwiftError::Serialization(_)
        | SwiftError::Storage(_)
        | SwiftError::Io(_) => {
            tracing::error!(error = %e, "Database error");
            RouterError::InternalError(e.to_string())
        }
    }
}

/// Runs a store-bound closure on the blocking pool.
pub async fn run_blocking<T, F>(f: F) -> Result<T, RouterError>
where
    F: FnOnce() -> Result<T, SwiftError> + Send + 'static,
    T: Send + 'static,
{
    tokio::task::spawn_blocking(f)
        .await
        .map_err(|e| RouterError::InternalError(format!("Blocking task failed: {}", e)))?
        .map_err(map_swift_error_to_router_error)
}

/// Helper to build HTTP response with proper error handling
pub fn build_response(status: u16, json: Vec<u8>) -> Result<Response<Bytes>, RouterError> {
    Response::builder()
        .status(status)
        .header("Content-Type", "application/json")
        .body(Bytes::from(json))
        .map_err(|e| RouterError::InternalError(format!("Failed to build response: {}", e)))
}

/// Serializes `body` and wraps it in a JSON response.
pub fn json_response<T: Serialize>(status: u16, body: &T) -> Result<Response<Bytes>, RouterError> {
    let json = serde_json::to_vec(body)
        .map_err(|e| RouterError::InternalError(format!("Failed to serialize response: {}", e)))?;
    build_response(status, json)
}
