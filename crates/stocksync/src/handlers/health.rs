//! Health check endpoint.

use axum::http::StatusCode;

/// GET /healthz - Basic liveness probe.
///
/// Returns 200 immediately. The service serves traffic even while the
/// cache is cold, so there is nothing else to check.
pub async fn healthz() -> StatusCode {
    StatusCode::OK
}
