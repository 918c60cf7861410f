//! Health check handlers.

use axum::http::StatusCode;

/// GET /livez
pub async fn livez() -> (StatusCode, &'static str) {
    (StatusCode::OK, "ok")
}
