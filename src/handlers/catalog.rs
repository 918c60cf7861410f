//! Catalog publisher.

use axum::Json;
use axum::extract::State;
use axum::http::header;
use axum::response::IntoResponse;

use crate::api::LINKSET_CONTENT_TYPE;
use crate::server::AppState;

/// GET /.well-known/api-catalog (and its `.json` alias)
///
/// Serves the linkset built at startup. The body is plain JSON; the linkset
/// media type and RFC 9727 profile ride on the content type.
pub async fn api_catalog(State(state): State<AppState>) -> impl IntoResponse {
    (
        [(header::CONTENT_TYPE, LINKSET_CONTENT_TYPE)],
        Json(state.catalog.as_ref().clone()),
    )
}
