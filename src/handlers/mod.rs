//! HTTP request handlers.

mod agents;
mod catalog;
mod health;
pub(crate) mod problem_details;
mod version;

pub use agents::{agent_card, send_message};
pub use catalog::api_catalog;
pub use health::livez;
pub use version::version;

use axum::http::Uri;
use axum::response::Response;

/// Fallback for unmatched routes.
pub async fn fallback(uri: Uri) -> Response {
    problem_details::not_found(format!("No route for {}", uri.path()))
}
