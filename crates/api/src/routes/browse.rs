//! Route definitions for the `/browse` resource.

use axum::routing::get;
use axum::Router;

use crate::handlers::browse;
use crate::state::AppState;

/// Routes mounted at `/browse`.
///
/// ```text
/// GET /{relation}    -> browse_relation
/// ```
pub fn router() -> Router<AppState> {
    Router::new().route("/{relation}", get(browse::browse_relation))
}
