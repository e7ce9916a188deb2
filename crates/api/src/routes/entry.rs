//! Route definitions for the `/entry` resource.

use axum::routing::{get, post};
use axum::Router;

use crate::handlers::{bulk, entry, poster};
use crate::state::AppState;

/// Routes mounted at `/entry`.
///
/// ```text
/// GET  /            -> index
/// POST /user        -> enter_user
/// POST /admin       -> enter_admin
/// POST /director    -> enter_director
/// POST /actor       -> enter_actor
/// GET  /movie       -> movie_options
/// POST /movie       -> enter_movie
/// GET  /review      -> review_options
/// POST /review      -> enter_review
/// GET  /acted       -> acted_in_options
/// POST /acted       -> enter_acted_in
/// POST /poster      -> upload_poster
/// POST /bulk        -> bulk_import
/// ```
pub fn router() -> Router<AppState> {
    Router::new()
        .route("/", get(entry::index))
        .route("/user", post(entry::enter_user))
        .route("/admin", post(entry::enter_admin))
        .route("/director", post(entry::enter_director))
        .route("/actor", post(entry::enter_actor))
        .route(
            "/movie",
            get(entry::movie_options).post(entry::enter_movie),
        )
        .route(
            "/review",
            get(entry::review_options).post(entry::enter_review),
        )
        .route(
            "/acted",
            get(entry::acted_in_options).post(entry::enter_acted_in),
        )
        .route("/poster", post(poster::upload_poster))
        .route("/bulk", post(bulk::bulk_import))
}
