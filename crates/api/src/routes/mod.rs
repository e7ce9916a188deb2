pub mod auth;
pub mod browse;
pub mod entry;
pub mod health;
pub mod movies;

use axum::Router;

use crate::state::AppState;

/// Build the `/api/v1` route tree.
///
/// Route hierarchy:
///
/// ```text
/// /auth/login                     login (public)
///
/// /browse/{relation}              paginated listing (public)
///
/// /movies/{mid}                   movie detail (public)
/// /movies/{mid}/review            submit review (user)
///
/// /entry                          entry catalogue (moderator)
/// /entry/user                     create user (admin)
/// /entry/admin                    create admin (admin)
/// /entry/director                 create director (moderator)
/// /entry/actor                    create actor (moderator)
/// /entry/movie                    options, create movie (moderator)
/// /entry/review                   options, create review (moderator)
/// /entry/acted                    options, create cast role (moderator)
/// /entry/poster                   upload poster (moderator)
/// /entry/bulk                     bulk import (admin)
/// ```
pub fn api_routes() -> Router<AppState> {
    Router::new()
        .nest("/auth", auth::router())
        .nest("/browse", browse::router())
        .nest("/movies", movies::router())
        .nest("/entry", entry::router())
}
