//! Handler for the public browse listings (`GET /browse/{relation}`).

use axum::extract::{Path, Query, State};
use axum::Json;
use serde::Serialize;
use ymdb_core::entity::EntityKind;
use ymdb_db::models::acted_in::ActedIn;
use ymdb_db::models::actor::Actor;
use ymdb_db::models::admin::Admin;
use ymdb_db::models::director::Director;
use ymdb_db::models::movie::Movie;
use ymdb_db::models::poster::Poster;
use ymdb_db::models::review::Review;
use ymdb_db::models::user::User;
use ymdb_db::repositories::{
    ActedInRepo, ActorRepo, AdminRepo, DirectorRepo, MovieRepo, PosterRepo, ReviewRepo, UserRepo,
};

use crate::error::AppResult;
use crate::query::PaginationParams;
use crate::response::DataResponse;
use crate::state::AppState;

/// Rows of one relation.
#[derive(Debug, Serialize)]
#[serde(untagged)]
pub enum BrowseRows {
    Users(Vec<User>),
    Admins(Vec<Admin>),
    Directors(Vec<Director>),
    Actors(Vec<Actor>),
    Movies(Vec<Movie>),
    Reviews(Vec<Review>),
    ActedIn(Vec<ActedIn>),
    Posters(Vec<Poster>),
}

/// One page of a relation listing.
#[derive(Debug, Serialize)]
pub struct BrowsePage {
    pub relation: EntityKind,
    /// Total rows in the relation.
    pub total: i64,
    pub limit: i64,
    pub offset: i64,
    pub rows: BrowseRows,
}

/// GET /api/v1/browse/{relation}?limit=&offset=
pub async fn browse_relation(
    State(state): State<AppState>,
    Path(relation): Path<String>,
    Query(params): Query<PaginationParams>,
) -> AppResult<Json<DataResponse<BrowsePage>>> {
    let kind = EntityKind::from_relation(&relation)?;
    let (limit, offset) = (params.limit(), params.offset());
    let pool = &state.pool;

    let (rows, total) = match kind {
        EntityKind::User => (
            BrowseRows::Users(UserRepo::list(pool, limit, offset).await?),
            UserRepo::count(pool).await?,
        ),
        EntityKind::Admin => (
            BrowseRows::Admins(AdminRepo::list(pool, limit, offset).await?),
            AdminRepo::count(pool).await?,
        ),
        EntityKind::Director => (
            BrowseRows::Directors(DirectorRepo::list(pool, limit, offset).await?),
            DirectorRepo::count(pool).await?,
        ),
        EntityKind::Actor => (
            BrowseRows::Actors(ActorRepo::list(pool, limit, offset).await?),
            ActorRepo::count(pool).await?,
        ),
        EntityKind::Movie => (
            BrowseRows::Movies(MovieRepo::list(pool, limit, offset).await?),
            MovieRepo::count(pool).await?,
        ),
        EntityKind::Review => (
            BrowseRows::Reviews(ReviewRepo::list(pool, limit, offset).await?),
            ReviewRepo::count(pool).await?,
        ),
        EntityKind::ActedIn => (
            BrowseRows::ActedIn(ActedInRepo::list(pool, limit, offset).await?),
            ActedInRepo::count(pool).await?,
        ),
        EntityKind::Poster => (
            BrowseRows::Posters(PosterRepo::list(pool, limit, offset).await?),
            PosterRepo::count(pool).await?,
        ),
    };

    Ok(Json(DataResponse {
        data: BrowsePage {
            relation: kind,
            total,
            limit,
            offset,
            rows,
        },
    }))
}
