//! Detail page projection for a single movie.

use ymdb_core::dates::epoch_to_date;
use ymdb_core::types::DbId;

use crate::models::movie_detail::{
    CastEntry, MovieDetail, MovieSummary, ReviewEntry, NOT_AVAILABLE,
};
use crate::repositories::{MovieRepo, PosterRepo};
use crate::DbPool;

pub struct MovieDetailRepo;

impl MovieDetailRepo {
    /// Assemble the detail view. `None` when the movie does not exist.
    pub async fn assemble(pool: &DbPool, mid: DbId) -> Result<Option<MovieDetail>, sqlx::Error> {
        let Some(movie) = MovieRepo::find_by_id(pool, mid).await? else {
            return Ok(None);
        };

        let poster = PosterRepo::find_by_mid(pool, mid).await?.map(|p| p.img);

        let director = match movie.director_uid {
            Some(uid) => sqlx::query_scalar::<_, String>(
                "SELECT given_name FROM directors WHERE uid = ?",
            )
            .bind(uid)
            .fetch_optional(pool)
            .await?
            .unwrap_or_else(|| NOT_AVAILABLE.to_string()),
            None => NOT_AVAILABLE.to_string(),
        };

        let released = movie
            .release_date
            .and_then(epoch_to_date)
            .unwrap_or_else(|| NOT_AVAILABLE.to_string());

        let cast = sqlx::query_as::<_, CastEntry>(
            "SELECT a.name AS actor, ai.character_role AS character
             FROM acted_in ai JOIN actors a ON a.uid = ai.uid
             WHERE ai.mid = ?
             ORDER BY ai.uid",
        )
        .bind(mid)
        .fetch_all(pool)
        .await?;

        let reviews = sqlx::query_as::<_, ReviewEntry>(
            "SELECT u.u_name AS username, r.text, r.rating, r.created_date AS date
             FROM reviews r JOIN users u ON u.uid = r.uid
             WHERE r.mid = ?
             ORDER BY r.created_date DESC, r.rowid DESC",
        )
        .bind(mid)
        .fetch_all(pool)
        .await?;

        Ok(Some(MovieDetail {
            poster,
            movie: MovieSummary {
                mid: movie.mid,
                title: movie.title,
                director,
                released,
            },
            cast,
            reviews,
        }))
    }
}
