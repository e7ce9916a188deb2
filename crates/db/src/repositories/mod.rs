//! Repository layer.
//!
//! Each repository is a zero-sized struct. Reads take `&DbPool`; inserts take
//! a `&mut SqliteConnection` so the caller owns the transaction boundary.

pub mod acted_in_repo;
pub mod actor_repo;
pub mod admin_repo;
pub mod director_repo;
pub mod movie_detail_repo;
pub mod movie_repo;
pub mod options_repo;
pub mod poster_repo;
pub mod review_repo;
pub mod user_repo;

pub use acted_in_repo::ActedInRepo;
pub use actor_repo::ActorRepo;
pub use admin_repo::AdminRepo;
pub use director_repo::DirectorRepo;
pub use movie_detail_repo::MovieDetailRepo;
pub use movie_repo::MovieRepo;
pub use options_repo::OptionsRepo;
pub use poster_repo::PosterRepo;
pub use review_repo::ReviewRepo;
pub use user_repo::UserRepo;

/// Upper bound on bind parameters per statement (SQLite's historical default).
pub const MAX_BIND_PARAMS: usize = 999;

/// Rows per multi-row insert for a table with `columns` bound columns.
pub fn rows_per_chunk(columns: usize) -> usize {
    (MAX_BIND_PARAMS / columns.max(1)).max(1)
}
