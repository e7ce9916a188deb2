//! Read-only projection of one movie for the detail page.

use serde::Serialize;
use sqlx::FromRow;
use ymdb_core::types::{DbId, EpochSeconds};

/// Placeholder shown for an absent director or release date.
pub const NOT_AVAILABLE: &str = "n/a";

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct MovieSummary {
    pub mid: DbId,
    pub title: String,
    /// Director given name, or `"n/a"`.
    pub director: String,
    /// Release date as `YYYY-MM-DD`, or `"n/a"`.
    pub released: String,
}

#[derive(Debug, Clone, PartialEq, Eq, FromRow, Serialize)]
pub struct CastEntry {
    pub actor: String,
    pub character: String,
}

#[derive(Debug, Clone, PartialEq, Eq, FromRow, Serialize)]
pub struct ReviewEntry {
    pub username: String,
    pub text: String,
    pub rating: i64,
    pub date: EpochSeconds,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct MovieDetail {
    /// Poster blob key, absent when none was uploaded.
    pub poster: Option<String>,
    pub movie: MovieSummary,
    pub cast: Vec<CastEntry>,
    /// Newest first.
    pub reviews: Vec<ReviewEntry>,
}
