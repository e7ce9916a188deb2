//! User rows.

use serde::Serialize;
use sqlx::FromRow;
use ymdb_core::types::{DbId, EpochSeconds};

/// Row from the `users` table.
#[derive(Debug, Clone, PartialEq, Eq, FromRow, Serialize)]
pub struct User {
    pub uid: DbId,
    pub u_name: String,
    pub email: String,
    pub created_date: EpochSeconds,
}

/// Login lookup: the user joined with their credential and admin position.
///
/// Contains the password hash -- never serialize this to API responses.
#[derive(Debug, Clone, FromRow)]
pub struct UserCredentials {
    pub uid: DbId,
    pub u_name: String,
    pub email: String,
    pub password_hash: Option<String>,
    pub position: Option<String>,
}
