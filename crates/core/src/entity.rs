//! Entity kinds and the storage-ready tuples produced by the codec.

use std::fmt;

use serde::{Deserialize, Serialize};

use crate::error::CoreError;
use crate::types::{DbId, EpochSeconds};

/// Every entity the write pipeline can target.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum EntityKind {
    User,
    Admin,
    Director,
    Actor,
    Movie,
    Review,
    ActedIn,
    Poster,
}

/// Kinds accepted by the bulk importer. Posters carry binary payloads and are excluded.
pub const BULK_KINDS: &[EntityKind] = &[
    EntityKind::User,
    EntityKind::Admin,
    EntityKind::Director,
    EntityKind::Actor,
    EntityKind::Movie,
    EntityKind::Review,
    EntityKind::ActedIn,
];

impl EntityKind {
    /// Relation name used by bulk uploads and browse routes.
    pub fn relation(self) -> &'static str {
        match self {
            Self::User => "user",
            Self::Admin => "admin",
            Self::Director => "director",
            Self::Actor => "actor",
            Self::Movie => "movie",
            Self::Review => "review",
            Self::ActedIn => "acted_in",
            Self::Poster => "poster",
        }
    }

    pub fn from_relation(name: &str) -> Result<Self, CoreError> {
        match name {
            "user" => Ok(Self::User),
            "admin" => Ok(Self::Admin),
            "director" => Ok(Self::Director),
            "actor" => Ok(Self::Actor),
            "movie" => Ok(Self::Movie),
            "review" => Ok(Self::Review),
            "acted_in" => Ok(Self::ActedIn),
            "poster" => Ok(Self::Poster),
            other => Err(CoreError::Validation(format!("invalid relation '{other}'"))),
        }
    }

    /// Parse a relation that may be bulk imported.
    pub fn bulk_relation(name: &str) -> Result<Self, CoreError> {
        let kind = Self::from_relation(name)?;
        if BULK_KINDS.contains(&kind) {
            Ok(kind)
        } else {
            Err(CoreError::Validation(format!(
                "invalid relation '{name}': bulk import does not accept {name} data"
            )))
        }
    }
}

impl fmt::Display for EntityKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.relation())
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NewUser {
    pub u_name: String,
    pub email: String,
    /// Present for single-entry creation; bulk-imported users have no password.
    pub password_hash: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NewAdmin {
    pub uid: DbId,
    pub position: String,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NewDirector {
    pub uid: DbId,
    pub famous_for: Option<DbId>,
    pub given_name: String,
    pub date_of_birth: EpochSeconds,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NewActor {
    pub uid: DbId,
    pub name: String,
    pub date_of_birth: EpochSeconds,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NewMovie {
    pub director_uid: Option<DbId>,
    pub title: String,
    pub release_date: Option<EpochSeconds>,
    pub entered_by: DbId,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NewReview {
    pub mid: DbId,
    pub uid: DbId,
    pub text: String,
    pub rating: i64,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NewActedIn {
    pub mid: DbId,
    pub uid: DbId,
    pub character_role: String,
}

/// A validated tuple for exactly one entity kind.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum NewRecord {
    User(NewUser),
    Admin(NewAdmin),
    Director(NewDirector),
    Actor(NewActor),
    Movie(NewMovie),
    Review(NewReview),
    ActedIn(NewActedIn),
}

impl NewRecord {
    pub fn kind(&self) -> EntityKind {
        match self {
            Self::User(_) => EntityKind::User,
            Self::Admin(_) => EntityKind::Admin,
            Self::Director(_) => EntityKind::Director,
            Self::Actor(_) => EntityKind::Actor,
            Self::Movie(_) => EntityKind::Movie,
            Self::Review(_) => EntityKind::Review,
            Self::ActedIn(_) => EntityKind::ActedIn,
        }
    }
}

/// A homogeneous batch of validated tuples, one variant per bulk kind.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum NewBatch {
    Users(Vec<NewUser>),
    Admins(Vec<NewAdmin>),
    Directors(Vec<NewDirector>),
    Actors(Vec<NewActor>),
    Movies(Vec<NewMovie>),
    Reviews(Vec<NewReview>),
    ActedIn(Vec<NewActedIn>),
}

impl NewBatch {
    pub fn empty(kind: EntityKind) -> Result<Self, CoreError> {
        match kind {
            EntityKind::User => Ok(Self::Users(Vec::new())),
            EntityKind::Admin => Ok(Self::Admins(Vec::new())),
            EntityKind::Director => Ok(Self::Directors(Vec::new())),
            EntityKind::Actor => Ok(Self::Actors(Vec::new())),
            EntityKind::Movie => Ok(Self::Movies(Vec::new())),
            EntityKind::Review => Ok(Self::Reviews(Vec::new())),
            EntityKind::ActedIn => Ok(Self::ActedIn(Vec::new())),
            EntityKind::Poster => Err(CoreError::Validation(
                "poster data cannot be bulk imported".to_string(),
            )),
        }
    }

    /// Append a record; it must match the batch kind.
    pub fn push(&mut self, record: NewRecord) -> Result<(), CoreError> {
        match (self, record) {
            (Self::Users(v), NewRecord::User(r)) => v.push(r),
            (Self::Admins(v), NewRecord::Admin(r)) => v.push(r),
            (Self::Directors(v), NewRecord::Director(r)) => v.push(r),
            (Self::Actors(v), NewRecord::Actor(r)) => v.push(r),
            (Self::Movies(v), NewRecord::Movie(r)) => v.push(r),
            (Self::Reviews(v), NewRecord::Review(r)) => v.push(r),
            (Self::ActedIn(v), NewRecord::ActedIn(r)) => v.push(r),
            (_, record) => {
                return Err(CoreError::Internal(format!(
                    "{} record pushed into a mismatched batch",
                    record.kind()
                )))
            }
        }
        Ok(())
    }

    pub fn kind(&self) -> EntityKind {
        match self {
            Self::Users(_) => EntityKind::User,
            Self::Admins(_) => EntityKind::Admin,
            Self::Directors(_) => EntityKind::Director,
            Self::Actors(_) => EntityKind::Actor,
            Self::Movies(_) => EntityKind::Movie,
            Self::Reviews(_) => EntityKind::Review,
            Self::ActedIn(_) => EntityKind::ActedIn,
        }
    }

    pub fn len(&self) -> usize {
        match self {
            Self::Users(v) => v.len(),
            Self::Admins(v) => v.len(),
            Self::Directors(v) => v.len(),
            Self::Actors(v) => v.len(),
            Self::Movies(v) => v.len(),
            Self::Reviews(v) => v.len(),
            Self::ActedIn(v) => v.len(),
        }
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}
