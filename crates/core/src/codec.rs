//! Entity codec.
//!
//! Maps a [`RawRecord`] (form body or one delimited row) to a validated
//! [`NewRecord`]. Field extraction and date parsing run first and fail with
//! [`CoreError::Decode`]; field rules run next and fail with
//! [`CoreError::Validation`]. Nothing here touches storage.

use std::collections::HashMap;

use crate::dates::parse_epoch;
use crate::entity::{
    EntityKind, NewActedIn, NewActor, NewAdmin, NewDirector, NewMovie, NewRecord, NewReview,
    NewUser,
};
use crate::error::CoreError;
use crate::types::DbId;
use crate::validation::{
    check, parse_identifier, parse_optional_identifier, parse_rating, FieldKind,
};

/// Field name → raw string value.
pub type RawRecord = HashMap<String, String>;

/// One-way password hashing, consumed only when a user is created from a form.
pub trait CredentialHasher: Send + Sync {
    fn hash(&self, password: &str) -> Result<String, CoreError>;
}

/// Extra inputs available to single-entry forms but not to bulk rows.
pub struct FormContext<'a> {
    /// Caller uid, recorded as `entered_by` on movies.
    pub caller_uid: Option<DbId>,
    pub hasher: &'a dyn CredentialHasher,
}

/// Where a raw record came from; the two sources name some fields differently.
enum Source<'a> {
    Form(&'a FormContext<'a>),
    Row,
}

/// Field names a single-entry form for `kind` submits, in display order.
pub fn form_fields(kind: EntityKind) -> &'static [&'static str] {
    match kind {
        EntityKind::User => &["u_name", "email", "password"],
        EntityKind::Admin => &["uid", "position"],
        EntityKind::Director => &["uid", "mid", "given_name", "dob"],
        EntityKind::Actor => &["uid", "name", "dob"],
        EntityKind::Movie => &["director_uid", "title", "release_date"],
        EntityKind::Review => &["mid", "uid", "text", "rating"],
        EntityKind::ActedIn => &["mid", "uid", "character_role"],
        EntityKind::Poster => &["mid", "img"],
    }
}

/// Column headers a bulk file for `kind` carries.
pub fn bulk_headers(kind: EntityKind) -> &'static [&'static str] {
    match kind {
        EntityKind::User => &["u_name", "email"],
        EntityKind::Admin => &["uid", "position"],
        EntityKind::Director => &["uid", "given_name", "DoB"],
        EntityKind::Actor => &["uid", "name", "DoB"],
        EntityKind::Movie => &["director_uid", "title", "release_date", "entered_by"],
        EntityKind::Review => &["mid", "uid", "text", "rating"],
        EntityKind::ActedIn => &["mid", "uid", "character_role"],
        EntityKind::Poster => &[],
    }
}

/// Bulk headers that may be left out of a file entirely.
const OPTIONAL_ROW_FIELDS: &[&str] = &["director_uid"];

/// Date column of a bulk row for `kind`, if it has one.
fn row_date_field(kind: EntityKind) -> Option<&'static str> {
    match kind {
        EntityKind::Director | EntityKind::Actor => Some("DoB"),
        EntityKind::Movie => Some("release_date"),
        _ => None,
    }
}

/// Decode-only checks for one bulk row: every required column is present
/// and the date column parses. No field rule runs here, so a batch can be
/// screened for [`CoreError::Decode`] failures before any row is validated.
pub fn precheck_row(kind: EntityKind, raw: &RawRecord) -> Result<(), CoreError> {
    for name in bulk_headers(kind) {
        if !OPTIONAL_ROW_FIELDS.contains(name) {
            field(raw, name)?;
        }
    }
    if let Some(date_field) = row_date_field(kind) {
        parse_epoch(date_field, field(raw, date_field)?)?;
    }
    Ok(())
}

/// Decode a single-entry form submission.
pub fn decode_form(
    kind: EntityKind,
    raw: &RawRecord,
    ctx: &FormContext<'_>,
) -> Result<NewRecord, CoreError> {
    decode(kind, raw, Source::Form(ctx))
}

/// Decode one bulk row (headers already mapped to field names).
pub fn decode_row(kind: EntityKind, raw: &RawRecord) -> Result<NewRecord, CoreError> {
    decode(kind, raw, Source::Row)
}

fn decode(kind: EntityKind, raw: &RawRecord, source: Source<'_>) -> Result<NewRecord, CoreError> {
    match kind {
        EntityKind::User => decode_user(raw, &source).map(NewRecord::User),
        EntityKind::Admin => decode_admin(raw).map(NewRecord::Admin),
        EntityKind::Director => decode_director(raw, &source).map(NewRecord::Director),
        EntityKind::Actor => decode_actor(raw, &source).map(NewRecord::Actor),
        EntityKind::Movie => decode_movie(raw, &source).map(NewRecord::Movie),
        EntityKind::Review => decode_review(raw).map(NewRecord::Review),
        EntityKind::ActedIn => decode_acted_in(raw).map(NewRecord::ActedIn),
        EntityKind::Poster => Err(CoreError::Validation(
            "poster entries carry a file and are not decoded from fields".to_string(),
        )),
    }
}

fn field<'r>(raw: &'r RawRecord, name: &str) -> Result<&'r str, CoreError> {
    raw.get(name)
        .map(String::as_str)
        .ok_or_else(|| CoreError::Decode(format!("missing field '{name}'")))
}

fn date_of_birth_field(source: &Source<'_>) -> &'static str {
    match source {
        Source::Form(_) => "dob",
        Source::Row => "DoB",
    }
}

fn decode_user(raw: &RawRecord, source: &Source<'_>) -> Result<NewUser, CoreError> {
    let u_name = field(raw, "u_name")?;
    let email = field(raw, "email")?;
    let password = match source {
        Source::Form(ctx) => Some((field(raw, "password")?, ctx)),
        Source::Row => None,
    };

    check(FieldKind::Username, "u_name", u_name)?;
    check(FieldKind::Email, "email", email)?;

    let password_hash = match password {
        Some((password, ctx)) => {
            check(FieldKind::Password, "password", password)?;
            Some(ctx.hasher.hash(password)?)
        }
        None => None,
    };

    Ok(NewUser {
        u_name: u_name.to_string(),
        email: email.to_string(),
        password_hash,
    })
}

fn decode_admin(raw: &RawRecord) -> Result<NewAdmin, CoreError> {
    let uid = field(raw, "uid")?;
    let position = field(raw, "position")?;

    let uid = parse_identifier("uid", uid)?;
    check(FieldKind::AdminPosition, "position", position)?;

    Ok(NewAdmin {
        uid,
        position: position.to_string(),
    })
}

fn decode_director(raw: &RawRecord, source: &Source<'_>) -> Result<NewDirector, CoreError> {
    let uid = field(raw, "uid")?;
    // Only the form carries famous_for; bulk rows always store NULL.
    let famous_for = match source {
        Source::Form(_) => raw.get("mid").map(String::as_str),
        Source::Row => None,
    };
    let given_name = field(raw, "given_name")?;
    let dob_field = date_of_birth_field(source);
    let date_of_birth = parse_epoch(dob_field, field(raw, dob_field)?)?;

    let uid = parse_identifier("uid", uid)?;
    let famous_for = parse_optional_identifier("mid", famous_for)?;
    check(FieldKind::DirectorName, "given_name", given_name)?;

    Ok(NewDirector {
        uid,
        famous_for,
        given_name: given_name.to_string(),
        date_of_birth,
    })
}

fn decode_actor(raw: &RawRecord, source: &Source<'_>) -> Result<NewActor, CoreError> {
    let uid = field(raw, "uid")?;
    let name = field(raw, "name")?;
    let dob_field = date_of_birth_field(source);
    let date_of_birth = parse_epoch(dob_field, field(raw, dob_field)?)?;

    let uid = parse_identifier("uid", uid)?;
    check(FieldKind::ActorName, "name", name)?;

    Ok(NewActor {
        uid,
        name: name.to_string(),
        date_of_birth,
    })
}

fn decode_movie(raw: &RawRecord, source: &Source<'_>) -> Result<NewMovie, CoreError> {
    let director_uid = raw.get("director_uid").map(String::as_str);
    let title = field(raw, "title")?;
    let release_date = parse_epoch("release_date", field(raw, "release_date")?)?;
    let entered_by = match source {
        Source::Form(ctx) => ctx
            .caller_uid
            .ok_or_else(|| CoreError::Decode("missing field 'entered_by'".to_string()))?,
        Source::Row => parse_identifier("entered_by", field(raw, "entered_by")?)?,
    };

    let director_uid = parse_optional_identifier("director_uid", director_uid)?;
    check(FieldKind::MovieTitle, "title", title)?;

    Ok(NewMovie {
        director_uid,
        title: title.to_string(),
        release_date: Some(release_date),
        entered_by,
    })
}

fn decode_review(raw: &RawRecord) -> Result<NewReview, CoreError> {
    let mid = field(raw, "mid")?;
    let uid = field(raw, "uid")?;
    let text = field(raw, "text")?;
    let rating = field(raw, "rating")?;

    let mid = parse_identifier("mid", mid)?;
    let uid = parse_identifier("uid", uid)?;
    check(FieldKind::ReviewText, "text", text)?;
    let rating = parse_rating("rating", rating)?;

    Ok(NewReview {
        mid,
        uid,
        text: text.to_string(),
        rating,
    })
}

fn decode_acted_in(raw: &RawRecord) -> Result<NewActedIn, CoreError> {
    let mid = field(raw, "mid")?;
    let uid = field(raw, "uid")?;
    let character_role = field(raw, "character_role")?;

    let mid = parse_identifier("mid", mid)?;
    let uid = parse_identifier("uid", uid)?;
    check(FieldKind::CharacterRole, "character_role", character_role)?;

    Ok(NewActedIn {
        mid,
        uid,
        character_role: character_role.to_string(),
    })
}

/// Decode a review submitted against a known movie by the calling user.
pub fn decode_movie_review(
    mid: DbId,
    uid: DbId,
    raw: &RawRecord,
) -> Result<NewReview, CoreError> {
    let text = field(raw, "text")?;
    let rating = field(raw, "rating")?;

    check(FieldKind::ReviewText, "text", text)?;
    let rating = parse_rating("rating", rating)?;

    Ok(NewReview {
        mid,
        uid,
        text: text.to_string(),
        rating,
    })
}
