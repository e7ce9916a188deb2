//! Handlers for the `/entry` resource: single-row data entry.
//!
//! Each form handler is gated on its own action, decodes the urlencoded body
//! through the entity codec and hands the validated record to the write
//! orchestrator. The option endpoints feed the select boxes of the forms.

use axum::extract::State;
use axum::http::StatusCode;
use axum::{Form, Json};
use serde::Serialize;
use ymdb_core::codec::{decode_form, form_fields, FormContext, RawRecord};
use ymdb_core::entity::EntityKind;
use ymdb_core::roles::{Action, Tier};
use ymdb_db::models::options::EntryOption;
use ymdb_db::repositories::OptionsRepo;
use ymdb_db::writes::{InsertedRecord, WriteOrchestrator};

use crate::auth::password::Argon2Hasher;
use crate::error::AppResult;
use crate::middleware::auth::Caller;
use crate::middleware::rbac::{
    EnterActedIn, EnterActor, EnterAdmin, EnterDirector, EnterMovie, EnterReview, EnterUser,
    EntryIndex, Gate,
};
use crate::response::{DataResponse, EntryResponse};
use crate::state::AppState;

/// Fields of the bulk upload form.
const BULK_FIELDS: &[&str] = &["relation", "csv_data"];

/// Entry forms listed by the index, in display order.
const ENTRY_FORMS: &[(EntityKind, Action)] = &[
    (EntityKind::User, Action::EnterUser),
    (EntityKind::Admin, Action::EnterAdmin),
    (EntityKind::Director, Action::EnterDirector),
    (EntityKind::Actor, Action::EnterActor),
    (EntityKind::Movie, Action::EnterMovie),
    (EntityKind::Review, Action::EnterReview),
    (EntityKind::ActedIn, Action::EnterActedIn),
    (EntityKind::Poster, Action::UploadPoster),
];

// ---------------------------------------------------------------------------
// Response types
// ---------------------------------------------------------------------------

/// One entry point in the catalogue served by `GET /entry`.
#[derive(Debug, Serialize)]
pub struct EntryForm {
    /// Relation name, or `"bulk"` for the bulk upload.
    pub kind: &'static str,
    /// Path relative to `/api/v1`.
    pub path: &'static str,
    pub required_tier: Tier,
    pub fields: &'static [&'static str],
}

#[derive(Debug, Serialize)]
pub struct MovieFormOptions {
    pub directors: Vec<EntryOption>,
}

#[derive(Debug, Serialize)]
pub struct ReviewFormOptions {
    pub movies: Vec<EntryOption>,
    pub users: Vec<EntryOption>,
}

#[derive(Debug, Serialize)]
pub struct ActedInFormOptions {
    pub movies: Vec<EntryOption>,
    pub actors: Vec<EntryOption>,
}

type Created = (StatusCode, Json<EntryResponse<InsertedRecord>>);

// ---------------------------------------------------------------------------
// Index
// ---------------------------------------------------------------------------

/// GET /api/v1/entry
pub async fn index(_gate: Gate<EntryIndex>) -> Json<DataResponse<Vec<EntryForm>>> {
    let mut forms: Vec<EntryForm> = ENTRY_FORMS
        .iter()
        .map(|&(kind, action)| EntryForm {
            kind: kind.relation(),
            path: action.resource(),
            required_tier: action.required_tier(),
            fields: form_fields(kind),
        })
        .collect();
    forms.push(EntryForm {
        kind: "bulk",
        path: Action::BulkImport.resource(),
        required_tier: Action::BulkImport.required_tier(),
        fields: BULK_FIELDS,
    });

    Json(DataResponse { data: forms })
}

// ---------------------------------------------------------------------------
// Single-row entry
// ---------------------------------------------------------------------------

/// Decode, validate and insert one form submission for `kind`.
async fn enter(state: &AppState, kind: EntityKind, caller: Caller, raw: RawRecord) -> AppResult<Created> {
    let record = {
        let ctx = FormContext {
            caller_uid: caller.uid,
            hasher: &Argon2Hasher,
        };
        decode_form(kind, &raw, &ctx)?
    };

    let inserted = WriteOrchestrator::insert(&state.pool, &record).await?;

    // Acted-in rows are "roles" to the people entering them.
    let label = match kind {
        EntityKind::ActedIn => "role",
        other => other.relation(),
    };
    Ok((
        StatusCode::CREATED,
        Json(EntryResponse {
            message: format!("inserted new {label} successfully"),
            record: inserted,
        }),
    ))
}

/// POST /api/v1/entry/user
pub async fn enter_user(
    State(state): State<AppState>,
    gate: Gate<EnterUser>,
    Form(raw): Form<RawRecord>,
) -> AppResult<Created> {
    enter(&state, EntityKind::User, gate.caller, raw).await
}

/// POST /api/v1/entry/admin
pub async fn enter_admin(
    State(state): State<AppState>,
    gate: Gate<EnterAdmin>,
    Form(raw): Form<RawRecord>,
) -> AppResult<Created> {
    enter(&state, EntityKind::Admin, gate.caller, raw).await
}

/// POST /api/v1/entry/director
pub async fn enter_director(
    State(state): State<AppState>,
    gate: Gate<EnterDirector>,
    Form(raw): Form<RawRecord>,
) -> AppResult<Created> {
    enter(&state, EntityKind::Director, gate.caller, raw).await
}

/// POST /api/v1/entry/actor
pub async fn enter_actor(
    State(state): State<AppState>,
    gate: Gate<EnterActor>,
    Form(raw): Form<RawRecord>,
) -> AppResult<Created> {
    enter(&state, EntityKind::Actor, gate.caller, raw).await
}

/// POST /api/v1/entry/movie
///
/// The caller is recorded as `entered_by`.
pub async fn enter_movie(
    State(state): State<AppState>,
    gate: Gate<EnterMovie>,
    Form(raw): Form<RawRecord>,
) -> AppResult<Created> {
    enter(&state, EntityKind::Movie, gate.caller, raw).await
}

/// POST /api/v1/entry/review
pub async fn enter_review(
    State(state): State<AppState>,
    gate: Gate<EnterReview>,
    Form(raw): Form<RawRecord>,
) -> AppResult<Created> {
    enter(&state, EntityKind::Review, gate.caller, raw).await
}

/// POST /api/v1/entry/acted
pub async fn enter_acted_in(
    State(state): State<AppState>,
    gate: Gate<EnterActedIn>,
    Form(raw): Form<RawRecord>,
) -> AppResult<Created> {
    enter(&state, EntityKind::ActedIn, gate.caller, raw).await
}

// ---------------------------------------------------------------------------
// Form options
// ---------------------------------------------------------------------------

/// GET /api/v1/entry/movie
pub async fn movie_options(
    State(state): State<AppState>,
    _gate: Gate<EnterMovie>,
) -> AppResult<Json<DataResponse<MovieFormOptions>>> {
    let directors = OptionsRepo::directors(&state.pool).await?;
    Ok(Json(DataResponse {
        data: MovieFormOptions { directors },
    }))
}

/// GET /api/v1/entry/review
pub async fn review_options(
    State(state): State<AppState>,
    _gate: Gate<EnterReview>,
) -> AppResult<Json<DataResponse<ReviewFormOptions>>> {
    let movies = OptionsRepo::movies(&state.pool).await?;
    let users = OptionsRepo::users(&state.pool).await?;
    Ok(Json(DataResponse {
        data: ReviewFormOptions { movies, users },
    }))
}

/// GET /api/v1/entry/acted
pub async fn acted_in_options(
    State(state): State<AppState>,
    _gate: Gate<EnterActedIn>,
) -> AppResult<Json<DataResponse<ActedInFormOptions>>> {
    let movies = OptionsRepo::movies(&state.pool).await?;
    let actors = OptionsRepo::actors(&state.pool).await?;
    Ok(Json(DataResponse {
        data: ActedInFormOptions { movies, actors },
    }))
}
