//! Tier gate extractor.
//!
//! [`Gate`] resolves the [`Caller`] and checks it against the tier required
//! by one [`Action`]. Because it only reads request parts, it runs before any
//! body extractor: a denied caller never has their form, multipart upload or
//! bulk payload decoded.

use std::marker::PhantomData;

use axum::extract::FromRequestParts;
use axum::http::request::Parts;
use ymdb_core::roles::{authorize, Action};

use super::auth::Caller;
use crate::error::AppError;
use crate::state::AppState;

/// Marker type naming the action a [`Gate`] protects.
pub trait GatedAction: Send + Sync + 'static {
    const ACTION: Action;
}

/// A caller admitted to action `A`. Rejects with 403 otherwise.
///
/// ```ignore
/// async fn enter_actor(gate: Gate<EnterActor>, Form(raw): Form<RawRecord>) -> AppResult<...> {
///     let uid = gate.caller.uid;
///     ...
/// }
/// ```
pub struct Gate<A: GatedAction> {
    pub caller: Caller,
    _action: PhantomData<A>,
}

impl<A: GatedAction> FromRequestParts<AppState> for Gate<A> {
    type Rejection = AppError;

    async fn from_request_parts(
        parts: &mut Parts,
        state: &AppState,
    ) -> Result<Self, Self::Rejection> {
        let caller = Caller::from_request_parts(parts, state).await?;
        if let Err(denied) = authorize(caller.tier, A::ACTION) {
            tracing::debug!(tier = %caller.tier, action = ?A::ACTION, "Caller denied");
            return Err(denied.into());
        }
        Ok(Gate {
            caller,
            _action: PhantomData,
        })
    }
}

macro_rules! gated_actions {
    ($($name:ident => $action:ident),* $(,)?) => {
        $(
            pub struct $name;

            impl GatedAction for $name {
                const ACTION: Action = Action::$action;
            }
        )*
    };
}

gated_actions! {
    EntryIndex => EntryIndex,
    EnterUser => EnterUser,
    EnterAdmin => EnterAdmin,
    EnterDirector => EnterDirector,
    EnterActor => EnterActor,
    EnterMovie => EnterMovie,
    EnterReview => EnterReview,
    EnterActedIn => EnterActedIn,
    UploadPoster => UploadPoster,
    BulkImport => BulkImport,
    SubmitMovieReview => SubmitMovieReview,
}
