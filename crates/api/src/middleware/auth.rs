//! Bearer-token identity extractor.

use axum::extract::FromRequestParts;
use axum::http::header::AUTHORIZATION;
use axum::http::request::Parts;
use ymdb_core::error::CoreError;
use ymdb_core::roles::Tier;
use ymdb_core::types::DbId;

use crate::auth::jwt::validate_token;
use crate::error::AppError;
use crate::state::AppState;

/// The identity behind a request.
///
/// A request without an `Authorization` header is an anonymous caller. A
/// header that is present but malformed, expired or signed with another
/// secret is rejected with 401 rather than downgraded to anonymous.
///
/// ```ignore
/// async fn whoami(caller: Caller) -> AppResult<Json<Tier>> {
///     Ok(Json(caller.tier))
/// }
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Caller {
    /// The caller's uid (`None` for anonymous callers).
    pub uid: Option<DbId>,
    pub tier: Tier,
}

impl Caller {
    pub const ANONYMOUS: Caller = Caller {
        uid: None,
        tier: Tier::Anonymous,
    };

    /// The caller's uid, or 401 for anonymous callers.
    pub fn require_uid(&self) -> Result<DbId, AppError> {
        self.uid.ok_or_else(|| {
            AppError::Core(CoreError::Unauthenticated("Login required".into()))
        })
    }
}

impl FromRequestParts<AppState> for Caller {
    type Rejection = AppError;

    async fn from_request_parts(
        parts: &mut Parts,
        state: &AppState,
    ) -> Result<Self, Self::Rejection> {
        let Some(header) = parts.headers.get(AUTHORIZATION) else {
            return Ok(Caller::ANONYMOUS);
        };

        let token = header
            .to_str()
            .ok()
            .and_then(|v| v.strip_prefix("Bearer "))
            .ok_or_else(|| {
                AppError::Core(CoreError::Unauthenticated(
                    "Invalid Authorization format. Expected: Bearer <token>".into(),
                ))
            })?;

        let claims = validate_token(token, &state.config.jwt).map_err(|_| {
            AppError::Core(CoreError::Unauthenticated("Invalid or expired token".into()))
        })?;

        let tier = Tier::from_name(&claims.tier).map_err(|_| {
            AppError::Core(CoreError::Unauthenticated("Token carries an unknown tier".into()))
        })?;

        Ok(Caller {
            uid: Some(claims.sub),
            tier,
        })
    }
}
