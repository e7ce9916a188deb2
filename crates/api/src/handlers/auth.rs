//! Handlers for the `/auth` resource.

use axum::extract::State;
use axum::Json;
use serde::{Deserialize, Serialize};
use ymdb_core::error::CoreError;
use ymdb_core::roles::Tier;
use ymdb_core::types::DbId;
use ymdb_db::repositories::UserRepo;

use crate::auth::jwt::generate_access_token;
use crate::auth::password::verify_password;
use crate::error::{AppError, AppResult};
use crate::state::AppState;

// ---------------------------------------------------------------------------
// Request / response types
// ---------------------------------------------------------------------------

/// Request body for `POST /auth/login`.
#[derive(Debug, Deserialize)]
pub struct LoginRequest {
    pub username: String,
    pub password: String,
}

/// Successful login response.
#[derive(Debug, Serialize)]
pub struct AuthResponse {
    pub access_token: String,
    /// Access token lifetime in seconds.
    pub expires_in: i64,
    pub user: UserInfo,
}

/// Public user info embedded in [`AuthResponse`].
#[derive(Debug, Serialize)]
pub struct UserInfo {
    pub uid: DbId,
    pub u_name: String,
    pub email: String,
    pub tier: Tier,
}

fn invalid_credentials() -> AppError {
    AppError::Core(CoreError::Unauthenticated(
        "Invalid username or password".into(),
    ))
}

// ---------------------------------------------------------------------------
// Handlers
// ---------------------------------------------------------------------------

/// POST /api/v1/auth/login
///
/// Verify a username + password and issue an access token carrying the
/// caller's tier. Unknown users, users without a password and wrong
/// passwords all get the same 401.
pub async fn login(
    State(state): State<AppState>,
    Json(input): Json<LoginRequest>,
) -> AppResult<Json<AuthResponse>> {
    let creds = UserRepo::find_credentials(&state.pool, &input.username)
        .await?
        .ok_or_else(invalid_credentials)?;

    let hash = creds.password_hash.as_deref().ok_or_else(invalid_credentials)?;

    let password_valid = verify_password(&input.password, hash)
        .map_err(|e| AppError::InternalError(format!("Password verification error: {e}")))?;
    if !password_valid {
        tracing::debug!(u_name = %creds.u_name, "Login rejected");
        return Err(invalid_credentials());
    }

    let tier = Tier::for_registered(creds.position.as_deref());
    let access_token = generate_access_token(creds.uid, tier, &state.config.jwt)
        .map_err(|e| AppError::InternalError(format!("Token generation failed: {e}")))?;

    tracing::info!(uid = creds.uid, %tier, "User logged in");

    Ok(Json(AuthResponse {
        access_token,
        expires_in: state.config.jwt.expires_in_secs(),
        user: UserInfo {
            uid: creds.uid,
            u_name: creds.u_name,
            email: creds.email,
            tier,
        },
    }))
}
