use crate::roles::Tier;
use crate::types::DbId;

#[derive(Debug, thiserror::Error)]
pub enum CoreError {
    #[error("Entity not found: {entity} with id {id}")]
    NotFound { entity: &'static str, id: DbId },

    #[error("Validation failed: {0}")]
    Validation(String),

    #[error("Decode failed: {0}")]
    Decode(String),

    #[error("Constraint violation: {0}")]
    ConstraintViolation(String),

    #[error("Unauthenticated: {0}")]
    Unauthenticated(String),

    /// Caller tier is below the tier required for `resource`.
    #[error("Forbidden: {resource} requires {required} access")]
    Forbidden { required: Tier, resource: String },

    #[error("Internal error: {0}")]
    Internal(String),
}
