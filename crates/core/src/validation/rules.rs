//! Field kinds and violation types.

use std::fmt;

use serde::Serialize;

use crate::error::CoreError;

/// The format family a raw field value is checked against.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FieldKind {
    /// Numeric key (`uid`, `mid`, `director_uid`, `entered_by`, ...).
    Identifier,
    Username,
    Email,
    Password,
    AdminPosition,
    DirectorName,
    /// Actor name; unlike a director name it may be empty.
    ActorName,
    MovieTitle,
    ReviewText,
    Rating,
    CharacterRole,
}

impl FieldKind {
    /// Short rule name reported in violations.
    pub fn rule_name(self) -> &'static str {
        match self {
            Self::Identifier => "identifier",
            Self::Username => "username",
            Self::Email => "email",
            Self::Password => "password",
            Self::AdminPosition => "position",
            Self::DirectorName => "person_name",
            Self::ActorName => "actor_name",
            Self::MovieTitle => "title",
            Self::ReviewText => "review_text",
            Self::Rating => "rating",
            Self::CharacterRole => "character_role",
        }
    }
}

/// A single field-level rule violation.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct FieldViolation {
    pub field: String,
    pub rule: &'static str,
    pub message: String,
}

impl FieldViolation {
    pub fn new(field: &str, kind: FieldKind, message: impl Into<String>) -> Self {
        Self {
            field: field.to_string(),
            rule: kind.rule_name(),
            message: message.into(),
        }
    }
}

impl fmt::Display for FieldViolation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.message)
    }
}

impl From<FieldViolation> for CoreError {
    fn from(violation: FieldViolation) -> Self {
        CoreError::Validation(violation.message)
    }
}
