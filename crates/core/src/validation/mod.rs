//! Field validator.
//!
//! Pure format, length and range checks per [`FieldKind`]. No I/O, no
//! mutation. Every pattern is anchored to the whole value: a value that
//! merely starts with digits is not an identifier.

pub mod fields;
pub mod rules;

pub use fields::{check, parse_identifier, parse_optional_identifier, parse_rating};
pub use rules::{FieldKind, FieldViolation};
