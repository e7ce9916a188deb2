//! Identity and authorization extractors.
//!
//! - [`auth::Caller`] -- Resolves the caller from an optional JWT Bearer token.
//! - [`rbac::Gate`] -- Admits the caller to one gated action or rejects with 403.

pub mod auth;
pub mod rbac;
