//! YMDB domain core.
//!
//! Pure logic shared by the storage and HTTP layers:
//!
//! - [`validation`]: per-field format, length and range rules.
//! - [`codec`] and [`dates`]: raw field maps to typed storage tuples.
//! - [`roles`]: the tier ladder and the authorization gate.
//! - [`bulk`]: tab-delimited bulk payloads to validated batches.
//! - [`blob`] and [`naming`]: poster storage and canonical filenames.

pub mod blob;
pub mod bulk;
pub mod codec;
pub mod dates;
pub mod entity;
pub mod error;
pub mod naming;
pub mod roles;
pub mod types;
pub mod validation;
