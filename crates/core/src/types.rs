/// All database primary keys are SQLite INTEGER rowids.
pub type DbId = i64;

/// Absolute times are stored as seconds since the Unix epoch (UTC).
pub type EpochSeconds = i64;
