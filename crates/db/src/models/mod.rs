//! Row structs for every table plus read-side projections.
//!
//! Row structs derive `FromRow` for `query_as` and `Serialize` for API
//! output. Write inputs are the validated tuples from `ymdb_core::entity`.

pub mod acted_in;
pub mod actor;
pub mod admin;
pub mod director;
pub mod movie;
pub mod movie_detail;
pub mod options;
pub mod poster;
pub mod review;
pub mod user;
