pub mod auth;
pub mod browse;
pub mod bulk;
pub mod entry;
pub mod movies;
pub mod poster;
