//! Domain layer for the Aiyo learning platform's navigation core.
//!
//! This crate holds the course/news models, the error type shared across
//! the workspace, the pure entity-matching logic, and the trait seams
//! (catalog, news, intent classifier) that the infrastructure and
//! interaction crates implement.

pub mod course;
pub mod error;
pub mod navigation;
pub mod news;

// Re-export common error type
pub use error::AiyoError;
