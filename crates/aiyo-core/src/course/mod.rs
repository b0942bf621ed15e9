//! Course domain module.

pub mod model;
pub mod repository;

pub use model::{Course, Difficulty, Session};
pub use repository::CourseCatalog;
