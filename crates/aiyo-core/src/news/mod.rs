//! News domain module.

pub mod model;
pub mod repository;

pub use model::News;
pub use repository::NewsRepository;
