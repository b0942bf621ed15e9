//! Infrastructure layer for the Aiyo navigation core.
//!
//! HTTP-backed accessors for the platform's REST API plus an in-memory
//! catalog used in tests and offline tooling.

pub mod http_course_catalog;
pub mod http_news_feed;
pub mod in_memory_catalog;

pub use http_course_catalog::HttpCourseCatalog;
pub use http_news_feed::HttpNewsFeed;
pub use in_memory_catalog::InMemoryCourseCatalog;
