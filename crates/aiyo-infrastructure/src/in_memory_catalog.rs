//! In-memory course catalog.
//!
//! Serves a fixed snapshot without any I/O. Used by tests and by offline
//! tooling that wants resolver behavior without a running platform API.

use async_trait::async_trait;

use aiyo_core::course::{Course, CourseCatalog};
use aiyo_core::AiyoError;

/// A course catalog that serves a fixed, pre-loaded snapshot.
#[derive(Debug, Clone, Default)]
pub struct InMemoryCourseCatalog {
    courses: Vec<Course>,
}

impl InMemoryCourseCatalog {
    /// Creates a catalog over the given courses. Order is preserved; the
    /// caller is responsible for newest-first ordering.
    pub fn new(courses: Vec<Course>) -> Self {
        Self { courses }
    }

    /// Number of courses in the snapshot.
    pub fn len(&self) -> usize {
        self.courses.len()
    }

    /// Whether the snapshot is empty.
    pub fn is_empty(&self) -> bool {
        self.courses.is_empty()
    }
}

#[async_trait]
impl CourseCatalog for InMemoryCourseCatalog {
    async fn fetch_catalog(&self) -> Result<Vec<Course>, AiyoError> {
        Ok(self.courses.clone())
    }
}
