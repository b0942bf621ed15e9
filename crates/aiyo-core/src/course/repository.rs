//! Course catalog repository trait.

use async_trait::async_trait;

use super::model::Course;
use crate::AiyoError;

/// Read-only access to the full course catalog.
///
/// Implementations must return courses newest-created first. A failing
/// backing store surfaces as `AiyoError::CatalogUnavailable`; callers in
/// the navigation path are expected to degrade to an empty snapshot
/// rather than abort.
#[async_trait]
pub trait CourseCatalog: Send + Sync {
    /// Fetches the full catalog snapshot for one resolution request.
    async fn fetch_catalog(&self) -> Result<Vec<Course>, AiyoError>;
}
