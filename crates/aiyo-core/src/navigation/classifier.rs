//! Intent classifier trait and catalog summary.

use async_trait::async_trait;
use serde::{Deserialize, Serialize};

use super::intent::NavigationIntent;
use crate::course::Course;

/// The `(title, id)` pair embedded into the classifier prompt for each
/// course in the catalog snapshot.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CourseSummary {
    pub id: String,
    pub title: String,
}

impl From<&Course> for CourseSummary {
    fn from(course: &Course) -> Self {
        Self {
            id: course.id.clone(),
            title: course.title.clone(),
        }
    }
}

/// Builds the prompt-facing summary for a catalog snapshot, preserving
/// catalog order.
pub fn summarize_catalog(catalog: &[Course]) -> Vec<CourseSummary> {
    catalog.iter().map(CourseSummary::from).collect()
}

/// Open-ended intent classification, delegated to an external generative
/// text completion service.
///
/// Implementations are infallible by contract: any transport failure or
/// unparseable response must degrade to a canned fallback intent
/// (`NavigationIntent::fallback`) rather than surface an error.
#[async_trait]
pub trait IntentClassifier: Send + Sync {
    /// Classifies a raw voice command against the catalog summary.
    async fn classify(&self, command: &str, catalog: &[CourseSummary]) -> NavigationIntent;
}
