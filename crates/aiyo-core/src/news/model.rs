//! News article domain model.

use serde::{Deserialize, Serialize};

/// An inspirational news article shown on the platform home page.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct News {
    /// Opaque document identifier.
    pub id: String,
    pub title: String,
    pub description: String,
    /// Name of the person featured in the article.
    pub name: String,
    pub age: u32,
    pub job: String,
    pub image_src: String,
    /// Creation timestamp (ISO 8601 format).
    pub created_at: String,
}
