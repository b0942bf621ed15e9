//! News repository trait.

use async_trait::async_trait;

use super::model::News;
use crate::AiyoError;

/// Read-only access to the news feed.
#[async_trait]
pub trait NewsRepository: Send + Sync {
    /// Fetches all news articles, newest-created first.
    async fn fetch_news(&self) -> Result<Vec<News>, AiyoError>;
}
