//! HTTP-backed news feed accessor.

use async_trait::async_trait;
use reqwest::Client;
use serde::Deserialize;

use aiyo_core::news::{News, NewsRepository};
use aiyo_core::AiyoError;

/// Wire shape of `GET /api/news`.
#[derive(Debug, Deserialize)]
struct NewsResponse {
    success: bool,
    #[serde(default)]
    news: Vec<News>,
    #[serde(default)]
    error: Option<String>,
}

/// News feed accessor backed by the platform REST API.
#[derive(Debug, Clone)]
pub struct HttpNewsFeed {
    client: Client,
    base_url: String,
}

impl HttpNewsFeed {
    /// Creates an accessor for the given API base URL.
    pub fn new(base_url: impl Into<String>) -> Self {
        let base_url = base_url.into().trim_end_matches('/').to_string();
        Self {
            client: Client::new(),
            base_url,
        }
    }
}

#[async_trait]
impl NewsRepository for HttpNewsFeed {
    async fn fetch_news(&self) -> Result<Vec<News>, AiyoError> {
        let url = format!("{}/api/news", self.base_url);

        let response = self
            .client
            .get(&url)
            .send()
            .await
            .map_err(|err| AiyoError::data_access(format!("news request failed: {err}")))?;

        if !response.status().is_success() {
            return Err(AiyoError::data_access(format!(
                "unexpected status {} from {}",
                response.status(),
                url
            )));
        }

        let parsed: NewsResponse = response
            .json()
            .await
            .map_err(|err| AiyoError::data_access(format!("news decode failed: {err}")))?;

        if !parsed.success {
            return Err(AiyoError::data_access(
                parsed
                    .error
                    .unwrap_or_else(|| "news endpoint reported failure".to_string()),
            ));
        }

        tracing::debug!(count = parsed.news.len(), "fetched news feed");
        Ok(parsed.news)
    }
}
