use anyhow::Result;

use aiyo_core::news::NewsRepository;
use aiyo_infrastructure::HttpNewsFeed;

/// Lists the news feed, newest first.
pub async fn run() -> Result<()> {
    let feed = HttpNewsFeed::new(super::api_base_url());
    let articles = feed.fetch_news().await?;

    if articles.is_empty() {
        println!("No news available.");
        return Ok(());
    }

    for article in articles {
        println!("{} - {} ({}, {})", article.title, article.name, article.job, article.age);
    }

    Ok(())
}
