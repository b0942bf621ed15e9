pub mod chat;
pub mod courses;
pub mod news;
pub mod resolve;

/// Base URL of the platform REST API. Defaults to the local dev server.
pub fn api_base_url() -> String {
    std::env::var("AIYO_API_BASE_URL").unwrap_or_else(|_| "http://localhost:3000".to_string())
}
