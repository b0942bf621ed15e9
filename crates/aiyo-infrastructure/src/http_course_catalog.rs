//! HTTP-backed course catalog accessor.
//!
//! Reads the course collection through the platform's REST surface
//! (`GET /api/courses`), which already returns courses newest-created
//! first. The backing document store is never touched directly.

use async_trait::async_trait;
use reqwest::{Client, StatusCode};
use serde::Deserialize;

use aiyo_core::course::{Course, CourseCatalog};
use aiyo_core::AiyoError;

/// Wire shape of `GET /api/courses`.
#[derive(Debug, Deserialize)]
struct CoursesResponse {
    courses: Vec<Course>,
}

/// Course catalog accessor backed by the platform REST API.
#[derive(Debug, Clone)]
pub struct HttpCourseCatalog {
    client: Client,
    base_url: String,
}

impl HttpCourseCatalog {
    /// Creates an accessor for the given API base URL
    /// (e.g. `https://aiyo.example.com`).
    pub fn new(base_url: impl Into<String>) -> Self {
        let base_url = base_url.into().trim_end_matches('/').to_string();
        Self {
            client: Client::new(),
            base_url,
        }
    }

    /// Fetches a single course by its document id.
    ///
    /// Returns `AiyoError::NotFound` for an unknown id and
    /// `AiyoError::CatalogUnavailable` for transport failures.
    pub async fn fetch_course(&self, course_id: &str) -> Result<Course, AiyoError> {
        let url = format!("{}/api/courses/{}", self.base_url, course_id);

        let response = self
            .client
            .get(&url)
            .send()
            .await
            .map_err(|err| AiyoError::catalog_unavailable(format!("request failed: {err}")))?;

        if !response.status().is_success() {
            return Err(map_course_lookup_error(response.status(), course_id, &url));
        }

        response
            .json::<Course>()
            .await
            .map_err(|err| AiyoError::catalog_unavailable(format!("decode failed: {err}")))
    }
}

/// Maps a non-success status from the single-course endpoint: 404 means the
/// id is unknown, anything else means the catalog could not be reached.
fn map_course_lookup_error(status: StatusCode, course_id: &str, url: &str) -> AiyoError {
    if status == StatusCode::NOT_FOUND {
        AiyoError::not_found("course", course_id)
    } else {
        AiyoError::catalog_unavailable(format!("unexpected status {status} from {url}"))
    }
}

#[async_trait]
impl CourseCatalog for HttpCourseCatalog {
    async fn fetch_catalog(&self) -> Result<Vec<Course>, AiyoError> {
        let url = format!("{}/api/courses", self.base_url);

        let response = self
            .client
            .get(&url)
            .send()
            .await
            .map_err(|err| AiyoError::catalog_unavailable(format!("request failed: {err}")))?;

        if !response.status().is_success() {
            return Err(AiyoError::catalog_unavailable(format!(
                "unexpected status {} from {}",
                response.status(),
                url
            )));
        }

        let parsed: CoursesResponse = response
            .json()
            .await
            .map_err(|err| AiyoError::catalog_unavailable(format!("decode failed: {err}")))?;

        tracing::debug!(count = parsed.courses.len(), "fetched course catalog");
        Ok(parsed.courses)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_base_url_trailing_slash_is_trimmed() {
        let catalog = HttpCourseCatalog::new("https://aiyo.example.com/");
        assert_eq!(catalog.base_url, "https://aiyo.example.com");
    }

    #[test]
    fn test_courses_response_decodes() {
        let json = r#"{
            "courses": [
                {
                    "id": "c1",
                    "title": "Computer Science",
                    "description": "Foundations",
                    "difficulty": "Moderate",
                    "imageSrc": "/images/cs.png",
                    "sessions": [
                        { "sessionTitle": "Introduction to Computer Science" }
                    ],
                    "createdAt": "2025-01-15T09:30:00Z"
                }
            ]
        }"#;

        let parsed: CoursesResponse = serde_json::from_str(json).unwrap();
        assert_eq!(parsed.courses.len(), 1);
        assert_eq!(parsed.courses[0].sessions.len(), 1);
    }

    #[test]
    fn test_course_lookup_404_maps_to_not_found() {
        let err = map_course_lookup_error(
            StatusCode::NOT_FOUND,
            "c-missing",
            "https://aiyo.example.com/api/courses/c-missing",
        );
        assert!(err.is_not_found());
        assert_eq!(err.to_string(), "Entity not found: course 'c-missing'");
    }

    #[test]
    fn test_course_lookup_server_error_maps_to_unavailable() {
        let err = map_course_lookup_error(
            StatusCode::INTERNAL_SERVER_ERROR,
            "c1",
            "https://aiyo.example.com/api/courses/c1",
        );
        assert!(err.is_catalog_unavailable());
    }

    #[test]
    fn test_single_course_response_decodes() {
        let json = r#"{
            "id": "c1",
            "title": "Computer Science",
            "description": "Foundations",
            "difficulty": "Moderate",
            "imageSrc": "/images/cs.png",
            "sessions": [
                {
                    "sessionTitle": "Data Structures",
                    "videoSrc": "https://videos.example.com/ds"
                }
            ],
            "createdAt": "2025-01-15T09:30:00Z"
        }"#;

        let course: Course = serde_json::from_str(json).unwrap();
        assert_eq!(course.id, "c1");
        assert_eq!(
            course.sessions[0].video_src.as_deref(),
            Some("https://videos.example.com/ds")
        );
    }
}
