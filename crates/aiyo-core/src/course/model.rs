//! Course and session domain models.
//!
//! Courses are owned by the backing store and are read-only from the
//! navigation core's perspective. A session has no stored id: its identity
//! within a course is its 1-based position in the parent's session list.

use serde::{Deserialize, Serialize};

/// Course difficulty rating as stored in the backing store.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Difficulty {
    Easy,
    Moderate,
    Hard,
}

/// A single lesson session inside a course.
///
/// Session ordinals are dense: position `i` in `Course::sessions` is
/// session `i + 1` in routes.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Session {
    /// Human-readable session title.
    pub session_title: String,
    /// Optional video reference for the lesson.
    #[serde(default)]
    pub video_src: Option<String>,
    /// Related topic tags (unordered).
    #[serde(default)]
    pub topics_related: Vec<String>,
}

impl Session {
    /// Creates a session with just a title.
    pub fn new(session_title: impl Into<String>) -> Self {
        Self {
            session_title: session_title.into(),
            video_src: None,
            topics_related: Vec::new(),
        }
    }
}

/// A course record with its ordered sessions.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Course {
    /// Opaque, stable document identifier.
    pub id: String,
    pub title: String,
    pub description: String,
    pub difficulty: Difficulty,
    pub image_src: String,
    /// Ordered session list; may be empty.
    #[serde(default)]
    pub sessions: Vec<Session>,
    /// Creation timestamp (ISO 8601 format).
    pub created_at: String,
}

impl Course {
    /// Returns the session at the given 1-based ordinal, if any.
    pub fn session_by_ordinal(&self, ordinal: usize) -> Option<&Session> {
        ordinal.checked_sub(1).and_then(|i| self.sessions.get(i))
    }
}
