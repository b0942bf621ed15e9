//! Navigation intent and decision types.
//!
//! An intent is the classifier's raw structured guess; a decision is the
//! fully resolved outcome returned to the caller. Both serialize with the
//! platform's JSON wire shape (`requiresId`, `type`, ...).

use serde::{Deserialize, Serialize};

/// Outcome tag carried on intents and decisions.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum NavigationStatus {
    Success,
    Error,
    Redirect,
}

/// The classifier's structured guess at what the user wants, prior to
/// entity resolution. The route may still contain placeholders.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct NavigationIntent {
    /// Route template, possibly containing `{courseId}`/`{sessionId}`.
    pub route: String,
    /// User-facing message.
    pub message: String,
    /// Whether the route needs an identifier the classifier could not fill.
    #[serde(default)]
    pub requires_id: bool,
    #[serde(rename = "type")]
    pub status: NavigationStatus,
    /// Free-text course name guess supplied by the classifier.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub course_name: Option<String>,
    /// Free-text session title guess supplied by the classifier.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub session_title: Option<String>,
}

impl NavigationIntent {
    /// Canned fallback used whenever classification cannot produce a
    /// well-formed intent. Always a safe static route.
    pub fn fallback(message: impl Into<String>) -> Self {
        Self {
            route: "/".to_string(),
            message: message.into(),
            requires_id: false,
            status: NavigationStatus::Error,
            course_name: None,
            session_title: None,
        }
    }
}

/// The final, fully-resolved navigation outcome returned to the caller.
/// All placeholders are substituted with concrete identifiers, or the
/// route points at a safe fallback page.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct NavigationDecision {
    pub route: String,
    pub message: String,
    #[serde(default)]
    pub requires_id: bool,
    #[serde(rename = "type")]
    pub status: NavigationStatus,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub course_name: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub session_title: Option<String>,
}

impl From<NavigationIntent> for NavigationDecision {
    fn from(intent: NavigationIntent) -> Self {
        Self {
            route: intent.route,
            message: intent.message,
            requires_id: intent.requires_id,
            status: intent.status,
            course_name: intent.course_name,
            session_title: intent.session_title,
        }
    }
}
