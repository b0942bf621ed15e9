//! Route templates for the platform's page structure.
//!
//! The classifier prompt advertises a fixed table of routes; two of them
//! carry placeholders that the resolver must fill from the catalog. The
//! placeholder routes are modeled as enum variants so the resolver's
//! branch logic stays exhaustive instead of string-matching magic markers.

/// Placeholder for a course id in a dynamic route template.
pub const COURSE_ID_PLACEHOLDER: &str = "{courseId}";
/// Placeholder for a 1-based session ordinal in a dynamic route template.
pub const SESSION_ID_PLACEHOLDER: &str = "{sessionId}";

/// Route template for a course roadmap page.
pub const COURSE_ROADMAP_TEMPLATE: &str = "/courses/{courseId}/roadmap";
/// Route template for a session detail page.
pub const SESSION_DETAIL_TEMPLATE: &str = "/courses/{courseId}/roadmap/{sessionId}";

/// Pages reachable without any catalog lookup.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum StaticRoute {
    Home,
    Courses,
    News,
    Profile,
}

impl StaticRoute {
    /// The concrete path for this page.
    pub fn as_path(&self) -> &'static str {
        match self {
            Self::Home => "/",
            Self::Courses => "/courses",
            Self::News => "/news",
            Self::Profile => "/profile",
        }
    }
}

/// The route table advertised to the classifier, in prompt order.
pub const ROUTE_TABLE: [(&str, &str); 6] = [
    ("Home", "/"),
    ("Courses list", "/courses"),
    ("Course roadmap", COURSE_ROADMAP_TEMPLATE),
    ("Session detail", SESSION_DETAIL_TEMPLATE),
    ("News", "/news"),
    ("Profile", "/profile"),
];

/// A route template as returned by the intent classifier.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum RouteTemplate {
    /// A fixed path with no placeholders, passed through unchanged.
    Static(String),
    /// `/courses/{courseId}/roadmap` - needs a course id.
    CourseRoadmap,
    /// `/courses/{courseId}/roadmap/{sessionId}` - needs a course id and
    /// a 1-based session ordinal.
    SessionDetail,
}

impl RouteTemplate {
    /// Classifies a raw route string from the classifier.
    ///
    /// Anything without a recognized placeholder is treated as static, so
    /// an inventive classifier response can never panic the resolver.
    pub fn parse(route: &str) -> Self {
        if route.contains(SESSION_ID_PLACEHOLDER) {
            Self::SessionDetail
        } else if route.contains(COURSE_ID_PLACEHOLDER) {
            Self::CourseRoadmap
        } else {
            Self::Static(route.to_string())
        }
    }
}

/// Renders the roadmap path for a course.
pub fn course_roadmap_path(course_id: &str) -> String {
    format!("/courses/{course_id}/roadmap")
}

/// Renders the detail path for a session, identified by its 1-based ordinal.
pub fn session_detail_path(course_id: &str, session_ordinal: usize) -> String {
    format!("/courses/{course_id}/roadmap/{session_ordinal}")
}
