//! Voice navigation domain module.
//!
//! Types and pure logic for turning a classified voice command into a
//! concrete in-app route.

pub mod classifier;
pub mod intent;
pub mod matcher;
pub mod route;

pub use classifier::{CourseSummary, IntentClassifier};
pub use intent::{NavigationDecision, NavigationIntent, NavigationStatus};
pub use matcher::{find_course_by_name, find_session_by_title, SessionMatch};
pub use route::{RouteTemplate, StaticRoute};
