//! Voice command resolution use case.
//!
//! One resolution is a short, strictly sequential pipeline: validate the
//! command, snapshot the catalog, ask the classifier for an intent, then
//! fill in any route placeholders from the catalog. Every failure path
//! terminates in a well-formed decision; this service never returns an
//! error to the caller.

use std::sync::Arc;

use aiyo_core::course::{Course, CourseCatalog};
use aiyo_core::navigation::route::{
    course_roadmap_path, session_detail_path, RouteTemplate, StaticRoute,
};
use aiyo_core::navigation::{
    classifier::summarize_catalog, find_course_by_name, find_session_by_title, IntentClassifier,
    NavigationDecision, NavigationIntent, NavigationStatus,
};

/// Message returned when no command text was captured.
pub const EMPTY_COMMAND_MESSAGE: &str = "No command was captured. Please try again.";

/// Resolves free-form voice commands into concrete in-app routes.
///
/// Holds one catalog accessor and one intent classifier; each call to
/// [`resolve`](Self::resolve) performs at most one catalog fetch and one
/// classification, in that order (the classifier prompt embeds the
/// catalog summary). No retry loop exists within a single command; the
/// voice dialog lets the user reissue a new one.
pub struct VoiceNavigationService {
    catalog: Arc<dyn CourseCatalog>,
    classifier: Arc<dyn IntentClassifier>,
}

impl VoiceNavigationService {
    /// Creates the service over a catalog accessor and a classifier.
    pub fn new(catalog: Arc<dyn CourseCatalog>, classifier: Arc<dyn IntentClassifier>) -> Self {
        Self {
            catalog,
            classifier,
        }
    }

    /// Resolves one voice command to a navigation decision.
    pub async fn resolve(&self, command: &str) -> NavigationDecision {
        let command = command.trim();
        if command.is_empty() {
            // Resolved locally; the classifier is never consulted.
            return NavigationDecision {
                route: StaticRoute::Home.as_path().to_string(),
                message: EMPTY_COMMAND_MESSAGE.to_string(),
                requires_id: false,
                status: NavigationStatus::Error,
                course_name: None,
                session_title: None,
            };
        }

        tracing::info!(command, "resolving voice command");

        // A failing backing store degrades to an empty snapshot: static
        // routes keep working, entity lookups just come up empty.
        let catalog = match self.catalog.fetch_catalog().await {
            Ok(catalog) => catalog,
            Err(err) => {
                tracing::warn!(error = %err, "catalog fetch failed, continuing with empty snapshot");
                Vec::new()
            }
        };

        let summary = summarize_catalog(&catalog);
        let intent = self.classifier.classify(command, &summary).await;

        // A decision must never carry an unresolved placeholder: every
        // template arm either substitutes concrete identifiers or lands
        // on the course list.
        let decision = match RouteTemplate::parse(&intent.route) {
            RouteTemplate::SessionDetail => {
                match (intent.session_title.clone(), intent.course_name.clone()) {
                    (Some(guess), _) => resolve_session_route(&catalog, intent, &guess),
                    (None, Some(guess)) => resolve_course_route(&catalog, intent, &guess),
                    (None, None) => redirect_to_course_list(intent),
                }
            }
            RouteTemplate::CourseRoadmap => match intent.course_name.clone() {
                Some(guess) => resolve_course_route(&catalog, intent, &guess),
                None => redirect_to_course_list(intent),
            },
            RouteTemplate::Static(_) => NavigationDecision::from(intent),
        };

        tracing::info!(route = %decision.route, status = ?decision.status, "voice command resolved");
        decision
    }
}

/// Redirects a placeholder route that arrived without any usable guess to
/// the course list, keeping the classifier's message.
fn redirect_to_course_list(intent: NavigationIntent) -> NavigationDecision {
    tracing::warn!(route = %intent.route, "placeholder route without a guess, redirecting to course list");
    NavigationDecision {
        route: StaticRoute::Courses.as_path().to_string(),
        message: intent.message,
        requires_id: intent.requires_id,
        status: NavigationStatus::Redirect,
        course_name: None,
        session_title: None,
    }
}

/// Substitutes a session guess into the session detail route, or redirects
/// to the course list when nothing in the catalog matches.
fn resolve_session_route(
    catalog: &[Course],
    intent: NavigationIntent,
    guess: &str,
) -> NavigationDecision {
    match find_session_by_title(catalog, guess, intent.course_name.as_deref()) {
        Some(found) => {
            let session_title = found.course.sessions[found.session_index]
                .session_title
                .clone();
            NavigationDecision {
                route: session_detail_path(&found.course.id, found.session_index + 1),
                message: format!("Found \"{}\" in {}", session_title, found.course.title),
                requires_id: false,
                status: NavigationStatus::Success,
                course_name: Some(found.course.title.clone()),
                session_title: Some(session_title),
            }
        }
        None => {
            tracing::warn!(guess, "no session matched the classifier guess");
            NavigationDecision {
                route: StaticRoute::Courses.as_path().to_string(),
                message: format!("Couldn't find session \"{guess}\". Please browse available courses."),
                requires_id: false,
                status: NavigationStatus::Redirect,
                course_name: intent.course_name,
                session_title: Some(guess.to_string()),
            }
        }
    }
}

/// Substitutes a course guess into the roadmap route, or redirects to the
/// course list when nothing in the catalog matches.
fn resolve_course_route(
    catalog: &[Course],
    intent: NavigationIntent,
    guess: &str,
) -> NavigationDecision {
    match find_course_by_name(catalog, guess) {
        Some(course) => NavigationDecision {
            route: course_roadmap_path(&course.id),
            message: format!("Navigating to {} roadmap", course.title),
            requires_id: false,
            status: NavigationStatus::Success,
            course_name: Some(course.title.clone()),
            session_title: intent.session_title,
        },
        None => {
            tracing::warn!(guess, "no course matched the classifier guess");
            NavigationDecision {
                route: StaticRoute::Courses.as_path().to_string(),
                message: format!("I couldn't find \"{guess}\". Please select from available courses."),
                requires_id: false,
                status: NavigationStatus::Redirect,
                course_name: Some(guess.to_string()),
                session_title: intent.session_title,
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::sync::atomic::{AtomicUsize, Ordering};

    use async_trait::async_trait;
    use aiyo_core::course::{Difficulty, Session};
    use aiyo_core::navigation::route::{COURSE_ROADMAP_TEMPLATE, SESSION_DETAIL_TEMPLATE};
    use aiyo_core::navigation::CourseSummary;
    use aiyo_core::AiyoError;
    use aiyo_infrastructure::InMemoryCourseCatalog;
    use aiyo_interaction::classifier::FALLBACK_MESSAGE;
    use aiyo_interaction::{AgentError, GeminiIntentClassifier, TextCompletionAgent};

    fn computer_science_catalog() -> Vec<Course> {
        vec![Course {
            id: "c1".to_string(),
            title: "Computer Science".to_string(),
            description: "Foundations".to_string(),
            difficulty: Difficulty::Moderate,
            image_src: "/images/cs.png".to_string(),
            sessions: vec![
                Session::new("Introduction to Computer Science"),
                Session::new("Data Structures"),
            ],
            created_at: "2025-01-15T09:30:00Z".to_string(),
        }]
    }

    /// Classifier stub that returns a fixed intent and counts calls.
    struct StubClassifier {
        intent: NavigationIntent,
        calls: AtomicUsize,
    }

    impl StubClassifier {
        fn new(intent: NavigationIntent) -> Self {
            Self {
                intent,
                calls: AtomicUsize::new(0),
            }
        }
    }

    #[async_trait]
    impl IntentClassifier for StubClassifier {
        async fn classify(&self, _command: &str, _catalog: &[CourseSummary]) -> NavigationIntent {
            self.calls.fetch_add(1, Ordering::SeqCst);
            self.intent.clone()
        }
    }

    /// Catalog stub whose fetch always fails.
    struct FailingCatalog;

    #[async_trait]
    impl CourseCatalog for FailingCatalog {
        async fn fetch_catalog(&self) -> Result<Vec<Course>, AiyoError> {
            Err(AiyoError::catalog_unavailable("store offline"))
        }
    }

    /// Catalog stub that counts fetches.
    struct CountingCatalog {
        inner: InMemoryCourseCatalog,
        calls: AtomicUsize,
    }

    #[async_trait]
    impl CourseCatalog for CountingCatalog {
        async fn fetch_catalog(&self) -> Result<Vec<Course>, AiyoError> {
            self.calls.fetch_add(1, Ordering::SeqCst);
            self.inner.fetch_catalog().await
        }
    }

    fn course_intent(course_name: &str) -> NavigationIntent {
        NavigationIntent {
            route: COURSE_ROADMAP_TEMPLATE.to_string(),
            message: "Navigating to course roadmap".to_string(),
            requires_id: true,
            status: NavigationStatus::Redirect,
            course_name: Some(course_name.to_string()),
            session_title: None,
        }
    }

    fn session_intent(session_title: &str, course_name: Option<&str>) -> NavigationIntent {
        NavigationIntent {
            route: SESSION_DETAIL_TEMPLATE.to_string(),
            message: "Navigating to session".to_string(),
            requires_id: true,
            status: NavigationStatus::Redirect,
            course_name: course_name.map(str::to_string),
            session_title: Some(session_title.to_string()),
        }
    }

    fn service(
        catalog: Vec<Course>,
        classifier: StubClassifier,
    ) -> VoiceNavigationService {
        VoiceNavigationService::new(
            Arc::new(InMemoryCourseCatalog::new(catalog)),
            Arc::new(classifier),
        )
    }

    #[tokio::test]
    async fn test_course_command_resolves_roadmap_route() {
        let service = service(
            computer_science_catalog(),
            StubClassifier::new(course_intent("Computer Science")),
        );

        let decision = service.resolve("computer science course").await;
        assert_eq!(decision.route, "/courses/c1/roadmap");
        assert_eq!(decision.status, NavigationStatus::Success);
        assert_eq!(decision.message, "Navigating to Computer Science roadmap");
        assert!(!decision.requires_id);
    }

    #[tokio::test]
    async fn test_session_command_resolves_one_based_ordinal() {
        let service = service(
            computer_science_catalog(),
            StubClassifier::new(session_intent("introduction to computer science", None)),
        );

        let decision = service.resolve("introduction to computer science").await;
        assert_eq!(decision.route, "/courses/c1/roadmap/1");
        assert_eq!(decision.status, NavigationStatus::Success);
        assert_eq!(
            decision.message,
            "Found \"Introduction to Computer Science\" in Computer Science"
        );
    }

    #[tokio::test]
    async fn test_unknown_course_redirects_to_course_list() {
        let service = service(
            computer_science_catalog(),
            StubClassifier::new(course_intent("quantum teleportation")),
        );

        let decision = service.resolve("go to quantum teleportation").await;
        assert_eq!(decision.route, "/courses");
        assert_eq!(decision.status, NavigationStatus::Redirect);
        assert_eq!(
            decision.message,
            "I couldn't find \"quantum teleportation\". Please select from available courses."
        );
    }

    #[tokio::test]
    async fn test_unknown_session_redirects_to_course_list() {
        let service = service(
            computer_science_catalog(),
            StubClassifier::new(session_intent("underwater basket weaving", None)),
        );

        let decision = service.resolve("open underwater basket weaving").await;
        assert_eq!(decision.route, "/courses");
        assert_eq!(decision.status, NavigationStatus::Redirect);
        assert_eq!(
            decision.message,
            "Couldn't find session \"underwater basket weaving\". Please browse available courses."
        );
    }

    #[tokio::test]
    async fn test_empty_command_short_circuits() {
        let catalog = CountingCatalog {
            inner: InMemoryCourseCatalog::new(computer_science_catalog()),
            calls: AtomicUsize::new(0),
        };
        let classifier = StubClassifier::new(course_intent("Computer Science"));

        let service = VoiceNavigationService::new(Arc::new(catalog), Arc::new(classifier));
        let decision = service.resolve("   ").await;

        assert_eq!(decision.route, "/");
        assert_eq!(decision.status, NavigationStatus::Error);
        assert_eq!(decision.message, EMPTY_COMMAND_MESSAGE);
    }

    #[tokio::test]
    async fn test_empty_command_performs_no_fetch_or_classification() {
        let catalog = Arc::new(CountingCatalog {
            inner: InMemoryCourseCatalog::new(computer_science_catalog()),
            calls: AtomicUsize::new(0),
        });
        let classifier = Arc::new(StubClassifier::new(course_intent("Computer Science")));

        let service = VoiceNavigationService::new(catalog.clone(), classifier.clone());
        let _ = service.resolve("").await;

        assert_eq!(catalog.calls.load(Ordering::SeqCst), 0);
        assert_eq!(classifier.calls.load(Ordering::SeqCst), 0);
    }

    #[tokio::test]
    async fn test_failing_classifier_falls_back_to_home() {
        // Full pipeline: a classifier whose underlying agent errors must
        // surface as the canned retry decision, never as an error.
        struct DownAgent;

        #[async_trait]
        impl TextCompletionAgent for DownAgent {
            async fn execute(&self, _prompt: &str) -> Result<String, AgentError> {
                Err(AgentError::ExecutionFailed("service down".to_string()))
            }
        }

        let service = VoiceNavigationService::new(
            Arc::new(InMemoryCourseCatalog::new(computer_science_catalog())),
            Arc::new(GeminiIntentClassifier::new(DownAgent)),
        );

        let decision = service.resolve("take me somewhere").await;
        assert_eq!(decision.route, "/");
        assert_eq!(decision.status, NavigationStatus::Error);
        assert_eq!(decision.message, FALLBACK_MESSAGE);
    }

    #[tokio::test]
    async fn test_catalog_failure_degrades_to_redirect() {
        let service = VoiceNavigationService::new(
            Arc::new(FailingCatalog),
            Arc::new(StubClassifier::new(course_intent("Computer Science"))),
        );

        let decision = service.resolve("computer science course").await;
        assert_eq!(decision.route, "/courses");
        assert_eq!(decision.status, NavigationStatus::Redirect);
    }

    #[tokio::test]
    async fn test_catalog_failure_keeps_static_routes_working() {
        let intent = NavigationIntent {
            route: "/news".to_string(),
            message: "Navigating to News".to_string(),
            requires_id: false,
            status: NavigationStatus::Success,
            course_name: None,
            session_title: None,
        };

        let service = VoiceNavigationService::new(
            Arc::new(FailingCatalog),
            Arc::new(StubClassifier::new(intent)),
        );

        let decision = service.resolve("show me the news").await;
        assert_eq!(decision.route, "/news");
        assert_eq!(decision.status, NavigationStatus::Success);
    }

    #[tokio::test]
    async fn test_placeholder_route_without_guess_redirects_to_course_list() {
        let intent = NavigationIntent {
            route: COURSE_ROADMAP_TEMPLATE.to_string(),
            message: "Please select a course first to view its roadmap".to_string(),
            requires_id: true,
            status: NavigationStatus::Redirect,
            course_name: None,
            session_title: None,
        };

        let service = service(computer_science_catalog(), StubClassifier::new(intent));
        let decision = service.resolve("course roadmap").await;

        assert_eq!(decision.route, "/courses");
        assert_eq!(decision.status, NavigationStatus::Redirect);
        assert_eq!(
            decision.message,
            "Please select a course first to view its roadmap"
        );
    }

    #[tokio::test]
    async fn test_session_template_with_only_course_guess_resolves_roadmap() {
        let intent = NavigationIntent {
            route: SESSION_DETAIL_TEMPLATE.to_string(),
            message: "Navigating to session".to_string(),
            requires_id: true,
            status: NavigationStatus::Redirect,
            course_name: Some("Computer Science".to_string()),
            session_title: None,
        };

        let service = service(computer_science_catalog(), StubClassifier::new(intent));
        let decision = service.resolve("open a computer science lesson").await;

        assert_eq!(decision.route, "/courses/c1/roadmap");
        assert_eq!(decision.status, NavigationStatus::Success);
        assert_eq!(decision.message, "Navigating to Computer Science roadmap");
    }

    #[tokio::test]
    async fn test_decision_never_carries_placeholders() {
        let intents = [
            course_intent("Computer Science"),
            course_intent("quantum teleportation"),
            session_intent("data structures", None),
            session_intent("underwater basket weaving", None),
            session_intent("data structures", Some("Computer Science")),
            NavigationIntent {
                route: SESSION_DETAIL_TEMPLATE.to_string(),
                message: "Navigating to session".to_string(),
                requires_id: true,
                status: NavigationStatus::Redirect,
                course_name: Some("Computer Science".to_string()),
                session_title: None,
            },
            NavigationIntent {
                route: COURSE_ROADMAP_TEMPLATE.to_string(),
                message: "Please select a course first".to_string(),
                requires_id: true,
                status: NavigationStatus::Redirect,
                course_name: None,
                session_title: None,
            },
        ];

        for intent in intents {
            let service = service(computer_science_catalog(), StubClassifier::new(intent));
            let decision = service.resolve("some command").await;
            assert!(
                !decision.route.contains('{'),
                "unresolved placeholder in route {}",
                decision.route
            );
        }
    }

    #[tokio::test]
    async fn test_session_resolution_respects_course_hint() {
        let mut catalog = computer_science_catalog();
        catalog.push(Course {
            id: "c2".to_string(),
            title: "Data Analytics".to_string(),
            description: String::new(),
            difficulty: Difficulty::Easy,
            image_src: String::new(),
            sessions: vec![Session::new("Introduction to Spreadsheets")],
            created_at: "2025-02-01T00:00:00Z".to_string(),
        });

        let service = service(
            catalog,
            StubClassifier::new(session_intent("introduction", Some("Data Analytics"))),
        );

        let decision = service.resolve("intro lesson of data analytics").await;
        assert_eq!(decision.route, "/courses/c2/roadmap/1");
        assert_eq!(
            decision.message,
            "Found \"Introduction to Spreadsheets\" in Data Analytics"
        );
    }

    #[tokio::test]
    async fn test_resolution_is_idempotent() {
        let service = service(
            computer_science_catalog(),
            StubClassifier::new(course_intent("Computer Science")),
        );

        let first = service.resolve("computer science course").await;
        let second = service.resolve("computer science course").await;
        assert_eq!(first, second);
    }

    #[tokio::test]
    async fn test_decision_serializes_external_interface_shape() {
        let service = service(
            computer_science_catalog(),
            StubClassifier::new(course_intent("Computer Science")),
        );

        let decision = service.resolve("computer science course").await;
        let value = serde_json::to_value(&decision).unwrap();

        assert_eq!(value["route"], "/courses/c1/roadmap");
        assert_eq!(value["type"], "success");
        assert_eq!(value["requiresId"], false);
        assert_eq!(value["courseName"], "Computer Science");
    }
}
