//! Gemini-backed intent classifier.
//!
//! Wraps a text completion agent with the fixed navigation instruction
//! prompt and defensive parsing of the JSON the model sends back. The
//! classifier never fails: every error path degrades to the canned
//! fallback intent pointing at the home page.

use async_trait::async_trait;
use minijinja::{context, Environment};
use once_cell::sync::Lazy;
use regex::Regex;

use aiyo_core::navigation::route::ROUTE_TABLE;
use aiyo_core::navigation::{CourseSummary, IntentClassifier, NavigationIntent};
use aiyo_core::AiyoError;

use crate::agent::{AgentError, TextCompletionAgent};
use crate::gemini_api_agent::GeminiApiAgent;

/// Message shown when classification produced nothing usable.
pub const FALLBACK_MESSAGE: &str =
    "I didn't understand that command. Try saying: Home, Courses, News, or Profile.";

const CLASSIFIER_PROMPT_TEMPLATE: &str = r#"You are a smart navigation assistant for an educational platform called Aiyo.
Your job is to interpret user voice commands and return the appropriate navigation path.

Available pages and routes in the app:
{% for route in routes -%}
- {{ route.name }}: "{{ route.path }}"
{% endfor %}
Courses currently available (title, id):
{% for course in catalog -%}
- "{{ course.title }}" ({{ course.id }})
{% endfor -%}
{% if not catalog -%}
- (none)
{% endif %}
User command: "{{ command }}"

Rules:
1. Be flexible with language - understand variations like "show me courses", "take me to my profile", "I want to see news".
2. Handle typos and grammar mistakes gracefully.
3. If the user names a specific course, return the course roadmap route and put your best guess of the course title in "courseName".
4. If the user names a specific lesson, return the session detail route and put your best guess of the lesson title in "sessionTitle" (plus "courseName" if a course was mentioned).
5. If the command is unclear, suggest the closest match. If nothing fits, return an error message.

Return your response in this exact JSON format:
{
  "route": "/path/to/route",
  "message": "Navigation message for user",
  "requiresId": false,
  "type": "success|error|redirect",
  "courseName": "optional course name guess",
  "sessionTitle": "optional lesson title guess"
}

Omit "courseName" and "sessionTitle" when the command names neither.

Examples:
- "go home" -> {"route": "/", "message": "Navigating to Home", "requiresId": false, "type": "success"}
- "show courses" -> {"route": "/courses", "message": "Navigating to Courses", "requiresId": false, "type": "success"}
- "course roadmap" -> {"route": "/courses", "message": "Please select a course first to view its roadmap", "requiresId": true, "type": "redirect"}
"#;

static PROMPT_ENV: Lazy<Environment<'static>> = Lazy::new(|| {
    let mut env = Environment::new();
    env.add_template("navigation_intent", CLASSIFIER_PROMPT_TEMPLATE)
        .expect("static classifier template is valid");
    env
});

/// Matches the first-to-last brace span, the same way the platform's web
/// tier located the JSON object in model output.
static JSON_OBJECT_RE: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"\{[\s\S]*\}").expect("static JSON pattern is valid"));

/// Builds the fixed instruction prompt for one command.
pub fn build_classifier_prompt(
    command: &str,
    catalog: &[CourseSummary],
) -> Result<String, AiyoError> {
    let routes: Vec<serde_json::Value> = ROUTE_TABLE
        .iter()
        .map(|(name, path)| serde_json::json!({ "name": name, "path": path }))
        .collect();

    PROMPT_ENV
        .get_template("navigation_intent")
        .and_then(|template| {
            template.render(context! {
                routes => routes,
                catalog => catalog,
                command => command,
            })
        })
        .map_err(|err| AiyoError::classifier(format!("prompt render failed: {err}")))
}

/// Locates and parses the NavigationIntent JSON in raw model output.
pub fn parse_intent_response(text: &str) -> Result<NavigationIntent, AiyoError> {
    let json = JSON_OBJECT_RE
        .find(text)
        .ok_or_else(|| AiyoError::classifier("no JSON object in classifier response"))?;

    let intent: NavigationIntent = serde_json::from_str(json.as_str())?;
    Ok(intent)
}

/// Intent classifier backed by a generative text completion agent.
pub struct GeminiIntentClassifier<A: TextCompletionAgent> {
    agent: A,
}

impl GeminiIntentClassifier<GeminiApiAgent> {
    /// Wires the classifier to the Gemini REST agent using secret.json or
    /// environment configuration.
    pub fn try_from_env() -> Result<Self, AgentError> {
        Ok(Self::new(GeminiApiAgent::try_from_env()?))
    }
}

impl<A: TextCompletionAgent> GeminiIntentClassifier<A> {
    /// Creates a classifier over the given agent.
    pub fn new(agent: A) -> Self {
        Self { agent }
    }
}

#[async_trait]
impl<A: TextCompletionAgent> IntentClassifier for GeminiIntentClassifier<A> {
    async fn classify(&self, command: &str, catalog: &[CourseSummary]) -> NavigationIntent {
        let prompt = match build_classifier_prompt(command, catalog) {
            Ok(prompt) => prompt,
            Err(err) => {
                tracing::error!(error = %err, "failed to build classifier prompt");
                return NavigationIntent::fallback(FALLBACK_MESSAGE);
            }
        };

        let text = match self.agent.execute(&prompt).await {
            Ok(text) => text,
            Err(err) => {
                tracing::warn!(error = %err, "classification call failed");
                return NavigationIntent::fallback(FALLBACK_MESSAGE);
            }
        };

        match parse_intent_response(&text) {
            Ok(intent) => intent,
            Err(err) => {
                tracing::warn!(error = %err, "classifier returned unparseable output");
                NavigationIntent::fallback(FALLBACK_MESSAGE)
            }
        }
    }
}
