//! Eda - the lesson chat assistant.
//!
//! Answers student questions in the context of the lesson they are
//! watching. This is a thin prompt wrapper over the text completion
//! agent; the response text is returned verbatim (trimmed).

use minijinja::{context, Environment};
use once_cell::sync::Lazy;

use crate::agent::{AgentError, TextCompletionAgent};
use crate::gemini_api_agent::GeminiApiAgent;

const CHAT_PROMPT_TEMPLATE: &str = r#"You are Eda (Empowered Digital Assistant), a helpful AI assistant for an educational platform.
You are currently helping a student with a lesson about "{{ session_title }}".
{% if video_src -%}
The lesson includes a video: {{ video_src }}
{% endif %}
Student's question: {{ message }}

Please provide a helpful, educational response. Keep it concise but informative. If the question is about the lesson topic or video, provide relevant explanations. If it's a general question, still be helpful but try to relate it back to learning when possible."#;

static PROMPT_ENV: Lazy<Environment<'static>> = Lazy::new(|| {
    let mut env = Environment::new();
    env.add_template("lesson_chat", CHAT_PROMPT_TEMPLATE)
        .expect("static chat template is valid");
    env
});

/// The lesson the student is currently in, if any.
#[derive(Debug, Clone, Default)]
pub struct LessonContext {
    pub session_title: Option<String>,
    pub video_src: Option<String>,
}

/// Builds the tutoring prompt for one student question.
pub fn build_chat_prompt(message: &str, lesson: &LessonContext) -> Result<String, AgentError> {
    let session_title = lesson
        .session_title
        .as_deref()
        .unwrap_or("the current topic");

    PROMPT_ENV
        .get_template("lesson_chat")
        .and_then(|template| {
            template.render(context! {
                session_title => session_title,
                video_src => lesson.video_src.as_deref(),
                message => message,
            })
        })
        .map_err(|err| AgentError::ExecutionFailed(format!("prompt render failed: {err}")))
}

/// Lesson chat assistant backed by a generative text completion agent.
pub struct ChatAssistant<A: TextCompletionAgent> {
    agent: A,
}

impl ChatAssistant<GeminiApiAgent> {
    /// Wires the assistant to the Gemini REST agent using secret.json or
    /// environment configuration.
    pub fn try_from_env() -> Result<Self, AgentError> {
        Ok(Self::new(GeminiApiAgent::try_from_env()?))
    }
}

impl<A: TextCompletionAgent> ChatAssistant<A> {
    /// Creates an assistant over the given agent.
    pub fn new(agent: A) -> Self {
        Self { agent }
    }

    /// Answers a student question in the given lesson context.
    ///
    /// An empty question is rejected before any network call is made.
    pub async fn respond(
        &self,
        message: &str,
        lesson: &LessonContext,
    ) -> Result<String, AgentError> {
        if message.trim().is_empty() {
            return Err(AgentError::ExecutionFailed("Message is required".into()));
        }

        let prompt = build_chat_prompt(message, lesson)?;

        tracing::debug!(
            session_title = lesson.session_title.as_deref().unwrap_or("-"),
            "sending lesson chat question"
        );

        let response = self.agent.execute(&prompt).await?;
        Ok(response.trim().to_string())
    }
}
