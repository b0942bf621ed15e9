//! Interaction layer for the Aiyo navigation core.
//!
//! Hosts the Gemini REST agent, the navigation intent classifier, and the
//! lesson chat assistant, plus secret/config loading for API keys.

pub mod agent;
pub mod chat_assistant;
pub mod classifier;
pub mod config;
pub mod gemini_api_agent;

pub use agent::{AgentError, TextCompletionAgent};
pub use chat_assistant::{ChatAssistant, LessonContext};
pub use classifier::GeminiIntentClassifier;
pub use gemini_api_agent::GeminiApiAgent;
