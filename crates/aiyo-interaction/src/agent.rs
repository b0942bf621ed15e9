//! Text completion agent seam.
//!
//! Every generative-AI feature in the platform goes through this trait so
//! services can be exercised against stub agents in tests.

use std::time::Duration;

use async_trait::async_trait;
use thiserror::Error;

/// Errors from an external text completion call.
#[derive(Error, Debug, Clone)]
pub enum AgentError {
    /// The agent could not run the request at all (bad input, missing
    /// configuration, unusable response body).
    #[error("Agent execution failed: {0}")]
    ExecutionFailed(String),

    /// The remote service answered with a failure.
    #[error("Agent process error (status {status_code:?}): {message}")]
    ProcessError {
        status_code: Option<u16>,
        message: String,
        is_retryable: bool,
        retry_after: Option<Duration>,
    },

    /// Anything else.
    #[error("{0}")]
    Other(String),
}

impl AgentError {
    /// Creates a ProcessError carrying a server-provided retry delay.
    pub fn process_error_with_retry_after(
        status_code: u16,
        message: impl Into<String>,
        is_retryable: bool,
        retry_after: Duration,
    ) -> Self {
        Self::ProcessError {
            status_code: Some(status_code),
            message: message.into(),
            is_retryable,
            retry_after: Some(retry_after),
        }
    }

    /// Whether retrying the call could plausibly succeed.
    pub fn is_retryable(&self) -> bool {
        matches!(
            self,
            Self::ProcessError {
                is_retryable: true,
                ..
            }
        )
    }
}

/// A black-box generative text completion service.
///
/// Implementations are treated as untrusted and possibly nondeterministic;
/// callers must validate whatever text comes back.
#[async_trait]
pub trait TextCompletionAgent: Send + Sync {
    /// Sends a prompt and returns the raw response text.
    async fn execute(&self, prompt: &str) -> Result<String, AgentError>;
}
