use thiserror::Error;

/// Page slug that is not in the sidebar
#[derive(Debug, Error, PartialEq, Eq)]
#[error("Unknown page: {0}")]
pub struct UnknownPage(pub String);

/// Rejected user input, raised before any external call
#[derive(Debug, Error, PartialEq, Eq)]
pub enum InputError {
    #[error("Please enter {field} before continuing.")]
    Empty { field: &'static str },
}

/// Failure of a call to the external completion service.
///
/// Every variant carries enough text for the dashboard to show the user
/// what went wrong; `kind()` gives a stable machine-readable tag.
#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum CompletionError {
    #[error("Completion service is not configured (set ANTHROPIC_API_KEY)")]
    NotConfigured,

    #[error("HTTP request failed: {0}")]
    Transport(String),

    #[error("Completion API error ({status}): {message}")]
    Api { status: u16, message: String },

    #[error("Failed to parse response: {0}")]
    MalformedResponse(String),

    #[error("No text content in response")]
    EmptyResponse,
}

impl CompletionError {
    pub fn kind(&self) -> &'static str {
        match self {
            CompletionError::NotConfigured => "not-configured",
            CompletionError::Transport(_) => "transport",
            CompletionError::Api { .. } => "api",
            CompletionError::MalformedResponse(_) => "malformed-response",
            CompletionError::EmptyResponse => "empty-response",
        }
    }
}
