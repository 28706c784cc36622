use serde::{Deserialize, Serialize};

/// How the dashboard should present a notice
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "lowercase")]
pub enum Severity {
    Success,
    Warning,
    Error,
}

/// Status message returned alongside (or instead of) a page result
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct Notice {
    pub severity: Severity,
    pub kind: String,
    pub message: String,
}

impl Notice {
    pub fn new(severity: Severity, kind: &str, message: &str) -> Self {
        Self {
            severity,
            kind: kind.to_string(),
            message: message.to_string(),
        }
    }

    pub fn success(message: &str) -> Self {
        Self::new(Severity::Success, "ok", message)
    }

    /// Local rejection, nothing was sent upstream
    pub fn warning(message: &str) -> Self {
        Self::new(Severity::Warning, "invalid-input", message)
    }

    pub fn error(kind: &str, message: &str) -> Self {
        Self::new(Severity::Error, kind, message)
    }
}
