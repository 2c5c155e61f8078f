/// Failures from a single completion request.
///
/// Callers branch on the failure kind; the rendered `Display` message
/// carries the description shown to users in place of a result.
#[derive(Debug, thiserror::Error)]
pub enum CompletionError {
    #[error("failed to reach completion endpoint: {0}")]
    Network(reqwest::Error),
    #[error("authentication with completion endpoint failed (status {status}): {body}")]
    Auth { status: u16, body: String },
    #[error("completion request failed with status {status}: {body}")]
    Upstream { status: u16, body: String },
    #[error("malformed completion response: {0}")]
    MalformedResponse(String),
}

impl CompletionError {
    /// Stable machine-readable tag for the failure kind, used by the REST
    /// surface so clients can branch without parsing the message.
    pub fn kind(&self) -> &'static str {
        match self {
            CompletionError::Network(_) => "network",
            CompletionError::Auth { .. } => "auth",
            CompletionError::Upstream { .. } => "upstream",
            CompletionError::MalformedResponse(_) => "malformed_response",
        }
    }
}

/// Failures from an analysis run as a whole.
#[derive(Debug, thiserror::Error)]
pub enum AnalyzeError {
    /// All three input fields were empty; no upstream call was made.
    #[error("Please enter text in at least one of the input fields to analyze.")]
    NoInput,
}

/// Failures when parsing a user-supplied model identifier.
#[derive(Debug, thiserror::Error)]
pub enum ModelParseError {
    #[error("unknown model identifier: {0}")]
    Unknown(String),
}
