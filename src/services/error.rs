use thiserror::Error;

/// Failures at the HTTP boundary
#[derive(Debug, Clone, PartialEq, Error)]
pub enum ApiError {
    #[error("Request build error: {0}")]
    Build(String),

    #[error("Network error: {0}")]
    Network(String),

    #[error("Resource not found")]
    NotFound,

    #[error("HTTP {status}: {message}")]
    Http { status: u16, message: String },

    #[error("Parse error: {0}")]
    Parse(String),

    #[error("Browser API error: {0}")]
    Browser(String),

    /// The call succeeded but the backend reported `false`
    #[error("Backend rejected the request")]
    Rejected,
}

impl ApiError {
    pub fn is_unauthorized(&self) -> bool {
        matches!(self, ApiError::Http { status: 401 | 403, .. })
    }
}
