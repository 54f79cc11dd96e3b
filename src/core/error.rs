use thiserror::Error;

/// The primary error type for all fallible operations in this crate.
#[derive(Debug, Error)]
pub enum NewsError {
    /// An error occurred during an HTTP request (timeout, DNS, refused connection, ...).
    #[error("HTTP error: {0}")]
    Http(#[from] reqwest::Error),

    /// A provided URL could not be parsed.
    #[error("Invalid URL: {0}")]
    Url(#[from] url::ParseError),

    /// The response body was not the JSON shape the provider documents.
    #[error("JSON parsing error: {0}")]
    Json(#[from] serde_json::Error),

    /// The provider answered with a non-2xx status.
    ///
    /// `code` and `message` are lifted from the provider's JSON error body when it has one.
    #[error("Request failed with status code {status}: {message}")]
    Upstream {
        /// The HTTP status code.
        status: u16,
        /// Provider-specific error code (e.g. NewsAPI's `rateLimited`).
        code: Option<String>,
        /// Provider message, or the canonical reason phrase when the body had none.
        message: String,
        /// The URL that returned the error, with credentials redacted.
        url: String,
    },

    /// The configuration could not be assembled.
    #[error("Invalid configuration: {0}")]
    Config(String),

    /// A boundary request named a channel this crate does not serve.
    #[error("Unknown channel: {0}")]
    UnknownChannel(String),
}

impl NewsError {
    /// HTTP status associated with this error, if the server produced one.
    #[must_use]
    pub fn status(&self) -> Option<u16> {
        match self {
            Self::Upstream { status, .. } => Some(*status),
            Self::Http(e) => e.status().map(|s| s.as_u16()),
            _ => None,
        }
    }

    /// A short machine-readable code for the failure.
    ///
    /// Upstream errors report the provider's code; transport errors are classified.
    #[must_use]
    pub fn code(&self) -> Option<String> {
        match self {
            Self::Upstream { code, .. } => code.clone(),
            Self::Http(e) if e.is_timeout() => Some("ETIMEDOUT".into()),
            Self::Http(e) if e.is_connect() => Some("ECONNREFUSED".into()),
            Self::Http(e) if e.is_decode() => Some("EDECODE".into()),
            Self::Http(_) => Some("EHTTP".into()),
            Self::Json(_) => Some("EPARSE".into()),
            _ => None,
        }
    }

    /// The provider's own message for an upstream error.
    #[must_use]
    pub fn upstream_message(&self) -> Option<&str> {
        match self {
            Self::Upstream { message, .. } => Some(message),
            _ => None,
        }
    }
}
