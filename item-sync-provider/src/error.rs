use serde::{Deserialize, Serialize};

/// Unified error type for all remote item resource operations.
///
/// Transport failures and non-success HTTP statuses both end up here. The
/// variants keep enough context for logging and for a front-end to tell the
/// user what went wrong, but callers are free to treat every variant as
/// "the remote call failed".
///
/// All variants are serializable for structured error reporting.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
#[serde(tag = "code")]
pub enum ResourceError {
    /// A network-level error occurred (DNS resolution failure, connection refused, etc.).
    NetworkError {
        /// Error details.
        detail: String,
    },

    /// The HTTP request timed out.
    ///
    /// Only produced when a request timeout is configured; by default requests
    /// wait indefinitely.
    Timeout {
        /// Error details.
        detail: String,
    },

    /// The requested item does not exist (HTTP 404 on a single-item endpoint).
    NotFound {
        /// ID of the item that was not found.
        item_id: String,
        /// Response body, if any.
        raw_message: Option<String>,
    },

    /// The server answered with a non-success status.
    HttpStatus {
        /// HTTP status code.
        status: u16,
        /// Response body, if any.
        raw_message: Option<String>,
    },

    /// Failed to parse the response body.
    ParseError {
        /// Details about the parse failure.
        detail: String,
    },

    /// Failed to serialize a request body.
    SerializationError {
        /// Details about the serialization failure.
        detail: String,
    },

    /// The configured base address is not a usable HTTP(S) URL.
    InvalidBaseUrl {
        /// The rejected address.
        url: String,
        /// Why it was rejected.
        detail: String,
    },
}

impl ResourceError {
    /// Whether the error is an expected condition (missing item, rejected input),
    /// used to pick the log level.
    ///
    /// Returns `true` when `warn` is appropriate, `false` for `error`.
    /// **Update this when adding variants.**
    #[must_use]
    pub fn is_expected(&self) -> bool {
        match self {
            Self::NotFound { .. } => true,
            Self::HttpStatus { status, .. } => (400..500).contains(status),
            _ => false,
        }
    }

    /// HTTP status code carried by the error, if the server answered at all.
    #[must_use]
    pub fn status(&self) -> Option<u16> {
        match self {
            Self::NotFound { .. } => Some(404),
            Self::HttpStatus { status, .. } => Some(*status),
            _ => None,
        }
    }
}

impl std::fmt::Display for ResourceError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::NetworkError { detail } => write!(f, "Network error: {detail}"),
            Self::Timeout { detail } => write!(f, "Request timeout: {detail}"),
            Self::NotFound { item_id, .. } => write!(f, "Item '{item_id}' not found"),
            Self::HttpStatus {
                status,
                raw_message,
            } => match raw_message.as_deref() {
                Some(msg) if !msg.is_empty() => write!(f, "HTTP {status}: {msg}"),
                _ => write!(f, "HTTP {status}"),
            },
            Self::ParseError { detail } => write!(f, "Parse error: {detail}"),
            Self::SerializationError { detail } => {
                write!(f, "Serialization error: {detail}")
            }
            Self::InvalidBaseUrl { url, detail } => {
                write!(f, "Invalid base URL '{url}': {detail}")
            }
        }
    }
}

impl std::error::Error for ResourceError {}

/// Convenience type alias for `Result<T, ResourceError>`.
pub type Result<T> = std::result::Result<T, ResourceError>;
