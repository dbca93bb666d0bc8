//! Unified error type definition

use serde::Serialize;
use thiserror::Error;

// Re-export library error type
pub use item_sync_provider::ResourceError;

/// Remote operation that failed
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum RemoteOp {
    List,
    Get,
    Create,
    Update,
    Delete,
}

impl RemoteOp {
    /// Lowercase name, as used in notices and log lines
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::List => "list",
            Self::Get => "get",
            Self::Create => "create",
            Self::Update => "update",
            Self::Delete => "delete",
        }
    }
}

impl std::fmt::Display for RemoteOp {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Core layer error type
#[derive(Error, Debug, Serialize)]
#[serde(tag = "code", content = "details")]
pub enum CoreError {
    /// Rejected input, detected before any network call
    #[error("Validation error: {0}")]
    Validation(String),

    /// A call to the remote item resource failed
    #[error("Failed to {op} item(s): {source}")]
    RemoteOperation {
        op: RemoteOp,
        source: ResourceError,
    },
}

impl CoreError {
    /// Whether it is expected behavior (user input, missing item), used for log classification.
    ///
    /// Level `warn` should be used when returning `true` and level `error` when returning `false`.
    /// **Please update this method when new variants are added.**
    #[must_use]
    pub fn is_expected(&self) -> bool {
        match self {
            Self::Validation(_) => true,
            Self::RemoteOperation { source, .. } => source.is_expected(),
        }
    }
}

/// Core layer Result type alias
pub type CoreResult<T> = std::result::Result<T, CoreError>;
