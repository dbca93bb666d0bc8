//! REST item resource
//!
//! Talks to a JSON collection endpoint laid out as:
//!
//! | Operation | Request |
//! |-----------|---------|
//! | list      | `GET {base}` |
//! | get       | `GET {base}/{id}` |
//! | create    | `POST {base}` with `{"name": ...}` |
//! | update    | `PUT {base}/{id}` with `{"name": ...}` |
//! | delete    | `DELETE {base}/{id}` |

mod error;
mod http;
mod resource;

use std::time::Duration;

use reqwest::{Client, Url};

use crate::error::{ResourceError, Result};
use crate::types::ItemId;

/// Default collection address
pub const DEFAULT_BASE_URL: &str = "http://localhost:3000/items";

/// Default connect timeout (seconds)
const DEFAULT_CONNECT_TIMEOUT_SECS: u64 = 10;

/// HTTP client options
#[derive(Debug, Clone)]
pub struct ClientOptions {
    /// Limit on establishing the TCP/TLS connection
    pub connect_timeout: Duration,
    /// Limit on the whole request; `None` waits indefinitely
    pub request_timeout: Option<Duration>,
}

impl Default for ClientOptions {
    fn default() -> Self {
        Self {
            connect_timeout: Duration::from_secs(DEFAULT_CONNECT_TIMEOUT_SECS),
            request_timeout: None,
        }
    }
}

/// Create an HTTP client with the given timeouts
fn create_http_client(options: &ClientOptions) -> Result<Client> {
    let mut builder = Client::builder().connect_timeout(options.connect_timeout);
    if let Some(timeout) = options.request_timeout {
        builder = builder.timeout(timeout);
    }
    builder.build().map_err(|e| ResourceError::NetworkError {
        detail: format!("Failed to create HTTP client: {e}"),
    })
}

/// Remote item collection reached over HTTP
pub struct RestItemResource {
    pub(crate) client: Client,
    /// Collection URL without trailing slash
    pub(crate) base_url: String,
}

impl RestItemResource {
    /// Create a client for the collection at `base_url` with default options
    pub fn new(base_url: &str) -> Result<Self> {
        Self::with_options(base_url, &ClientOptions::default())
    }

    /// Create a client for the collection at `base_url`
    pub fn with_options(base_url: &str, options: &ClientOptions) -> Result<Self> {
        let base_url = normalize_base_url(base_url)?;
        Ok(Self {
            client: create_http_client(options)?,
            base_url,
        })
    }

    /// Collection URL
    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    /// URL of a single item
    pub(crate) fn item_url(&self, id: &ItemId) -> String {
        format!("{}/{}", self.base_url, id.to_path_segment())
    }
}

/// Validate the base address and strip trailing slashes
fn normalize_base_url(raw: &str) -> Result<String> {
    let trimmed = raw.trim().trim_end_matches('/');
    let url = Url::parse(trimmed).map_err(|e| ResourceError::InvalidBaseUrl {
        url: raw.to_string(),
        detail: e.to_string(),
    })?;

    if !matches!(url.scheme(), "http" | "https") {
        return Err(ResourceError::InvalidBaseUrl {
            url: raw.to_string(),
            detail: format!("unsupported scheme '{}'", url.scheme()),
        });
    }
    if url.query().is_some() || url.fragment().is_some() {
        return Err(ResourceError::InvalidBaseUrl {
            url: raw.to_string(),
            detail: "query and fragment are not allowed".to_string(),
        });
    }

    Ok(trimmed.to_string())
}
