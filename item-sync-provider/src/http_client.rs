//! Generic HTTP client tools
//!
//! Shared request processing for the item resource client: sending the
//! request, logging, classifying transport failures and reading the body.
//!
//! # design principles
//! - **One round trip per call** - no retries; a failed call is reported as-is
//! - **Status is returned, not judged** - callers decide which statuses are success
//! - **Flexible response parsing** - `parse_json` is a helper, not a requirement

use reqwest::RequestBuilder;
use serde::de::DeserializeOwned;

use crate::error::ResourceError;
use crate::utils::log_sanitizer::truncate_for_log;

/// HTTP tool function set
pub struct HttpUtils;

impl HttpUtils {
    /// Performs an HTTP request and returns status code and response text
    ///
    /// # Arguments
    /// * `request_builder` - configured request (URL, headers, body)
    /// * `resource_name` - label for log lines
    /// * `method_name` - HTTP method, for log lines
    /// * `url` - request URL, for log lines
    ///
    /// # Returns
    /// * `Ok((status_code, response_text))` - the server answered (any status)
    /// * `Err(ResourceError::Timeout)` - a configured timeout elapsed
    /// * `Err(ResourceError::NetworkError)` - the request could not be completed
    pub async fn execute_request(
        request_builder: RequestBuilder,
        resource_name: &str,
        method_name: &str,
        url: &str,
    ) -> Result<(u16, String), ResourceError> {
        log::debug!("[{resource_name}] {method_name} {url}");

        let response = request_builder.send().await.map_err(|e| {
            if e.is_timeout() {
                ResourceError::Timeout {
                    detail: e.to_string(),
                }
            } else {
                ResourceError::NetworkError {
                    detail: e.to_string(),
                }
            }
        })?;

        let status_code = response.status().as_u16();
        log::debug!("[{resource_name}] Response Status: {status_code}");

        let response_text = response
            .text()
            .await
            .map_err(|e| ResourceError::NetworkError {
                detail: format!("Failed to read response body: {e}"),
            })?;

        log::debug!(
            "[{resource_name}] Response Body: {}",
            truncate_for_log(&response_text)
        );

        Ok((status_code, response_text))
    }

    /// Parse JSON response
    ///
    /// # Returns
    /// * `Ok(T)` - successfully parsed
    /// * `Err(ResourceError::ParseError)` - parsing failed
    pub fn parse_json<T>(response_text: &str, resource_name: &str) -> Result<T, ResourceError>
    where
        T: DeserializeOwned,
    {
        serde_json::from_str(response_text).map_err(|e| {
            log::error!("[{resource_name}] JSON parse failed: {e}");
            log::error!(
                "[{resource_name}] Raw response: {}",
                truncate_for_log(response_text)
            );
            ResourceError::ParseError {
                detail: e.to_string(),
            }
        })
    }

    /// Serialize a request body, for logging and for sending
    pub fn to_json_body<B>(body: &B, resource_name: &str) -> Result<String, ResourceError>
    where
        B: serde::Serialize,
    {
        serde_json::to_string(body).map_err(|e| {
            log::error!("[{resource_name}] Request body serialization failed: {e}");
            ResourceError::SerializationError {
                detail: e.to_string(),
            }
        })
    }
}

/// Whether a status code counts as success (any 2xx)
pub fn is_success(status: u16) -> bool {
    (200..300).contains(&status)
}
