//! REST request helpers

use reqwest::Method;
use reqwest::header::CONTENT_TYPE;
use serde::Serialize;
use serde::de::DeserializeOwned;

use crate::error::{ResourceError, Result};
use crate::http_client::{HttpUtils, is_success};
use crate::traits::{ErrorContext, RawHttpError, ResourceErrorMapper};

use super::RestItemResource;

impl RestItemResource {
    /// GET and decode a JSON body
    pub(crate) async fn get_json<T: DeserializeOwned>(
        &self,
        url: &str,
        context: ErrorContext,
    ) -> Result<T> {
        let request = self.client.get(url);
        let (status, body) =
            HttpUtils::execute_request(request, self.resource_name(), "GET", url).await?;

        if !is_success(status) {
            return Err(self.fail(status, body, context));
        }

        HttpUtils::parse_json(&body, self.resource_name())
    }

    /// Send a JSON body with `method`; the response body is ignored
    pub(crate) async fn send_json<B: Serialize>(
        &self,
        method: Method,
        url: &str,
        body: &B,
        context: ErrorContext,
    ) -> Result<()> {
        let body_json = HttpUtils::to_json_body(body, self.resource_name())?;
        let method_name = method.as_str().to_string();

        let request = self
            .client
            .request(method, url)
            .header(CONTENT_TYPE, "application/json")
            .body(body_json);

        let (status, response_body) =
            HttpUtils::execute_request(request, self.resource_name(), &method_name, url).await?;

        if !is_success(status) {
            return Err(self.fail(status, response_body, context));
        }
        Ok(())
    }

    /// DELETE; the response body is ignored
    pub(crate) async fn delete(&self, url: &str, context: ErrorContext) -> Result<()> {
        let request = self.client.delete(url);
        let (status, body) =
            HttpUtils::execute_request(request, self.resource_name(), "DELETE", url).await?;

        if !is_success(status) {
            return Err(self.fail(status, body, context));
        }
        Ok(())
    }

    fn fail(&self, status: u16, body: String, context: ErrorContext) -> ResourceError {
        let err = self.map_error(RawHttpError::new(status, body), context);
        if err.is_expected() {
            log::warn!("[{}] {err}", self.resource_name());
        } else {
            log::error!("[{}] {err}", self.resource_name());
        }
        err
    }
}
