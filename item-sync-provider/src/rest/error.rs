//! REST error mapping

use crate::error::ResourceError;
use crate::traits::{ErrorContext, RawHttpError, ResourceErrorMapper};

use super::RestItemResource;

impl ResourceErrorMapper for RestItemResource {
    fn resource_name(&self) -> &'static str {
        "items"
    }

    fn map_error(&self, raw: RawHttpError, context: ErrorContext) -> ResourceError {
        let raw_message = (!raw.body.trim().is_empty()).then_some(raw.body);

        match (raw.status, context.item_id) {
            // 404 on a single-item endpoint: the item is gone
            (404, Some(id)) => ResourceError::NotFound {
                item_id: id.to_string(),
                raw_message,
            },
            (status, _) => ResourceError::HttpStatus {
                status,
                raw_message,
            },
        }
    }
}
