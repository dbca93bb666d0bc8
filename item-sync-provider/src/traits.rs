use async_trait::async_trait;

use crate::error::{ResourceError, Result};
use crate::types::{Item, ItemId, ItemPayload};

/// Raw HTTP failure (internal use)
#[derive(Debug, Clone)]
pub(crate) struct RawHttpError {
    /// HTTP status code
    pub status: u16,
    /// Response body, possibly empty
    pub body: String,
}

impl RawHttpError {
    pub fn new(status: u16, body: impl Into<String>) -> Self {
        Self {
            status,
            body: body.into(),
        }
    }
}

/// Extra information used while mapping errors (internal use)
#[derive(Debug, Clone, Default)]
pub(crate) struct ErrorContext {
    /// Item id, for single-item endpoints
    pub item_id: Option<ItemId>,
}

impl ErrorContext {
    pub fn for_item(id: &ItemId) -> Self {
        Self {
            item_id: Some(id.clone()),
        }
    }
}

/// Error mapping trait (internal use)
///
/// Turns a raw non-success response into the unified error type.
pub(crate) trait ResourceErrorMapper {
    /// Label used in log lines
    fn resource_name(&self) -> &'static str;

    /// Map a raw HTTP failure to the unified error type
    fn map_error(&self, raw: RawHttpError, context: ErrorContext) -> ResourceError;
}

/// Remote item collection
///
/// Every operation is a single HTTP round trip; there is no caching and no
/// automatic retry. Any transport failure or non-success status is returned as
/// a [`ResourceError`].
#[async_trait]
pub trait ItemResource: Send + Sync {
    /// Fetch the whole collection, in server order
    async fn list_items(&self) -> Result<Vec<Item>>;

    /// Fetch a single item
    async fn get_item(&self, id: &ItemId) -> Result<Item>;

    /// Create an item; the server assigns the id
    async fn create_item(&self, payload: &ItemPayload) -> Result<()>;

    /// Replace the name of an existing item
    async fn update_item(&self, id: &ItemId, payload: &ItemPayload) -> Result<()>;

    /// Delete an item
    async fn delete_item(&self, id: &ItemId) -> Result<()>;
}
