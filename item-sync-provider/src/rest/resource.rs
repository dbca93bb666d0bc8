//! REST `ItemResource` implementation

use async_trait::async_trait;
use reqwest::Method;

use crate::error::Result;
use crate::traits::{ErrorContext, ItemResource};
use crate::types::{Item, ItemId, ItemPayload};
use crate::utils::log_sanitizer::sanitize_for_log;

use super::RestItemResource;

#[async_trait]
impl ItemResource for RestItemResource {
    async fn list_items(&self) -> Result<Vec<Item>> {
        let items: Vec<Item> = self
            .get_json(&self.base_url, ErrorContext::default())
            .await?;
        log::debug!("Listed {} item(s)", items.len());
        Ok(items)
    }

    async fn get_item(&self, id: &ItemId) -> Result<Item> {
        self.get_json(&self.item_url(id), ErrorContext::for_item(id))
            .await
    }

    async fn create_item(&self, payload: &ItemPayload) -> Result<()> {
        log::info!("Creating item '{}'", sanitize_for_log(&payload.name));
        self.send_json(Method::POST, &self.base_url, payload, ErrorContext::default())
            .await
    }

    async fn update_item(&self, id: &ItemId, payload: &ItemPayload) -> Result<()> {
        log::info!(
            "Updating item {id} to '{}'",
            sanitize_for_log(&payload.name)
        );
        self.send_json(
            Method::PUT,
            &self.item_url(id),
            payload,
            ErrorContext::for_item(id),
        )
        .await
    }

    async fn delete_item(&self, id: &ItemId) -> Result<()> {
        log::info!("Deleting item {id}");
        self.delete(&self.item_url(id), ErrorContext::for_item(id))
            .await
    }
}
