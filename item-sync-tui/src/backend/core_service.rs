//! Core service
//!
//! Wires the REST resource and the item sync controller from the app config.

use std::sync::Arc;

use anyhow::{Context, Result};
use item_sync_core::ItemSyncController;
use item_sync_provider::RestItemResource;

use super::config_service::AppConfig;

/// Build the controller for the configured item collection
pub fn create_controller(config: &AppConfig) -> Result<ItemSyncController> {
    let resource = RestItemResource::with_options(&config.base_url, &config.client_options())
        .with_context(|| format!("Cannot use base URL '{}'", config.base_url))?;
    log::info!("Item collection at {}", resource.base_url());
    Ok(ItemSyncController::new(Arc::new(resource)))
}
