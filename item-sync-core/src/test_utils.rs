//! Test helper module
//!
//! Provides mock implementations and convenient test factory methods.

use std::collections::HashMap;
use std::sync::Arc;

use async_trait::async_trait;
use item_sync_provider::{Item, ItemId, ItemPayload, ItemResource, ResourceError, Result};
use tokio::sync::RwLock;

use crate::error::RemoteOp;
use crate::services::ItemSyncController;
use crate::traits::{FormView, ListRenderer, Notifier};
use crate::types::{FormState, Notice};

// ===== MockItemResource =====

/// One call received by [`MockItemResource`]
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Call {
    List,
    Get(ItemId),
    Create(String),
    Update(ItemId, String),
    Delete(ItemId),
}

/// In-memory item collection that records every call
pub struct MockItemResource {
    items: RwLock<Vec<Item>>,
    next_id: RwLock<i64>,
    calls: RwLock<Vec<Call>>,
    /// Operations that fail with the stored error instead of running
    failures: RwLock<HashMap<RemoteOp, ResourceError>>,
}

impl MockItemResource {
    pub fn with_items(items: &[(i64, &str)]) -> Self {
        let next_id = items.iter().map(|(id, _)| *id).max().unwrap_or(0) + 1;
        Self {
            items: RwLock::new(items.iter().map(|(id, name)| Item::new(*id, *name)).collect()),
            next_id: RwLock::new(next_id),
            calls: RwLock::new(Vec::new()),
            failures: RwLock::new(HashMap::new()),
        }
    }

    pub async fn fail_on(&self, op: RemoteOp, err: ResourceError) {
        self.failures.write().await.insert(op, err);
    }

    pub async fn calls(&self) -> Vec<Call> {
        self.calls.read().await.clone()
    }

    pub async fn clear_calls(&self) {
        self.calls.write().await.clear();
    }

    pub async fn names(&self) -> Vec<String> {
        self.items
            .read()
            .await
            .iter()
            .map(|i| i.name.clone())
            .collect()
    }

    async fn record(&self, op: RemoteOp, call: Call) -> Result<()> {
        self.calls.write().await.push(call);
        match self.failures.read().await.get(&op) {
            Some(err) => Err(err.clone()),
            None => Ok(()),
        }
    }

    fn not_found(id: &ItemId) -> ResourceError {
        ResourceError::NotFound {
            item_id: id.to_string(),
            raw_message: None,
        }
    }
}

#[async_trait]
impl ItemResource for MockItemResource {
    async fn list_items(&self) -> Result<Vec<Item>> {
        self.record(RemoteOp::List, Call::List).await?;
        Ok(self.items.read().await.clone())
    }

    async fn get_item(&self, id: &ItemId) -> Result<Item> {
        self.record(RemoteOp::Get, Call::Get(id.clone())).await?;
        self.items
            .read()
            .await
            .iter()
            .find(|i| &i.id == id)
            .cloned()
            .ok_or_else(|| Self::not_found(id))
    }

    async fn create_item(&self, payload: &ItemPayload) -> Result<()> {
        self.record(RemoteOp::Create, Call::Create(payload.name.clone()))
            .await?;
        let mut next_id = self.next_id.write().await;
        self.items
            .write()
            .await
            .push(Item::new(*next_id, payload.name.clone()));
        *next_id += 1;
        Ok(())
    }

    async fn update_item(&self, id: &ItemId, payload: &ItemPayload) -> Result<()> {
        self.record(
            RemoteOp::Update,
            Call::Update(id.clone(), payload.name.clone()),
        )
        .await?;
        let mut items = self.items.write().await;
        let item = items
            .iter_mut()
            .find(|i| &i.id == id)
            .ok_or_else(|| Self::not_found(id))?;
        item.name.clone_from(&payload.name);
        Ok(())
    }

    async fn delete_item(&self, id: &ItemId) -> Result<()> {
        self.record(RemoteOp::Delete, Call::Delete(id.clone()))
            .await?;
        let mut items = self.items.write().await;
        let before = items.len();
        items.retain(|i| &i.id != id);
        if items.len() == before {
            return Err(Self::not_found(id));
        }
        Ok(())
    }
}

// ===== RecordingSurface =====

/// Surface that keeps everything the controller pushed to it
#[derive(Debug, Default)]
pub struct RecordingSurface {
    pub renders: Vec<Vec<Item>>,
    pub forms: Vec<FormState>,
    pub notices: Vec<Notice>,
    pub focus_requests: usize,
}

impl RecordingSurface {
    /// Names in the most recent render
    pub fn names(&self) -> Vec<String> {
        self.renders
            .last()
            .map(|items| items.iter().map(|i| i.name.clone()).collect())
            .unwrap_or_default()
    }
}

impl ListRenderer for RecordingSurface {
    fn render(&mut self, items: &[Item]) {
        self.renders.push(items.to_vec());
    }
}

impl FormView for RecordingSurface {
    fn show_form(&mut self, form: &FormState) {
        self.forms.push(form.clone());
    }

    fn focus_name_input(&mut self) {
        self.focus_requests += 1;
    }
}

impl Notifier for RecordingSurface {
    fn notify(&mut self, notice: &Notice) {
        self.notices.push(notice.clone());
    }
}

// ===== Factory methods =====

/// Create a controller backed by a [`MockItemResource`] seeded with `items`
pub fn create_test_controller(
    items: &[(i64, &str)],
) -> (ItemSyncController, Arc<MockItemResource>) {
    let resource = Arc::new(MockItemResource::with_items(items));
    let ctrl = ItemSyncController::new(resource.clone());
    (ctrl, resource)
}
