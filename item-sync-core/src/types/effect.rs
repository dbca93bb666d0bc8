use item_sync_provider::ItemId;

/// What the controller does in response to a [`crate::FormEvent`]
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Effect {
    /// `POST` a new item, then reload and reset the form
    CreateItem { name: String },
    /// `PUT` the new name, then reload and reset the form
    UpdateItem { id: ItemId, name: String },
    /// Fetch the item and load it into the form
    StartEdit(ItemId),
    /// The front-end must ask the user before anything is deleted
    ConfirmDelete(ItemId),
    /// `DELETE` the item, then reload
    DeleteItem(ItemId),
    /// Back to create mode, no network call
    CancelEdit,
    /// Fetch the list and render it
    Reload,
    /// Nothing to do (declined confirmation)
    Noop,
}

impl Effect {
    /// Whether applying this effect talks to the remote resource
    #[must_use]
    pub fn is_remote(&self) -> bool {
        matches!(
            self,
            Self::CreateItem { .. }
                | Self::UpdateItem { .. }
                | Self::StartEdit(_)
                | Self::DeleteItem(_)
                | Self::Reload
        )
    }
}
