use item_sync_provider::ItemId;

/// User intent delivered to the controller
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum FormEvent {
    /// Submit the form with the current input text (untrimmed)
    Submit { draft: String },
    /// Edit affordance of a row
    EditRequested(ItemId),
    /// Delete affordance of a row; the user has not confirmed yet
    DeleteRequested(ItemId),
    /// Answer to the delete confirmation prompt
    DeleteAnswered { id: ItemId, confirmed: bool },
    /// Cancel affordance of the form
    CancelRequested,
    /// Manual reload of the list
    RefreshRequested,
}
