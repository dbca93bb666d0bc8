use item_sync_provider::ItemId;

/// Which action the form's submit affordance performs
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SubmitAction {
    /// "Add item"
    Add,
    /// "Update item"
    Update,
}

/// Form mode, derived from [`FormState::editing_id`]
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FormMode<'a> {
    Creating,
    Editing(&'a ItemId),
}

/// State of the single create/edit form
///
/// Owned by the controller for the whole session. Only the controller moves
/// it between modes; front-ends read it through [`crate::FormView`].
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct FormState {
    editing_id: Option<ItemId>,
    draft_name: String,
}

impl FormState {
    /// Fresh form in create mode with an empty draft
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    #[must_use]
    pub fn mode(&self) -> FormMode<'_> {
        match &self.editing_id {
            Some(id) => FormMode::Editing(id),
            None => FormMode::Creating,
        }
    }

    #[must_use]
    pub fn is_editing(&self) -> bool {
        self.editing_id.is_some()
    }

    /// Id of the item being edited, if any
    #[must_use]
    pub fn editing_id(&self) -> Option<&ItemId> {
        self.editing_id.as_ref()
    }

    /// Name last pushed to the form (item name on edit start, empty after reset)
    #[must_use]
    pub fn draft_name(&self) -> &str {
        &self.draft_name
    }

    #[must_use]
    pub fn submit_action(&self) -> SubmitAction {
        if self.is_editing() {
            SubmitAction::Update
        } else {
            SubmitAction::Add
        }
    }

    /// The cancel affordance is only shown while editing
    #[must_use]
    pub fn cancel_visible(&self) -> bool {
        self.is_editing()
    }

    pub(crate) fn start_editing(&mut self, id: ItemId, name: String) {
        self.editing_id = Some(id);
        self.draft_name = name;
    }

    pub(crate) fn reset(&mut self) {
        self.editing_id = None;
        self.draft_name.clear();
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn new_form_is_creating() {
        let form = FormState::new();
        assert_eq!(form.mode(), FormMode::Creating);
        assert_eq!(form.draft_name(), "");
        assert_eq!(form.submit_action(), SubmitAction::Add);
        assert!(!form.cancel_visible());
    }

    #[test]
    fn editing_switches_affordances() {
        let mut form = FormState::new();
        form.start_editing(ItemId::from(1), "Milk".into());

        assert_eq!(form.mode(), FormMode::Editing(&ItemId::from(1)));
        assert_eq!(form.draft_name(), "Milk");
        assert_eq!(form.submit_action(), SubmitAction::Update);
        assert!(form.cancel_visible());

        form.reset();
        assert_eq!(form, FormState::new());
    }

    #[test]
    fn editing_another_item_replaces_target() {
        let mut form = FormState::new();
        form.start_editing(ItemId::from(1), "Milk".into());
        form.start_editing(ItemId::from(2), "Eggs".into());

        assert_eq!(form.editing_id(), Some(&ItemId::from(2)));
        assert_eq!(form.draft_name(), "Eggs");
    }
}
