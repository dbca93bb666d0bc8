//! Event to effect dispatch
//!
//! Pure decision step: looks at the form and the event, never at the network.

use crate::error::{CoreError, CoreResult};
use crate::types::{Effect, FormEvent, FormMode, FormState};

/// Decide what a user event means in the current form state.
///
/// A blank (empty or whitespace-only) submit is rejected here, before any
/// request is made. Names are trimmed.
pub fn dispatch(form: &FormState, event: FormEvent) -> CoreResult<Effect> {
    let effect = match event {
        FormEvent::Submit { draft } => {
            let name = draft.trim();
            if name.is_empty() {
                return Err(CoreError::Validation("item name is empty".to_string()));
            }
            match form.mode() {
                FormMode::Creating => Effect::CreateItem {
                    name: name.to_string(),
                },
                FormMode::Editing(id) => Effect::UpdateItem {
                    id: id.clone(),
                    name: name.to_string(),
                },
            }
        }
        FormEvent::EditRequested(id) => Effect::StartEdit(id),
        FormEvent::DeleteRequested(id) => Effect::ConfirmDelete(id),
        FormEvent::DeleteAnswered { id, confirmed } => {
            if confirmed {
                Effect::DeleteItem(id)
            } else {
                Effect::Noop
            }
        }
        FormEvent::CancelRequested => Effect::CancelEdit,
        FormEvent::RefreshRequested => Effect::Reload,
    };
    Ok(effect)
}
