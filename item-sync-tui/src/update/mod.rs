//! Update layer: applies messages to the model
//!
//! The only place that changes `App`. Messages that need the server go through
//! the item sync controller, which writes back through [`TuiSurface`]; each
//! such call is awaited to completion before the next key is read.

mod form;
mod list;
mod modal;

use item_sync_core::{CoreError, Effect, FormEvent, ItemSyncController};

use crate::backend::TuiSurface;
use crate::message::AppMessage;
use crate::model::App;

/// Apply one message
pub async fn update(app: &mut App, ctrl: &mut ItemSyncController, msg: AppMessage) {
    match msg {
        AppMessage::Quit => {
            app.should_quit = true;
        }

        AppMessage::ToggleFocus => {
            if !app.modal.is_open() {
                app.focus = app.focus.toggle();
            }
        }

        AppMessage::Form(form_msg) => {
            form::update(app, ctrl, form_msg).await;
        }

        AppMessage::List(list_msg) => {
            list::update(app, ctrl, list_msg).await;
        }

        AppMessage::Modal(modal_msg) => {
            modal::update(app, ctrl, modal_msg).await;
        }

        AppMessage::Refresh => {
            app.clear_status();
            send(app, ctrl, FormEvent::RefreshRequested).await;
        }

        AppMessage::ShowHelp => {
            app.modal.show_help();
        }

        AppMessage::ClearStatus => {
            app.clear_status();
        }

        AppMessage::Noop => {}
    }
}

/// Hand one event to the controller
///
/// Returns the applied effect, or `None` when the controller rejected or
/// failed it (the user has already been notified through the surface).
async fn send(app: &mut App, ctrl: &mut ItemSyncController, event: FormEvent) -> Option<Effect> {
    let result = ctrl.handle(event, &mut TuiSurface::new(app)).await;
    match result {
        Ok(effect) => {
            if effect.is_remote() {
                app.discard_pending_input = true;
            }
            Some(effect)
        }
        Err(e) => {
            if matches!(e, CoreError::RemoteOperation { .. }) {
                app.discard_pending_input = true;
            }
            log::debug!("Event not applied: {e}");
            None
        }
    }
}
