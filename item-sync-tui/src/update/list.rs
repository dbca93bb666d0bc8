//! Item list update

use item_sync_core::{Effect, FormEvent, ItemSyncController};

use super::send;
use crate::message::ListMessage;
use crate::model::App;

pub async fn update(app: &mut App, ctrl: &mut ItemSyncController, msg: ListMessage) {
    match msg {
        ListMessage::SelectPrevious => app.items.select_previous(),
        ListMessage::SelectNext => app.items.select_next(),
        ListMessage::SelectFirst => app.items.select_first(),
        ListMessage::SelectLast => app.items.select_last(),

        ListMessage::Edit => {
            let Some(id) = app.items.selected_item().map(|item| item.id.clone()) else {
                return;
            };
            send(app, ctrl, FormEvent::EditRequested(id)).await;
        }

        ListMessage::Delete => {
            let Some(item) = app.items.selected_item().cloned() else {
                return;
            };
            if let Some(Effect::ConfirmDelete(id)) =
                send(app, ctrl, FormEvent::DeleteRequested(item.id)).await
            {
                app.modal.show_confirm_delete(id, &item.name);
            }
        }
    }
}
