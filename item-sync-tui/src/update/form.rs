//! Form panel update

use item_sync_core::{FormEvent, ItemSyncController};

use super::send;
use crate::message::FormMessage;
use crate::model::App;

pub async fn update(app: &mut App, ctrl: &mut ItemSyncController, msg: FormMessage) {
    match msg {
        FormMessage::Input(c) => app.form.insert(c),
        FormMessage::Backspace => app.form.backspace(),
        FormMessage::Delete => app.form.delete(),
        FormMessage::CursorLeft => app.form.move_left(),
        FormMessage::CursorRight => app.form.move_right(),
        FormMessage::CursorHome => app.form.move_home(),
        FormMessage::CursorEnd => app.form.move_end(),

        FormMessage::Submit => {
            let draft = app.form.text.clone();
            send(app, ctrl, FormEvent::Submit { draft }).await;
        }

        FormMessage::Cancel => {
            // Only reachable while the cancel affordance is shown
            if app.form.cancel_visible {
                send(app, ctrl, FormEvent::CancelRequested).await;
            }
        }
    }
}
