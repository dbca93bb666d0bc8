//! Modal update

use item_sync_core::{FormEvent, ItemSyncController};

use super::send;
use crate::message::ModalMessage;
use crate::model::{App, Modal, CONFIRM_FOCUS_CANCEL, CONFIRM_FOCUS_DELETE};

pub async fn update(app: &mut App, ctrl: &mut ItemSyncController, msg: ModalMessage) {
    let Some(modal) = app.modal.active.take() else {
        return;
    };

    match (modal, msg) {
        (Modal::ConfirmDelete { item_id, .. }, ModalMessage::Close) => {
            let event = FormEvent::DeleteAnswered {
                id: item_id,
                confirmed: false,
            };
            send(app, ctrl, event).await;
        }

        (Modal::ConfirmDelete { item_id, focus, .. }, ModalMessage::Confirm) => {
            let event = FormEvent::DeleteAnswered {
                id: item_id,
                confirmed: focus == CONFIRM_FOCUS_DELETE,
            };
            send(app, ctrl, event).await;
        }

        (
            Modal::ConfirmDelete {
                item_id,
                item_name,
                focus,
            },
            ModalMessage::ToggleFocus,
        ) => {
            let focus = if focus == CONFIRM_FOCUS_DELETE {
                CONFIRM_FOCUS_CANCEL
            } else {
                CONFIRM_FOCUS_DELETE
            };
            app.modal.active = Some(Modal::ConfirmDelete {
                item_id,
                item_name,
                focus,
            });
        }

        // Alerts and help have no buttons to move between
        (modal @ (Modal::Alert { .. } | Modal::Help), ModalMessage::ToggleFocus) => {
            app.modal.active = Some(modal);
        }

        (Modal::Alert { .. } | Modal::Help, ModalMessage::Close | ModalMessage::Confirm) => {}
    }
}
