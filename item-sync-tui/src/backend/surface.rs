//! Terminal surface for the item sync controller
//!
//! Implements the core's surface traits over the parts of [`App`] that the
//! controller is allowed to touch.

use chrono::Local;
use item_sync_core::{
    FormState, FormView, Item, ListRenderer, Notice, NoticeKind, NoticeLevel, Notifier, RemoteOp,
};

use crate::i18n::t;
use crate::model::{App, FocusPanel, FormInputState, ItemListState, ModalState};

/// Borrowed view of the app state the controller writes to
pub struct TuiSurface<'a> {
    items: &'a mut ItemListState,
    form: &'a mut FormInputState,
    focus: &'a mut FocusPanel,
    modal: &'a mut ModalState,
    status_message: &'a mut Option<String>,
    last_sync: &'a mut Option<chrono::DateTime<Local>>,
}

impl<'a> TuiSurface<'a> {
    pub fn new(app: &'a mut App) -> Self {
        Self {
            items: &mut app.items,
            form: &mut app.form,
            focus: &mut app.focus,
            modal: &mut app.modal,
            status_message: &mut app.status_message,
            last_sync: &mut app.last_sync,
        }
    }
}

/// User-facing text of a notice
pub fn notice_text(kind: &NoticeKind) -> String {
    let texts = &t().notice;
    match kind {
        NoticeKind::EmptyName => texts.empty_name.to_string(),
        NoticeKind::ResourceUnreachable => texts.unreachable.to_string(),
        NoticeKind::OperationFailed { op, detail } => {
            let summary = match op {
                RemoteOp::List => texts.list_failed,
                RemoteOp::Get => texts.get_failed,
                RemoteOp::Create => texts.create_failed,
                RemoteOp::Update => texts.update_failed,
                RemoteOp::Delete => texts.delete_failed,
            };
            format!("{summary} ({detail})")
        }
    }
}

impl ListRenderer for TuiSurface<'_> {
    fn render(&mut self, items: &[Item]) {
        self.items.set_items(items);
        *self.last_sync = Some(Local::now());
    }
}

impl FormView for TuiSurface<'_> {
    fn show_form(&mut self, form: &FormState) {
        self.form.load(form);
    }

    fn focus_name_input(&mut self) {
        *self.focus = FocusPanel::Form;
    }
}

impl Notifier for TuiSurface<'_> {
    fn notify(&mut self, notice: &Notice) {
        let text = notice_text(&notice.kind);
        match notice.level {
            NoticeLevel::Blocking => {
                let title = match notice.kind {
                    NoticeKind::OperationFailed { .. } => t().common.error,
                    _ => t().modal.alert_title,
                };
                // A second blocking notice replaces the first one
                self.modal.show_alert(title, &text);
            }
            NoticeLevel::Passive => *self.status_message = Some(text),
        }
    }
}
