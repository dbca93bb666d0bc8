//! Event handler

use std::time::Duration;

use anyhow::Result;
use crossterm::event::{self, Event, KeyCode, KeyEvent, KeyEventKind, KeyModifiers};

use crate::event::keymap::DefaultKeymap;
use crate::message::{AppMessage, FormMessage, ListMessage, ModalMessage};
use crate::model::{App, Modal};

/// Poll for one terminal event
pub fn poll_event(timeout: Duration) -> Result<Option<Event>> {
    if event::poll(timeout)? {
        Ok(Some(event::read()?))
    } else {
        Ok(None)
    }
}

/// Drop every event already queued, returning how many were dropped
///
/// Used after a remote call so keys pressed while it ran (a second Enter on
/// the submit button, say) are not replayed against the new state.
pub fn discard_pending() -> Result<usize> {
    let mut dropped = 0;
    while event::poll(Duration::ZERO)? {
        event::read()?;
        dropped += 1;
    }
    Ok(dropped)
}

/// Translate an event into a message
pub fn handle_event(event: Event, app: &App) -> AppMessage {
    match event {
        Event::Key(key_event) => handle_key_event(key_event, app),
        // Resize redraws on the next loop iteration
        _ => AppMessage::Noop,
    }
}

/// Translate a key press
fn handle_key_event(key: KeyEvent, app: &App) -> AppMessage {
    // Press only: Windows terminals also report Release and Repeat
    if key.kind != KeyEventKind::Press {
        return AppMessage::Noop;
    }

    // An open modal takes every key
    if app.modal.is_open() {
        return handle_modal_keys(key, app);
    }

    // Global keys, wherever the focus is
    if DefaultKeymap::FORCE_QUIT.matches(&key) || DefaultKeymap::QUIT.matches(&key) {
        return AppMessage::Quit;
    }

    if DefaultKeymap::HELP.matches(&key) {
        return AppMessage::ShowHelp;
    }

    if DefaultKeymap::REFRESH.matches(&key) {
        return AppMessage::Refresh;
    }

    if DefaultKeymap::SWITCH_PANEL.matches(&key) {
        return AppMessage::ToggleFocus;
    }

    if app.focus.is_form() {
        handle_form_keys(key)
    } else {
        handle_list_keys(key)
    }
}

/// Keys while the name input has focus
fn handle_form_keys(key: KeyEvent) -> AppMessage {
    if DefaultKeymap::SUBMIT.matches(&key) {
        return AppMessage::Form(FormMessage::Submit);
    }
    if DefaultKeymap::CANCEL_EDIT.matches(&key) {
        return AppMessage::Form(FormMessage::Cancel);
    }

    let msg = match key.code {
        KeyCode::Char(c)
            if key.modifiers.is_empty() || key.modifiers == KeyModifiers::SHIFT =>
        {
            FormMessage::Input(c)
        }
        KeyCode::Backspace => FormMessage::Backspace,
        KeyCode::Delete => FormMessage::Delete,
        KeyCode::Left => FormMessage::CursorLeft,
        KeyCode::Right => FormMessage::CursorRight,
        KeyCode::Home => FormMessage::CursorHome,
        KeyCode::End => FormMessage::CursorEnd,
        _ => return AppMessage::Noop,
    };
    AppMessage::Form(msg)
}

/// Keys while the item list has focus
fn handle_list_keys(key: KeyEvent) -> AppMessage {
    if DefaultKeymap::ACTION_EDIT.matches(&key) {
        return AppMessage::List(ListMessage::Edit);
    }
    if DefaultKeymap::ACTION_DELETE.matches(&key) {
        return AppMessage::List(ListMessage::Delete);
    }

    match key.code {
        KeyCode::Up | KeyCode::Char('k') => AppMessage::List(ListMessage::SelectPrevious),
        KeyCode::Down | KeyCode::Char('j') => AppMessage::List(ListMessage::SelectNext),
        KeyCode::Home => AppMessage::List(ListMessage::SelectFirst),
        KeyCode::End => AppMessage::List(ListMessage::SelectLast),
        KeyCode::Enter => AppMessage::List(ListMessage::Edit),
        KeyCode::Delete => AppMessage::List(ListMessage::Delete),
        KeyCode::Char('?') => AppMessage::ShowHelp,
        KeyCode::Esc => AppMessage::ClearStatus,
        _ => AppMessage::Noop,
    }
}

/// Keys while a modal is open
fn handle_modal_keys(key: KeyEvent, app: &App) -> AppMessage {
    // Esc and Ctrl+C always close the modal
    match (key.modifiers, key.code) {
        (KeyModifiers::CONTROL, KeyCode::Char('c')) | (KeyModifiers::NONE, KeyCode::Esc) => {
            return AppMessage::Modal(ModalMessage::Close);
        }
        _ => {}
    }

    match app.modal.active {
        Some(Modal::ConfirmDelete { .. }) => match key.code {
            KeyCode::Left | KeyCode::Right | KeyCode::Tab | KeyCode::BackTab => {
                AppMessage::Modal(ModalMessage::ToggleFocus)
            }
            KeyCode::Enter => AppMessage::Modal(ModalMessage::Confirm),
            _ => AppMessage::Noop,
        },
        // Alerts and help close on any key
        Some(Modal::Alert { .. } | Modal::Help) => AppMessage::Modal(ModalMessage::Close),
        None => AppMessage::Noop,
    }
}
