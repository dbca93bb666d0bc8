//! Main loop
//!
//! ```text
//! key press -> event layer -> message -> update layer -> model -> view
//!                                          |
//!                                          +-> item sync controller -> server
//! ```
//!
//! Remote calls are awaited inside the update step, so the next key is not
//! read until the call has finished. Keys typed meanwhile are thrown away.

use std::time::Duration;

use anyhow::Result;
use item_sync_core::ItemSyncController;

use crate::backend::TuiSurface;
use crate::event;
use crate::model::App;
use crate::update;
use crate::util::Term;
use crate::view;

/// How long one poll waits for a key before redrawing
const POLL_INTERVAL: Duration = Duration::from_millis(100);

pub async fn run(terminal: &mut Term, app: &mut App, ctrl: &mut ItemSyncController) -> Result<()> {
    // First frame before the initial load so the user sees the empty form
    terminal.draw(|frame| view::render(app, frame))?;
    if let Err(e) = ctrl.initialize(&mut TuiSurface::new(app)).await {
        log::debug!("Initial load failed: {e}");
    }
    app.discard_pending_input = true;
    discard_queued_input(app)?;

    loop {
        terminal.draw(|frame| view::render(app, frame))?;

        if app.should_quit {
            break;
        }

        if let Some(event) = event::poll_event(POLL_INTERVAL)? {
            let msg = event::handle_event(event, app);
            update::update(app, ctrl, msg).await;
            discard_queued_input(app)?;
        }
    }

    Ok(())
}

/// Drop keys typed while a remote call was running
fn discard_queued_input(app: &mut App) -> Result<()> {
    if std::mem::take(&mut app.discard_pending_input) {
        let dropped = event::discard_pending()?;
        if dropped > 0 {
            log::debug!("Discarded {dropped} event(s) queued during a request");
        }
    }
    Ok(())
}
