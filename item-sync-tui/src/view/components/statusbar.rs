//! Status bar: key hints, the latest passive notice and the sync time

use ratatui::{
    layout::{Alignment, Constraint, Direction, Layout, Rect},
    style::Style,
    text::{Line, Span},
    widgets::Paragraph,
    Frame,
};

use crate::i18n::t;
use crate::model::{App, FocusPanel};
use crate::view::theme::{colors, Styles};

/// Width reserved for the sync time on the right
const SYNC_WIDTH: u16 = 22;

pub fn render(app: &App, frame: &mut Frame, area: Rect) {
    let c = colors();
    let columns = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([Constraint::Min(1), Constraint::Length(SYNC_WIDTH)])
        .split(area);

    let mut spans = Vec::new();
    for (i, (key, desc)) in hints(app).iter().enumerate() {
        if i > 0 {
            spans.push(Span::styled(" │ ", Style::default().fg(c.muted)));
        }
        spans.push(Span::styled(*key, Styles::hint_key()));
        spans.push(Span::raw(" "));
        spans.push(Span::styled(*desc, Styles::hint_desc()));
    }

    if let Some(ref msg) = app.status_message {
        spans.push(Span::styled(" │ ", Style::default().fg(c.muted)));
        spans.push(Span::styled(msg.as_str(), Style::default().fg(c.warning)));
    }

    frame.render_widget(
        Paragraph::new(Line::from(spans)).style(Styles::statusbar()),
        columns[0],
    );

    let texts = &t().status_bar;
    let sync = match app.last_sync {
        Some(at) => format!("{} {} ", texts.last_sync, at.format("%H:%M:%S")),
        None => format!("{} ", texts.never_synced),
    };
    frame.render_widget(
        Paragraph::new(sync)
            .alignment(Alignment::Right)
            .style(Styles::statusbar()),
        columns[1],
    );
}

/// Key hints for the focused panel
fn hints(app: &App) -> Vec<(&'static str, &'static str)> {
    let texts = &t().hints;
    let mut hints = vec![("Tab", texts.switch_panel)];

    match app.focus {
        FocusPanel::Form => {
            hints.push(("Enter", texts.submit));
            if app.form.cancel_visible {
                hints.push(("Esc", texts.cancel_edit));
            }
        }
        FocusPanel::List => {
            hints.push(("↑↓", texts.select));
            hints.push(("e", texts.edit));
            hints.push(("d", texts.delete));
        }
    }

    hints.push(("Alt+r", texts.reload));
    hints.push(("F1", texts.help));
    hints.push(("Alt+q", texts.quit));
    hints
}
