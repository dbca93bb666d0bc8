//! Main layout

use ratatui::{
    layout::{Constraint, Direction, Layout, Rect},
    style::{Modifier, Style},
    widgets::{Block, Paragraph},
    Frame,
};

use crate::i18n::t;
use crate::model::App;

use super::components;
use super::theme::colors;

/// Height of the form panel, borders included
const FORM_HEIGHT: u16 = 7;

/// Render the whole screen
pub fn render(app: &App, frame: &mut Frame) {
    let size = frame.area();
    let c = colors();
    frame.render_widget(Block::default().style(Style::default().bg(c.bg).fg(c.fg)), size);

    // Title bar + content + status bar
    let main_layout = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(1),
            Constraint::Min(1),
            Constraint::Length(1),
        ])
        .split(size);

    render_title_bar(frame, main_layout[0]);

    // Form above, list below
    let panels = Layout::default()
        .direction(Direction::Vertical)
        .constraints([Constraint::Length(FORM_HEIGHT), Constraint::Min(3)])
        .split(main_layout[1]);

    components::form::render(app, frame, panels[0]);
    components::item_list::render(app, frame, panels[1]);
    components::statusbar::render(app, frame, main_layout[2]);

    // Modal goes on top
    components::modal::render(app, frame);
}

fn render_title_bar(frame: &mut Frame, area: Rect) {
    let c = colors();
    let title = Paragraph::new(format!(
        " {} v{}",
        t().common.app_name,
        env!("CARGO_PKG_VERSION")
    ))
    .style(
        Style::default()
            .bg(c.highlight)
            .fg(c.selected_fg)
            .add_modifier(Modifier::BOLD),
    );
    frame.render_widget(title, area);
}
