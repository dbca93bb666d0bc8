//! Item list panel

use ratatui::{
    layout::Rect,
    style::Style,
    text::{Line, Span},
    widgets::{Block, Borders, List, ListItem, ListState, Paragraph},
    Frame,
};

use item_sync_core::display::literal_text;

use crate::i18n::t;
use crate::model::App;
use crate::view::theme::{colors, Styles};

pub fn render(app: &App, frame: &mut Frame, area: Rect) {
    let texts = t();
    let c = colors();
    let focused = app.focus.is_list() && !app.modal.is_open();

    let block = Block::default()
        .title(format!(" {} ({}) ", texts.list.title, app.items.items.len()))
        .title_style(Styles::title())
        .title_bottom(Line::from(vec![
            Span::styled(" e ", Styles::hint_key()),
            Span::styled(texts.list.edit, Styles::hint_desc()),
            Span::styled("  d ", Styles::hint_key()),
            Span::styled(format!("{} ", texts.list.delete), Styles::hint_desc()),
        ]))
        .borders(Borders::ALL)
        .border_style(Styles::border(focused));

    if app.items.items.is_empty() {
        let empty = Paragraph::new(Span::styled(texts.list.empty, Style::default().fg(c.muted)))
            .block(block);
        frame.render_widget(empty, area);
        return;
    }

    // Names are untrusted; control characters are shown escaped
    let rows: Vec<ListItem> = app
        .items
        .items
        .iter()
        .map(|item| {
            ListItem::new(Line::from(vec![
                Span::styled(format!("{:>5}  ", item.id), Style::default().fg(c.muted)),
                Span::raw(literal_text(&item.name)),
            ]))
        })
        .collect();

    let list = List::new(rows)
        .block(block)
        .highlight_style(Styles::selected())
        .highlight_symbol("▶ ");

    let mut state = ListState::default().with_selected(Some(app.items.selected));
    frame.render_stateful_widget(list, area, &mut state);
}
