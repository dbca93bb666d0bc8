//! Form panel: name input plus the submit and cancel affordances

use ratatui::{
    layout::{Position, Rect},
    style::Style,
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph},
    Frame,
};

use item_sync_core::SubmitAction;

use crate::i18n::t;
use crate::model::App;
use crate::view::theme::{colors, Styles};

/// Indent of the input line inside the panel
const INPUT_INDENT: u16 = 2;

pub fn render(app: &App, frame: &mut Frame, area: Rect) {
    let texts = t();
    let c = colors();
    let form = &app.form;
    let focused = app.focus.is_form() && !app.modal.is_open();

    let title = match &form.editing_id {
        Some(id) => format!(" {} · {} #{id} ", texts.form.title, texts.form.editing),
        None => format!(" {} ", texts.form.title),
    };
    let block = Block::default()
        .title(title)
        .title_style(Styles::title())
        .borders(Borders::ALL)
        .border_style(Styles::border(focused));
    let inner = block.inner(area);
    frame.render_widget(block, area);

    if inner.height < 4 || inner.width <= INPUT_INDENT {
        return;
    }

    // Label
    let label = Rect::new(inner.x, inner.y, inner.width, 1);
    frame.render_widget(
        Paragraph::new(Span::styled(texts.form.name_label, Style::default().fg(c.muted))),
        label,
    );

    // Input line, scrolled so the cursor stays visible
    let input = Rect::new(
        inner.x + INPUT_INDENT,
        inner.y + 1,
        inner.width - INPUT_INDENT,
        1,
    );
    let column = u16::try_from(form.cursor_column()).unwrap_or(u16::MAX);
    let offset = column.saturating_sub(input.width.saturating_sub(1));
    let line = if form.text.is_empty() {
        Line::styled(texts.form.placeholder, Style::default().fg(c.muted))
    } else {
        Line::styled(form.display_text(), Style::default().fg(c.fg))
    };
    frame.render_widget(Paragraph::new(line).scroll((0, offset)), input);

    if focused {
        frame.set_cursor_position(Position::new(input.x + column - offset, input.y));
    }

    // Affordances
    let submit_label = match form.submit_action {
        SubmitAction::Add => texts.form.add_item,
        SubmitAction::Update => texts.form.update_item,
    };
    let mut spans = vec![
        Span::styled("Enter", Styles::hint_key()),
        Span::raw(" "),
        Span::styled(format!("[ {submit_label} ]"), Styles::selected()),
    ];
    if form.cancel_visible {
        spans.push(Span::raw("   "));
        spans.push(Span::styled("Esc", Styles::hint_key()));
        spans.push(Span::raw(" "));
        spans.push(Span::styled(
            format!("[ {} ]", texts.common.cancel),
            Style::default().fg(c.fg),
        ));
    }
    let actions = Rect::new(inner.x, inner.y + 3, inner.width, 1);
    frame.render_widget(Paragraph::new(Line::from(spans)), actions);
}
