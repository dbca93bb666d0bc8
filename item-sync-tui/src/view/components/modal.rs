//! Modal dialogs

use ratatui::{
    layout::{Alignment, Rect},
    style::{Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Clear, Paragraph, Wrap},
    Frame,
};

use item_sync_core::display::literal_text;

use crate::i18n::t;
use crate::model::{App, Modal, CONFIRM_FOCUS_DELETE};
use crate::view::theme::{colors, Styles};

/// Render the active modal, if any
pub fn render(app: &App, frame: &mut Frame) {
    let Some(ref modal) = app.modal.active else {
        return;
    };

    match modal {
        Modal::ConfirmDelete {
            item_id,
            item_name,
            focus,
        } => {
            let label = format!("#{item_id} {}", literal_text(item_name));
            render_confirm_delete(frame, &label, *focus);
        }
        Modal::Alert { title, message } => render_alert(frame, title, message),
        Modal::Help => render_help(frame),
    }
}

/// Centered rectangle of at most `width` x `height`
fn centered_rect(width: u16, height: u16, area: Rect) -> Rect {
    let x = area.x + (area.width.saturating_sub(width)) / 2;
    let y = area.y + (area.height.saturating_sub(height)) / 2;
    Rect::new(x, y, width.min(area.width), height.min(area.height))
}

fn modal_block(title: &str, border: Style) -> Block<'static> {
    Block::default()
        .title(format!(" {title} "))
        .title_alignment(Alignment::Center)
        .title_style(Styles::title())
        .borders(Borders::ALL)
        .border_style(border)
        .style(Style::default().bg(colors().bg))
}

fn render_confirm_delete(frame: &mut Frame, label: &str, focus: usize) {
    let texts = t();
    let c = colors();

    let area = centered_rect(50, 9, frame.area());
    frame.render_widget(Clear, area);

    let block = modal_block(
        texts.modal.confirm_delete_title,
        Style::default().fg(c.warning),
    );
    let inner = block.inner(area);
    frame.render_widget(block, area);

    let button = |label: &str, focused: bool| {
        let style = if focused {
            Styles::selected()
        } else {
            Style::default().fg(c.muted)
        };
        Span::styled(format!("  {label}  "), style)
    };

    let lines = vec![
        Line::from(""),
        Line::from(texts.modal.confirm_delete_message),
        Line::styled(
            label.to_string(),
            Style::default().fg(c.fg).add_modifier(Modifier::BOLD),
        ),
        Line::from(""),
        Line::from(vec![
            button(texts.common.cancel, focus != CONFIRM_FOCUS_DELETE),
            Span::raw("    "),
            button(texts.common.delete, focus == CONFIRM_FOCUS_DELETE),
        ]),
    ];

    frame.render_widget(
        Paragraph::new(lines)
            .alignment(Alignment::Center)
            .wrap(Wrap { trim: true }),
        inner,
    );
}

fn render_alert(frame: &mut Frame, title: &str, message: &str) {
    let texts = t();
    let c = colors();

    let area = centered_rect(60, 9, frame.area());
    frame.render_widget(Clear, area);

    let block = modal_block(title, Style::default().fg(c.error));
    let inner = block.inner(area);
    frame.render_widget(block, area);

    let lines = vec![
        Line::from(""),
        Line::styled(message.to_string(), Style::default().fg(c.fg)),
        Line::from(""),
        Line::styled(texts.modal.press_any_key, Style::default().fg(c.muted)),
    ];

    frame.render_widget(
        Paragraph::new(lines)
            .alignment(Alignment::Center)
            .wrap(Wrap { trim: true }),
        inner,
    );
}

fn render_help(frame: &mut Frame) {
    let texts = t();
    let help = &texts.help;
    let c = colors();

    let area = centered_rect(52, 22, frame.area());
    frame.render_widget(Clear, area);

    let block = modal_block(texts.modal.help_title, Styles::border(true));
    let inner = block.inner(area);
    frame.render_widget(block, area);

    let section = |name: &'static str| {
        Line::styled(
            format!(" {name}"),
            Style::default().fg(c.highlight).add_modifier(Modifier::BOLD),
        )
    };
    let entry = |key: &'static str, desc: &'static str| {
        Line::from(vec![
            Span::styled(format!("   {key:<8}"), Styles::hint_key()),
            Span::styled(desc, Style::default().fg(c.fg)),
        ])
    };

    let lines = vec![
        section(help.global),
        entry("Tab", help.switch_panel),
        entry("Alt+r", help.reload),
        entry("F1", help.show_help),
        entry("Alt+q", help.quit),
        Line::from(""),
        section(help.form),
        entry("←→", help.edit_text),
        entry("Enter", help.submit),
        entry("Esc", help.cancel_edit),
        Line::from(""),
        section(help.list),
        entry("↑↓", help.select),
        entry("e", help.edit),
        entry("d", help.delete),
        Line::from(""),
        Line::styled(format!(" {}", help.close_hint), Style::default().fg(c.muted)),
    ];

    frame.render_widget(Paragraph::new(lines), inner);
}
