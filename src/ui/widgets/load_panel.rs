use ratatui::layout::{Alignment, Rect};
use ratatui::text::{Line, Span};
use ratatui::widgets::{Block, Borders, Paragraph};
use ratatui::Frame;

use crate::app::{App, Focus};

/// The floating "get an image in" panel: an open button plus the drop/paste
/// hint. Paste renders as a button only when the clipboard is usable.
pub fn render(f: &mut Frame, area: Rect, app: &App) {
    let colors = crate::ui::colors::current();

    let open_style = if app.focus == Focus::Open {
        colors.focused_btn_style
    } else {
        colors.load_btn_style
    };
    let open = Line::from(Span::styled("[ Open image (o) ]", open_style)).centered();

    let hint = if app.clipboard_supported {
        let paste_style = if app.focus == Focus::Paste {
            colors.focused_btn_style
        } else {
            colors.load_btn_style
        };
        Line::from(vec![
            Span::raw("Drop OR "),
            Span::styled("[ Paste (p) ]", paste_style),
        ])
        .centered()
    } else {
        Line::from("Drop OR Paste").centered()
    };

    let p = Paragraph::new(vec![open, Line::default(), hint])
        .block(Block::default().borders(Borders::ALL))
        .style(colors.load_btn_style)
        .alignment(Alignment::Center);
    f.render_widget(p, area);
}
