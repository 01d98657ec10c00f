use ratatui::layout::Rect;
use ratatui::text::Line;
use ratatui::widgets::{Block, Borders, Clear, Paragraph};
use ratatui::Frame;

/// Path-entry modal: the terminal's stand-in for a native file dialog.
pub fn render(f: &mut Frame, area: Rect, buffer: &str) {
    let colors = crate::ui::colors::current();
    let rect = crate::ui::centered_rect(area, area.width.saturating_sub(10).clamp(20, 70), 4);
    f.render_widget(Clear, rect);
    let p = Paragraph::new(vec![
        Line::from(format!("> {buffer}_")),
        Line::from("Enter opens · Esc cancels"),
    ])
    .block(
        Block::default()
            .borders(Borders::ALL)
            .title("Open image path"),
    )
    .style(colors.modal_style);
    f.render_widget(p, rect);
}
