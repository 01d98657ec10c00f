use ratatui::layout::Rect;
use ratatui::widgets::{Clear, Paragraph};
use ratatui::Frame;

use crate::app::App;

/// Transient notification bar along the bottom edge. Shows the oldest
/// unexpired message; expiry is handled by the app tick.
pub fn render(f: &mut Frame, area: Rect, app: &App) {
    let Some(message) = app.snackbar.current() else {
        return;
    };
    let colors = crate::ui::colors::current();
    let width = area.width.saturating_sub(4).max(10) as usize;
    let wrapped = textwrap::fill(message, width);
    let lines = wrapped.lines().count() as u16;
    let rect = Rect::new(
        area.x + 2,
        area.y + area.height.saturating_sub(lines + 1),
        area.width.saturating_sub(4),
        lines,
    );
    f.render_widget(Clear, rect);
    f.render_widget(Paragraph::new(wrapped).style(colors.snack_style), rect);
}
