use ratatui::layout::{Alignment, Rect};
use ratatui::widgets::Paragraph;
use ratatui::Frame;

/// Static footer links; purely informational.
pub fn render(f: &mut Frame, area: Rect) {
    let colors = crate::ui::colors::current();
    let p = Paragraph::new("Privacy: images never leave your machine · Source: github.com/piczoom/piczoom · q quits")
        .alignment(Alignment::Center)
        .style(colors.footer_style);
    f.render_widget(p, area);
}
