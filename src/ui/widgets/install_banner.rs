use ratatui::layout::{Alignment, Rect};
use ratatui::widgets::Paragraph;
use ratatui::Frame;

use crate::app::{App, Focus};

pub const LABEL: &str = "[ Install app (i) ]";

/// Top-row install control. Only rendered between the platform's
/// availability signal and its installed signal.
pub fn render(f: &mut Frame, area: Rect, app: &App) {
    if !app.install.shows_button() {
        return;
    }
    let colors = crate::ui::colors::current();
    let style = if app.focus == Focus::Install {
        colors.focused_btn_style
    } else {
        colors.install_style
    };
    let p = Paragraph::new(LABEL)
        .alignment(Alignment::Right)
        .style(style);
    f.render_widget(p, area);
}
