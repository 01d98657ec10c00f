use ratatui::layout::{Alignment, Rect};
use ratatui::widgets::Paragraph;
use ratatui::Frame;

/// Wordmark shown at the top of the intro screen. Falls back to a plain
/// title line when the area is too short for the full logo.
const LOGO: [&str; 6] = [
    r"        _      _____                      ",
    r"  _ __ (_) ___|__  / ___   ___  _ __ ___  ",
    r" | '_ \| |/ __| / / / _ \ / _ \| '_ ` _ \ ",
    r" | |_) | | (__ / /_| (_) | (_) | | | | | |",
    r" | .__/|_|\___/____|\___/ \___/|_| |_| |_|",
    r" |_|         squeeze your images          ",
];

pub fn render(f: &mut Frame, area: Rect) {
    let colors = crate::ui::colors::current();
    let text = if area.height >= LOGO.len() as u16 {
        LOGO.join("\n")
    } else {
        "picZoom · squeeze your images".to_string()
    };
    let p = Paragraph::new(text)
        .alignment(Alignment::Center)
        .style(colors.header_style);
    f.render_widget(p, area);
}
