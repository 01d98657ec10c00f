use ratatui::layout::{Alignment, Constraint, Direction, Layout, Rect};
use ratatui::text::Line;
use ratatui::widgets::{Block, Borders, Paragraph};
use ratatui::Frame;

use crate::app::{App, Focus};
use crate::intro::demo::DEMOS;

/// One cell per demo catalog entry. While a fetch is in flight its cell shows
/// a spinner and every trigger is rendered disabled; the fetcher ignores
/// overlapping requests anyway.
pub fn render(f: &mut Frame, area: Rect, app: &App) {
    let colors = crate::ui::colors::current();

    let rows = Layout::default()
        .direction(Direction::Vertical)
        .constraints([Constraint::Length(1), Constraint::Min(3)])
        .split(area);

    let title = Paragraph::new("Or try one of these (1-4):")
        .alignment(Alignment::Center)
        .style(colors.demo_style);
    f.render_widget(title, rows[0]);

    let cells = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([Constraint::Ratio(1, 4); 4])
        .split(rows[1]);

    for (i, demo) in DEMOS.iter().enumerate() {
        let fetching_here = app.fetcher.fetching() == Some(i);
        let line = if fetching_here {
            Line::from(format!("{} fetching...", app.spinner()))
        } else {
            Line::from(demo.description)
        };
        let style = if fetching_here || app.fetcher.is_fetching() {
            colors.demo_fetching_style
        } else if app.focus == Focus::Demo(i) {
            colors.focused_btn_style
        } else {
            colors.demo_style
        };
        let cell = Paragraph::new(line)
            .block(Block::default().borders(Borders::ALL))
            .alignment(Alignment::Center)
            .style(style);
        f.render_widget(cell, cells[i]);
    }
}

/// Which demo a click at `column` lands on, given the strip's area.
pub fn hit_index(area: Rect, column: u16) -> Option<usize> {
    if area.width == 0 || column < area.x || column >= area.x + area.width {
        return None;
    }
    let cell = area.width / 4;
    if cell == 0 {
        return None;
    }
    let index = ((column - area.x) / cell) as usize;
    Some(index.min(DEMOS.len() - 1))
}
