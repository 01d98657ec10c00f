use ratatui::layout::{Constraint, Direction, Layout, Rect};
use ratatui::style::Color;
use ratatui::Frame;

use crate::app::{App, Mode};

pub mod colors;
pub mod widgets;

/// Named palette a theme provides; concrete widget styles are derived from it
/// by `colors::set_from_theme`.
#[derive(Clone, Debug)]
pub struct Theme {
    pub bg: Color,
    pub fg: Color,
    pub accent: Color,
    pub muted: Color,
}

impl Theme {
    pub fn dark() -> Self {
        Theme {
            bg: Color::Rgb(22, 24, 29),
            fg: Color::Rgb(224, 226, 232),
            accent: Color::Rgb(168, 120, 240),
            muted: Color::Rgb(120, 124, 136),
        }
    }

    pub fn light() -> Self {
        Theme {
            bg: Color::Rgb(246, 246, 250),
            fg: Color::Rgb(32, 34, 40),
            accent: Color::Rgb(110, 60, 190),
            muted: Color::Rgb(140, 144, 156),
        }
    }
}

/// The intro screen's fixed vertical regions. Shared with the mouse handler
/// so click hit-testing and drawing always agree.
#[derive(Debug, Clone, Copy)]
pub struct IntroChunks {
    /// Single top row holding the install button, when there is one.
    pub banner: Rect,
    pub header: Rect,
    /// Blob canvas with the load panel floated over it.
    pub main: Rect,
    pub demos: Rect,
    pub footer: Rect,
}

pub fn intro_chunks(area: Rect) -> IntroChunks {
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(1),
            Constraint::Length(7),
            Constraint::Min(9),
            Constraint::Length(6),
            Constraint::Length(2),
        ])
        .split(area);
    IntroChunks {
        banner: chunks[0],
        header: chunks[1],
        main: chunks[2],
        demos: chunks[3],
        footer: chunks[4],
    }
}

/// Centered sub-rect of `area`, clamped to fit.
pub fn centered_rect(area: Rect, width: u16, height: u16) -> Rect {
    let width = width.min(area.width);
    let height = height.min(area.height);
    Rect::new(
        area.x + (area.width - width) / 2,
        area.y + (area.height - height) / 2,
        width,
        height,
    )
}

/// The load panel's floating position inside the main region.
pub fn load_panel_rect(main: Rect) -> Rect {
    centered_rect(main, 38, 5)
}

/// Draw one frame of the intro screen.
pub fn ui(f: &mut Frame, app: &App) {
    let chunks = intro_chunks(f.area());

    widgets::install_banner::render(f, chunks.banner, app);
    widgets::header::render(f, chunks.header);
    widgets::blob_field::render(f, chunks.main, app);
    widgets::load_panel::render(f, load_panel_rect(chunks.main), app);
    widgets::demo_strip::render(f, chunks.demos, app);
    widgets::footer::render(f, chunks.footer);

    if let Mode::PathInput { buffer } = &app.mode {
        widgets::modal::render(f, f.area(), buffer);
    }
    widgets::snackbar::render(f, f.area(), app);
}
