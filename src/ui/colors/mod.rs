use crate::ui::Theme;
use once_cell::sync::Lazy;
use ratatui::style::{Modifier, Style};
use std::sync::Mutex;

#[derive(Clone, Debug)]
pub struct Colors {
    pub header_style: Style,
    pub blob_style: Style,
    pub load_btn_style: Style,
    pub focused_btn_style: Style,
    pub demo_style: Style,
    pub demo_fetching_style: Style,
    pub install_style: Style,
    pub footer_style: Style,
    pub snack_style: Style,
    pub modal_style: Style,
}

static CURRENT: Lazy<Mutex<Colors>> = Lazy::new(|| {
    let mut colors = Colors {
        header_style: Style::default(),
        blob_style: Style::default(),
        load_btn_style: Style::default(),
        focused_btn_style: Style::default(),
        demo_style: Style::default(),
        demo_fetching_style: Style::default(),
        install_style: Style::default(),
        footer_style: Style::default(),
        snack_style: Style::default(),
        modal_style: Style::default(),
    };
    derive_colors(&Theme::dark(), &mut colors);
    Mutex::new(colors)
});

pub fn set_theme(name: &str) {
    match name {
        "dark" => set_from_theme(&Theme::dark()),
        "light" => set_from_theme(&Theme::light()),
        _ => {}
    }
}

/// Derive concrete runtime Styles from the provided Theme and store them.
pub fn set_from_theme(theme: &Theme) {
    let mut g = CURRENT.lock().unwrap();
    derive_colors(theme, &mut g);
}

fn derive_colors(theme: &Theme, colors: &mut Colors) {
    *colors = Colors {
        header_style: Style::default()
            .fg(theme.accent)
            .add_modifier(Modifier::BOLD),
        blob_style: Style::default().fg(theme.accent),
        load_btn_style: Style::default().fg(theme.fg).bg(theme.bg),
        focused_btn_style: Style::default()
            .fg(theme.bg)
            .bg(theme.accent)
            .add_modifier(Modifier::BOLD),
        demo_style: Style::default().fg(theme.fg),
        demo_fetching_style: Style::default()
            .fg(theme.muted)
            .add_modifier(Modifier::ITALIC),
        install_style: Style::default().fg(theme.bg).bg(theme.muted),
        footer_style: Style::default().fg(theme.muted),
        snack_style: Style::default()
            .fg(theme.bg)
            .bg(theme.fg)
            .add_modifier(Modifier::BOLD),
        modal_style: Style::default().fg(theme.fg).bg(theme.bg),
    };
}

pub fn current() -> Colors {
    CURRENT.lock().unwrap().clone()
}
