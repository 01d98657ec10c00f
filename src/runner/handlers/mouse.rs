use ratatui::layout::Rect;

use crossterm::event::{MouseButton, MouseEvent, MouseEventKind};

use crate::app::{App, Focus};
use crate::ui::widgets::install_banner;
use crate::ui::{self, widgets::demo_strip};

fn contains(area: Rect, column: u16, row: u16) -> bool {
    column >= area.x
        && column < area.x + area.width
        && row >= area.y
        && row < area.y + area.height
}

/// Route a click to the control drawn under it. The regions come from the
/// same layout the renderer uses, so hit-testing and drawing always agree.
pub fn handle_mouse(app: &mut App, me: MouseEvent, term: Rect) -> anyhow::Result<()> {
    if me.kind != MouseEventKind::Down(MouseButton::Left) {
        return Ok(());
    }
    let chunks = ui::intro_chunks(term);
    let (column, row) = (me.column, me.row);

    // Install button sits right-aligned on the banner row; the clickable
    // span is exactly the rendered label.
    let label_width = install_banner::LABEL.len() as u16;
    if app.install.shows_button()
        && contains(chunks.banner, column, row)
        && column + label_width >= chunks.banner.x + chunks.banner.width
    {
        app.focus = Focus::Install;
        app.install.on_install_activated();
        return Ok(());
    }

    let panel = ui::load_panel_rect(chunks.main);
    if contains(panel, column, row) {
        // Content rows inside the border: open button, blank, paste hint.
        if row == panel.y + 1 {
            app.focus = Focus::Open;
            app.activate_focused();
        } else if row == panel.y + 3 && app.clipboard_supported {
            app.focus = Focus::Paste;
            app.activate_focused();
        }
        return Ok(());
    }

    if contains(chunks.demos, column, row) {
        if let Some(index) = demo_strip::hit_index(chunks.demos, column) {
            if !app.fetcher.is_fetching() {
                app.focus = Focus::Demo(index);
                app.trigger_demo(index);
            }
        }
    }
    Ok(())
}
