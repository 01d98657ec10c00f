use crate::app::settings::keybinds;
use crate::app::{App, Focus};
use crate::input::KeyEvent;

/// Key handling for the intro screen's normal mode: focus movement plus the
/// direct shortcuts for each control.
pub fn handle_normal(app: &mut App, key: KeyEvent) -> anyhow::Result<bool> {
    let code = key.code;
    if keybinds::is_quit(&code) {
        app.should_quit = true;
        return Ok(true);
    }

    if keybinds::is_next(&code) {
        app.focus_next();
    } else if keybinds::is_prev(&code) {
        app.focus_prev();
    } else if keybinds::is_enter(&code) {
        app.activate_focused();
    } else if keybinds::is_open(&code) {
        app.focus = Focus::Open;
        app.activate_focused();
    } else if keybinds::is_paste(&code) {
        if app.clipboard_supported {
            app.focus = Focus::Paste;
            app.activate_focused();
        }
    } else if keybinds::is_install(&code) {
        // Without a held prompt this falls through to the lifecycle's no-op.
        app.install.on_install_activated();
    } else if let Some(index) = keybinds::demo_index(&code) {
        if !app.fetcher.is_fetching() {
            app.focus = Focus::Demo(index);
            app.trigger_demo(index);
        }
    }
    Ok(false)
}
