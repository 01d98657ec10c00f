//! Split handlers: thin wrapper delegating to submodules to keep file sizes manageable.

pub mod input_mode;
pub mod mouse;
pub mod normal;

pub use input_mode::handle_input;
pub use mouse::handle_mouse;
pub use normal::handle_normal;

use crate::app::{App, Mode};
use crate::input::KeyEvent;

/// Top-level key handler: dispatch on the screen's interaction mode.
/// Returns `true` when the app should quit.
pub fn handle_key(app: &mut App, key: KeyEvent) -> anyhow::Result<bool> {
    match &app.mode {
        Mode::Intro => handle_normal(app, key),
        Mode::PathInput { .. } => handle_input(app, key),
    }
}
