#[cfg(feature = "async-input")]
pub mod async_input;
pub mod keyboard;

use std::io;
use std::time::Duration;

use crossterm::event::{self, Event, MouseEvent};

pub use keyboard::{KeyCode, KeyEvent, KeyModifiers};

/// Terminal events the intro screen cares about, mapped from crossterm.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum InputEvent {
    Key(KeyEvent),
    Mouse(MouseEvent),
    /// Bracketed paste: how dropped/pasted file paths arrive in a terminal.
    Paste(String),
    FocusGained,
    FocusLost,
    Resize(u16, u16),
    Other,
}

/// True when an event is ready within `timeout`.
pub fn poll(timeout: Duration) -> io::Result<bool> {
    event::poll(timeout)
}

/// Read the next terminal event and map it into our event type.
pub fn read_event() -> io::Result<InputEvent> {
    Ok(match event::read()? {
        Event::Key(key) => InputEvent::Key(key),
        Event::Mouse(me) => InputEvent::Mouse(me),
        Event::Paste(text) => InputEvent::Paste(text),
        Event::FocusGained => InputEvent::FocusGained,
        Event::FocusLost => InputEvent::FocusLost,
        Event::Resize(w, h) => InputEvent::Resize(w, h),
        #[allow(unreachable_patterns)]
        _ => InputEvent::Other,
    })
}
