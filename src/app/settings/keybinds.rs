// Centralised keybind predicates for the intro screen.
//
// Small, well-named helpers like `is_quit` and `is_open` so handlers refer
// to actions rather than raw `KeyCode` patterns. Kept as plain matches for
// now; a user-configurable map can replace the bodies without touching the
// handlers.

use crate::input::KeyCode;

pub fn is_quit(code: &KeyCode) -> bool {
    matches!(code, KeyCode::Char('q'))
}

pub fn is_open(code: &KeyCode) -> bool {
    matches!(code, KeyCode::Char('o'))
}

pub fn is_paste(code: &KeyCode) -> bool {
    matches!(code, KeyCode::Char('p'))
}

pub fn is_install(code: &KeyCode) -> bool {
    matches!(code, KeyCode::Char('i'))
}

pub fn is_next(code: &KeyCode) -> bool {
    matches!(code, KeyCode::Tab | KeyCode::Right | KeyCode::Down)
}

pub fn is_prev(code: &KeyCode) -> bool {
    matches!(code, KeyCode::BackTab | KeyCode::Left | KeyCode::Up)
}

pub fn is_enter(code: &KeyCode) -> bool {
    matches!(code, KeyCode::Enter)
}

pub fn is_esc(code: &KeyCode) -> bool {
    matches!(code, KeyCode::Esc)
}

/// Digit shortcuts jump straight to a demo entry.
pub fn demo_index(code: &KeyCode) -> Option<usize> {
    match code {
        KeyCode::Char(c @ '1'..='4') => Some(*c as usize - '1' as usize),
        _ => None,
    }
}
