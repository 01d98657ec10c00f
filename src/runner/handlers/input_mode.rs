use crate::app::settings::keybinds;
use crate::app::{App, Mode};
use crate::input::keyboard::key_char;
use crate::input::{KeyCode, KeyEvent};

/// Key handling for the path-input modal.
pub fn handle_input(app: &mut App, key: KeyEvent) -> anyhow::Result<bool> {
    let code = key.code;
    if keybinds::is_esc(&code) {
        app.mode = Mode::Intro;
        return Ok(false);
    }

    if let Mode::PathInput { buffer } = &mut app.mode {
        if keybinds::is_enter(&code) {
            let path = buffer.clone();
            app.mode = Mode::Intro;
            if !path.trim().is_empty() {
                app.open_path(&path);
            }
            return Ok(false);
        }
        match code {
            KeyCode::Backspace => {
                buffer.pop();
            }
            _ => {
                if let Some(c) = key_char(&key) {
                    buffer.push(c);
                }
            }
        }
    }
    Ok(false)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::input::{KeyEvent, KeyModifiers};

    fn key(code: KeyCode) -> KeyEvent {
        KeyEvent::new(code, KeyModifiers::NONE)
    }

    fn input_app() -> App {
        let (mut app, _rx, _files) = crate::app::core::tests::test_app(false);
        app.mode = Mode::PathInput {
            buffer: String::new(),
        };
        app
    }

    #[test]
    fn typing_fills_buffer_and_esc_cancels() {
        let mut app = input_app();
        handle_input(&mut app, key(KeyCode::Char('a'))).unwrap();
        handle_input(&mut app, key(KeyCode::Char('b'))).unwrap();
        handle_input(&mut app, key(KeyCode::Backspace)).unwrap();
        match &app.mode {
            Mode::PathInput { buffer } => assert_eq!(buffer, "a"),
            other => panic!("unexpected mode {other:?}"),
        }
        handle_input(&mut app, key(KeyCode::Esc)).unwrap();
        assert!(matches!(app.mode, Mode::Intro));
    }

    #[test]
    fn enter_with_empty_buffer_just_closes() {
        let mut app = input_app();
        handle_input(&mut app, key(KeyCode::Enter)).unwrap();
        assert!(matches!(app.mode, Mode::Intro));
        assert!(app.snackbar.is_empty());
    }
}
