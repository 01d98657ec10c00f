use crate::app::settings::Settings;
use crate::app::{App, AppConfig, ImageFile, IntroEvent};
use crate::input::{poll, read_event, InputEvent};
use crate::intro::clipboard::SystemClipboard;
use crate::intro::demo::HttpStore;
use crate::intro::telemetry::LogSink;
use crate::platform::InstallSignal;
use crate::runner::handlers;
use crate::runner::terminal::{init_terminal, restore_terminal};
use crate::ui;

use std::cell::RefCell;
use std::io::stdout;
use std::rc::Rc;
use std::sync::mpsc::{self, Receiver, TryRecvError};
use std::sync::Arc;
use std::time::Duration;

use ratatui::backend::CrosstermBackend;
use ratatui::layout::Rect;
use ratatui::{Terminal, TerminalOptions, Viewport};

fn build_app(
    settings: Settings,
    interactive: bool,
) -> (
    App,
    Receiver<IntroEvent>,
    Rc<RefCell<Option<ImageFile>>>,
) {
    let (events_tx, events_rx) = mpsc::channel();
    let picked: Rc<RefCell<Option<ImageFile>>> = Rc::default();
    let slot = picked.clone();

    ui::colors::set_theme(&settings.theme);
    let app = App::new(
        AppConfig {
            settings,
            interactive,
            clipboard_supported: SystemClipboard::supported(),
        },
        Arc::new(HttpStore),
        events_tx,
        Box::new(move |file| {
            *slot.borrow_mut() = Some(file);
        }),
        Box::new(LogSink),
    );
    (app, events_rx, picked)
}

/// Render a single static frame inline and return. Used when stdout is not a
/// tty or `--prerender` was given; no raw mode, no animation, no input.
fn prerender_frame(app: &App) -> anyhow::Result<()> {
    let backend = CrosstermBackend::new(stdout());
    let mut terminal = Terminal::with_options(
        backend,
        TerminalOptions {
            viewport: Viewport::Inline(24),
        },
    )?;
    terminal.draw(|f| ui::ui(f, app))?;
    Ok(())
}

/// Run the intro screen until the user picks an image or quits.
///
/// `platform` delivers install signals from whatever platform integration the
/// caller wired up. Returns the picked image, or `None` on quit.
pub fn run_app(
    settings: Settings,
    platform: Receiver<InstallSignal>,
    prerender: bool,
) -> anyhow::Result<Option<ImageFile>> {
    let interactive = !prerender && atty::is(atty::Stream::Stdout);
    let (mut app, events_rx, picked) = build_app(settings, interactive);
    app.mount();

    if !interactive {
        prerender_frame(&app)?;
        return Ok(None);
    }

    let mut terminal = init_terminal()?;
    if !app.settings.mouse_enabled {
        let _ = crate::runner::terminal::disable_mouse_capture_on_terminal(&mut terminal);
    }

    let result = loop {
        if let Err(e) = terminal.draw(|f| ui::ui(f, &app)) {
            break Err(e.into());
        }

        match pump(&mut app, &mut terminal, &platform, &events_rx) {
            Ok(()) => {}
            Err(e) => break Err(e),
        }

        if app.should_quit || picked.borrow().is_some() {
            break Ok(());
        }
    };

    restore_terminal(terminal)?;
    result?;
    let taken = picked.borrow_mut().take();
    Ok(taken)
}

/// One iteration of input and event handling: at most one terminal event,
/// then every pending platform and worker message, then the tick.
fn pump(
    app: &mut App,
    terminal: &mut Terminal<CrosstermBackend<std::io::Stdout>>,
    platform: &Receiver<InstallSignal>,
    events_rx: &Receiver<IntroEvent>,
) -> anyhow::Result<()> {
    if poll(Duration::from_millis(100))? {
        match read_event()? {
            InputEvent::Key(key) => {
                if handlers::handle_key(app, key)? {
                    app.should_quit = true;
                }
            }
            InputEvent::Mouse(me) => {
                let ts = terminal.size()?;
                handlers::handle_mouse(app, me, Rect::new(0, 0, ts.width, ts.height))?;
            }
            // Bracketed paste is how dropped file paths reach us.
            InputEvent::Paste(text) => app.open_path(&text),
            InputEvent::FocusGained => app.visible = true,
            InputEvent::FocusLost => app.visible = false,
            InputEvent::Resize(_, _) => { /* redraw on next loop */ }
            InputEvent::Other => {}
        }
    }

    loop {
        match platform.try_recv() {
            Ok(signal) => app.handle_event(IntroEvent::Install(signal)),
            Err(TryRecvError::Empty) | Err(TryRecvError::Disconnected) => break,
        }
    }
    while let Ok(event) = events_rx.try_recv() {
        app.handle_event(event);
    }

    app.on_tick();
    Ok(())
}
