mod common;

use std::sync::Arc;

use common::{harness, make_prompt, FailingStore};
use picZoom::app::{IntroEvent, Mode};
use picZoom::platform::InstallSignal;
use picZoom::ui;
use ratatui::backend::TestBackend;
use ratatui::Terminal;

/// Flatten the whole backend buffer into one string for containment checks.
fn screen_text(term: &mut Terminal<TestBackend>) -> String {
    let buf = term.backend_mut().buffer();
    let area = *buf.area();
    let mut out = String::new();
    for y in 0..area.height {
        for x in 0..area.width {
            if let Some(c) = buf.cell((x, y)) {
                out.push_str(c.symbol());
            }
        }
        out.push('\n');
    }
    out
}

#[test]
fn intro_renders_controls_and_demo_catalog() {
    let h = harness(Arc::new(FailingStore), true);
    let backend = TestBackend::new(100, 30);
    let mut term = Terminal::new(backend).unwrap();

    term.draw(|f| ui::ui(f, &h.app)).unwrap();

    let text = screen_text(&mut term);
    assert!(text.contains("[ Open image (o) ]"), "missing open button:\n{text}");
    assert!(text.contains("[ Paste (p) ]"), "missing paste button:\n{text}");
    assert!(text.contains("Or try one of these"), "missing demo title:\n{text}");
    assert!(text.contains("Large photo (2.8mb)"), "missing demo cell:\n{text}");
    assert!(text.contains("SVG icon (13k)"), "missing demo cell:\n{text}");
    // No install signal yet: no install control anywhere.
    assert!(!text.contains("Install app"));
}

#[test]
fn paste_renders_plain_without_clipboard_support() {
    let h = harness(Arc::new(FailingStore), false);
    let backend = TestBackend::new(100, 30);
    let mut term = Terminal::new(backend).unwrap();

    term.draw(|f| ui::ui(f, &h.app)).unwrap();

    let text = screen_text(&mut term);
    assert!(text.contains("Drop OR Paste"));
    assert!(!text.contains("[ Paste (p) ]"));
}

#[test]
fn install_banner_appears_with_the_signal() {
    let mut h = harness(Arc::new(FailingStore), true);
    let (prompt, _probe) = make_prompt();
    h.app
        .handle_event(IntroEvent::Install(InstallSignal::PromptAvailable(prompt)));

    let backend = TestBackend::new(100, 30);
    let mut term = Terminal::new(backend).unwrap();
    term.draw(|f| ui::ui(f, &h.app)).unwrap();

    let text = screen_text(&mut term);
    assert!(text.contains("[ Install app (i) ]"), "missing banner:\n{text}");
}

#[test]
fn fetching_demo_shows_spinner_cell() {
    let mut h = harness(Arc::new(FailingStore), true);
    h.app.trigger_demo(1);

    let backend = TestBackend::new(100, 30);
    let mut term = Terminal::new(backend).unwrap();
    term.draw(|f| ui::ui(f, &h.app)).unwrap();

    let text = screen_text(&mut term);
    assert!(text.contains("fetching..."), "missing spinner cell:\n{text}");
    // The fetching cell replaces its description.
    assert!(!text.contains("Artwork (2.9mb)"));
}

#[test]
fn path_modal_and_snackbar_overlay_render() {
    let mut h = harness(Arc::new(FailingStore), true);
    h.app.mode = Mode::PathInput {
        buffer: "/tmp/cat.png".to_string(),
    };
    h.app.show_snack("Couldn't open file");

    let backend = TestBackend::new(100, 30);
    let mut term = Terminal::new(backend).unwrap();
    term.draw(|f| ui::ui(f, &h.app)).unwrap();

    let text = screen_text(&mut term);
    assert!(text.contains("Open image path"));
    assert!(text.contains("/tmp/cat.png"));
    assert!(text.contains("Couldn't open file"));
}
