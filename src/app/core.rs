use std::path::Path;
use std::sync::mpsc::Sender;
use std::sync::Arc;
use std::time::Instant;

use crate::intro::clipboard::{extract_image, ClipboardSource, SystemClipboard};
use crate::intro::demo::{guess_mime, AssetStore, DemoFetcher, DEMOS};
use crate::intro::install::InstallLifecycle;
use crate::intro::telemetry::TelemetrySink;
use crate::intro::visual::VisualCoordinator;
use crate::platform::InstallSignal;

use super::settings::Settings;
use super::types::{Focus, ImageFile, IntroEvent, Mode, Snackbar};

/// Seconds of animation time per event-loop tick (the loop polls at 100ms).
const TICK_SECONDS: f64 = 0.1;

const SPINNER: [char; 4] = ['|', '/', '-', '\\'];

/// File-delivery callback: the image pipeline takes ownership from here.
pub type OnFile = Box<dyn FnMut(ImageFile)>;

/// Capabilities and preferences sampled once at startup.
pub struct AppConfig {
    pub settings: Settings,
    /// False in a prerender/non-tty context; gates animation and input.
    pub interactive: bool,
    pub clipboard_supported: bool,
}

/// Composition root for the intro screen. Owns every piece of screen state;
/// all mutation happens on the event-loop thread.
pub struct App {
    pub mode: Mode,
    pub focus: Focus,
    pub settings: Settings,
    pub install: InstallLifecycle,
    pub fetcher: DemoFetcher,
    pub visual: VisualCoordinator,
    pub snackbar: Snackbar,
    /// Terminal focus; the "page visibility" of this screen.
    pub visible: bool,
    pub clipboard_supported: bool,
    pub should_quit: bool,
    tick: u64,
    events_tx: Sender<IntroEvent>,
    store: Arc<dyn AssetStore + Send + Sync>,
    on_file: OnFile,
    telemetry: Box<dyn TelemetrySink>,
}

impl App {
    pub fn new(
        config: AppConfig,
        store: Arc<dyn AssetStore + Send + Sync>,
        events_tx: Sender<IntroEvent>,
        on_file: OnFile,
        telemetry: Box<dyn TelemetrySink>,
    ) -> Self {
        let visual = VisualCoordinator::new(config.interactive, config.settings.reduced_motion);
        App {
            mode: Mode::Intro,
            focus: Focus::Open,
            settings: config.settings,
            install: InstallLifecycle::new(),
            fetcher: DemoFetcher::new(),
            visual,
            snackbar: Snackbar::default(),
            visible: true,
            clipboard_supported: config.clipboard_supported,
            should_quit: false,
            tick: 0,
            events_tx,
            store,
            on_file,
            telemetry,
        }
    }

    /// One-time mount work: kick off the animation load (a no-op when the
    /// visual coordinator is suppressed).
    pub fn mount(&mut self) {
        self.visual.start_load(self.events_tx.clone());
    }

    pub fn show_snack<S: Into<String>>(&mut self, message: S) {
        self.snackbar.show(message);
    }

    /// Hand a file to the surrounding app. Every acquisition path funnels
    /// through here, once per success.
    fn deliver_file(&mut self, file: ImageFile) {
        tracing::info!(name = %file.name, bytes = file.bytes.len(), "image selected");
        (self.on_file)(file);
    }

    /// The "file picker" result: read the typed/dropped path and deliver it.
    pub fn open_path(&mut self, raw: &str) {
        // Dropped paths often arrive quoted by the terminal.
        let trimmed = raw.trim().trim_matches(|c| c == '\'' || c == '"');
        if trimmed.is_empty() {
            return;
        }
        match std::fs::read(trimmed) {
            Ok(bytes) => {
                let name = Path::new(trimmed)
                    .file_name()
                    .map(|n| n.to_string_lossy().into_owned())
                    .unwrap_or_else(|| trimmed.to_string());
                let content_type = guess_mime(trimmed).map(|m| m.to_string());
                self.deliver_file(ImageFile {
                    name,
                    bytes,
                    content_type,
                });
            }
            Err(e) => {
                tracing::warn!("failed to open {trimmed}: {e}");
                self.show_snack("Couldn't open file");
            }
        }
    }

    /// Paste an image from the OS clipboard.
    pub fn paste_clipboard(&mut self) {
        if !self.clipboard_supported {
            return;
        }
        match SystemClipboard::new() {
            Ok(mut clipboard) => self.paste_from_source(&mut clipboard),
            Err(e) => {
                tracing::warn!("clipboard open failed: {e}");
                self.show_snack("No permission to access clipboard");
            }
        }
    }

    /// Clipboard paste against any source; tests script the source.
    pub fn paste_from_source<S: ClipboardSource>(&mut self, source: &mut S) {
        let items = match source.read_items() {
            Ok(items) => items,
            Err(e) => {
                tracing::warn!("clipboard read failed: {e}");
                self.show_snack("No permission to access clipboard");
                return;
            }
        };
        match extract_image(&items) {
            Some(payload) => self.deliver_file(ImageFile {
                name: "image.unknown".to_string(),
                bytes: payload.bytes,
                content_type: Some(payload.content_type),
            }),
            None => self.show_snack("No image found in the clipboard"),
        }
    }

    /// Start fetching a demo image, unless one is already in flight.
    pub fn trigger_demo(&mut self, index: usize) {
        self.fetcher
            .begin(index, self.store.clone(), self.events_tx.clone());
    }

    /// Fold an asynchronous completion into screen state.
    pub fn handle_event(&mut self, event: IntroEvent) {
        match event {
            IntroEvent::DemoFetched { index, result } => {
                match self.fetcher.complete(index, result) {
                    Some(Ok(file)) => self.deliver_file(file),
                    Some(Err(e)) => {
                        tracing::warn!("demo fetch failed: {e}");
                        self.show_snack("Couldn't fetch demo image");
                    }
                    None => {}
                }
            }
            IntroEvent::AnimReady(anim) => self.visual.on_anim_ready(anim),
            IntroEvent::Install(InstallSignal::PromptAvailable(prompt)) => {
                self.install
                    .on_prompt_available(prompt, self.telemetry.as_mut());
            }
            IntroEvent::Install(InstallSignal::Installed) => {
                self.install
                    .on_installed(self.visible, self.telemetry.as_mut());
                self.normalize_focus();
            }
        }
    }

    /// Per-tick upkeep: animation clock, pending install outcome, snackbar.
    pub fn on_tick(&mut self) {
        self.tick = self.tick.wrapping_add(1);
        self.visual.tick(TICK_SECONDS);
        self.install.poll_outcome(self.telemetry.as_mut());
        self.snackbar.prune(Instant::now());
    }

    pub fn spinner(&self) -> char {
        SPINNER[(self.tick / 2) as usize % SPINNER.len()]
    }

    /// Activate whatever control has focus.
    pub fn activate_focused(&mut self) {
        match self.focus {
            Focus::Open => {
                self.mode = Mode::PathInput {
                    buffer: String::new(),
                }
            }
            Focus::Paste => self.paste_clipboard(),
            Focus::Demo(i) => {
                // The strip is disabled while a fetch is in flight; the
                // fetcher guards against overlap regardless.
                if !self.fetcher.is_fetching() {
                    self.trigger_demo(i);
                }
            }
            Focus::Install => self.install.on_install_activated(),
        }
    }

    /// The cycle of focusable controls in screen order. Paste is skipped when
    /// the clipboard is unavailable; Install only exists while promptable.
    fn focus_ring(&self) -> Vec<Focus> {
        let mut ring = vec![Focus::Open];
        if self.clipboard_supported {
            ring.push(Focus::Paste);
        }
        for i in 0..DEMOS.len() {
            ring.push(Focus::Demo(i));
        }
        if self.install.shows_button() {
            ring.push(Focus::Install);
        }
        ring
    }

    pub fn focus_next(&mut self) {
        let ring = self.focus_ring();
        let at = ring.iter().position(|f| *f == self.focus).unwrap_or(0);
        self.focus = ring[(at + 1) % ring.len()];
    }

    pub fn focus_prev(&mut self) {
        let ring = self.focus_ring();
        let at = ring.iter().position(|f| *f == self.focus).unwrap_or(0);
        self.focus = ring[(at + ring.len() - 1) % ring.len()];
    }

    /// Snap focus back into the ring after a control disappeared.
    fn normalize_focus(&mut self) {
        if !self.focus_ring().contains(&self.focus) {
            self.focus = Focus::Open;
        }
    }
}
