// Shared fakes for the integration tests: scripted asset stores, a scripted
// clipboard, a recording telemetry sink and an app harness wired to them.
#![allow(dead_code)]

use std::cell::RefCell;
use std::rc::Rc;
use std::sync::atomic::AtomicBool;
use std::sync::mpsc::{self, Receiver, Sender};
use std::sync::Arc;
use std::time::Duration;

use picZoom::app::settings::Settings;
use picZoom::app::{App, AppConfig, ImageFile, IntroEvent};
use picZoom::intro::clipboard::{ClipboardItem, ClipboardSource};
use picZoom::intro::demo::{AssetStore, FetchedPayload};
use picZoom::intro::error::{ClipboardError, FetchError};
use picZoom::intro::telemetry::{TelemetryEvent, TelemetrySink};
use picZoom::platform::{InstallPrompt, PromptOutcome};

pub struct SharedSink(pub Rc<RefCell<Vec<TelemetryEvent>>>);

impl TelemetrySink for SharedSink {
    fn send(&mut self, event: TelemetryEvent) {
        self.0.borrow_mut().push(event);
    }
}

pub struct StaticStore {
    pub bytes: Vec<u8>,
    pub content_type: &'static str,
}

impl AssetStore for StaticStore {
    fn fetch(&self, _url: &str) -> Result<FetchedPayload, FetchError> {
        Ok(FetchedPayload {
            bytes: self.bytes.clone(),
            content_type: Some(self.content_type.to_string()),
        })
    }
}

pub struct FailingStore;

impl AssetStore for FailingStore {
    fn fetch(&self, url: &str) -> Result<FetchedPayload, FetchError> {
        Err(FetchError::Http(format!("scripted failure for {url}")))
    }
}

pub struct ScriptedItem {
    types: Vec<String>,
    bytes: Option<Vec<u8>>,
}

impl ScriptedItem {
    pub fn new(types: &[&str], bytes: Option<&[u8]>) -> Self {
        ScriptedItem {
            types: types.iter().map(|t| t.to_string()).collect(),
            bytes: bytes.map(|b| b.to_vec()),
        }
    }
}

impl ClipboardItem for ScriptedItem {
    fn content_types(&self) -> &[String] {
        &self.types
    }

    fn payload(&self, _content_type: &str) -> Option<Vec<u8>> {
        self.bytes.clone()
    }
}

/// A clipboard that serves scripted items, or denies access outright.
pub enum ScriptedClipboard {
    Items(Vec<ScriptedItem>),
    Denied,
}

impl ClipboardSource for ScriptedClipboard {
    type Item = ScriptedItem;

    fn read_items(&mut self) -> Result<Vec<ScriptedItem>, ClipboardError> {
        match self {
            ScriptedClipboard::Items(items) => Ok(std::mem::take(items)),
            ScriptedClipboard::Denied => {
                Err(ClipboardError::Read("permission denied".to_string()))
            }
        }
    }
}

pub struct PromptProbe {
    pub suppressed: Arc<AtomicBool>,
    pub fired: Arc<AtomicBool>,
    pub outcome_tx: Sender<PromptOutcome>,
}

pub fn make_prompt() -> (InstallPrompt, PromptProbe) {
    use std::sync::atomic::Ordering;

    let suppressed = Arc::new(AtomicBool::new(false));
    let fired = Arc::new(AtomicBool::new(false));
    let (outcome_tx, outcome_rx) = mpsc::channel();
    let fired2 = fired.clone();
    let prompt = InstallPrompt::new(
        suppressed.clone(),
        Box::new(move || fired2.store(true, Ordering::SeqCst)),
        outcome_rx,
    );
    (
        prompt,
        PromptProbe {
            suppressed,
            fired,
            outcome_tx,
        },
    )
}

pub struct Harness {
    pub app: App,
    pub events_rx: Receiver<IntroEvent>,
    pub files: Rc<RefCell<Vec<ImageFile>>>,
    pub telemetry: Rc<RefCell<Vec<TelemetryEvent>>>,
}

impl Harness {
    /// Block on the next worker message and fold it into the app, the way
    /// the event loop would.
    pub fn pump_one(&mut self) {
        let event = self
            .events_rx
            .recv_timeout(Duration::from_secs(5))
            .expect("worker event");
        self.app.handle_event(event);
    }
}

pub fn harness(store: Arc<dyn AssetStore + Send + Sync>, clipboard_supported: bool) -> Harness {
    let (events_tx, events_rx) = mpsc::channel();
    let files: Rc<RefCell<Vec<ImageFile>>> = Rc::default();
    let files2 = files.clone();
    let telemetry: Rc<RefCell<Vec<TelemetryEvent>>> = Rc::default();

    let app = App::new(
        AppConfig {
            settings: Settings::default(),
            interactive: false,
            clipboard_supported,
        },
        store,
        events_tx,
        Box::new(move |file| files2.borrow_mut().push(file)),
        Box::new(SharedSink(telemetry.clone())),
    );
    Harness {
        app,
        events_rx,
        files,
        telemetry,
    }
}
