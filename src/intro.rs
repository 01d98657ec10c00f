//! The intro screen's interaction state machines: clipboard extraction, the
//! single-flight demo fetch, the install lifecycle and the visual handoff.

pub mod clipboard;
pub mod demo;
pub mod error;
pub mod install;
pub mod telemetry;
pub mod visual;

pub use clipboard::{extract_image, ClipboardItem, ClipboardSource, SystemClipboard};
pub use demo::{AssetStore, DemoAsset, DemoFetcher, HttpStore, DEMOS};
pub use error::{ClipboardError, FetchError};
pub use install::{InstallLifecycle, InstallStage};
pub use telemetry::{LogSink, TelemetryEvent, TelemetrySink};
pub use visual::{VisualCoordinator, VisualMode};
