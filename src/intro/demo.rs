//! Demo image catalog and the single-flight fetch controller.

use std::io::Read;
use std::sync::mpsc::Sender;
use std::sync::Arc;
use std::thread;

use crate::app::types::{ImageFile, IntroEvent};

use super::error::FetchError;

/// One entry in the built-in demo catalog. Static configuration data, fixed
/// at process start.
#[derive(Debug, Clone, Copy)]
pub struct DemoAsset {
    pub description: &'static str,
    /// Filename assigned to the produced file, regardless of the source URL.
    pub filename: &'static str,
    pub url: &'static str,
    pub icon_url: &'static str,
}

pub const DEMOS: [DemoAsset; 4] = [
    DemoAsset {
        description: "Large photo (2.8mb)",
        filename: "photo.jpg",
        url: "https://assets.piczoom.app/demos/demo-large-photo.jpg",
        icon_url: "https://assets.piczoom.app/demos/icon-demo-large-photo.jpg",
    },
    DemoAsset {
        description: "Artwork (2.9mb)",
        filename: "art.jpg",
        url: "https://assets.piczoom.app/demos/demo-artwork.jpg",
        icon_url: "https://assets.piczoom.app/demos/icon-demo-artwork.jpg",
    },
    DemoAsset {
        description: "Device screen (1.6mb)",
        filename: "pixel3.png",
        url: "https://assets.piczoom.app/demos/demo-device-screen.png",
        icon_url: "https://assets.piczoom.app/demos/icon-demo-device-screen.jpg",
    },
    DemoAsset {
        description: "SVG icon (13k)",
        filename: "piczoom.svg",
        url: "https://assets.piczoom.app/demos/logo.svg",
        icon_url: "https://assets.piczoom.app/demos/icon-demo-logo.png",
    },
];

/// Raw bytes of a fetched asset plus the content type the source reported.
#[derive(Debug, Clone)]
pub struct FetchedPayload {
    pub bytes: Vec<u8>,
    pub content_type: Option<String>,
}

/// Where demo assets come from. Injected so tests never touch the network.
pub trait AssetStore {
    fn fetch(&self, url: &str) -> Result<FetchedPayload, FetchError>;
}

/// Production store: HTTP(S) URLs through `ureq`, anything else is read as a
/// local path (useful for bundled assets and offline demos).
pub struct HttpStore;

impl AssetStore for HttpStore {
    fn fetch(&self, url: &str) -> Result<FetchedPayload, FetchError> {
        if url.starts_with("http://") || url.starts_with("https://") {
            let response = ureq::get(url)
                .call()
                .map_err(|e| FetchError::Http(e.to_string()))?;
            let content_type = Some(response.content_type().to_string());
            let mut bytes = Vec::new();
            response.into_reader().read_to_end(&mut bytes)?;
            Ok(FetchedPayload {
                bytes,
                content_type,
            })
        } else {
            let bytes = std::fs::read(url)?;
            Ok(FetchedPayload {
                bytes,
                content_type: guess_mime(url).map(|m| m.to_string()),
            })
        }
    }
}

/// Content type from a path extension, for local asset reads.
pub fn guess_mime(path: &str) -> Option<&'static str> {
    let ext = path.rsplit('.').next()?.to_ascii_lowercase();
    match ext.as_str() {
        "jpg" | "jpeg" => Some("image/jpeg"),
        "png" => Some("image/png"),
        "gif" => Some("image/gif"),
        "webp" => Some("image/webp"),
        "avif" => Some("image/avif"),
        "svg" => Some("image/svg+xml"),
        "bmp" => Some("image/bmp"),
        _ => None,
    }
}

/// Single-flight fetch controller: at most one demo download runs at a time.
///
/// The controller enforces the slot itself rather than trusting the UI to
/// disable triggers: a `begin` while a fetch is in flight is ignored, and a
/// completion for any index other than the in-flight one is dropped as stale.
pub struct DemoFetcher {
    in_flight: Option<usize>,
}

impl Default for DemoFetcher {
    fn default() -> Self {
        Self::new()
    }
}

impl DemoFetcher {
    pub fn new() -> Self {
        DemoFetcher { in_flight: None }
    }

    /// Index of the demo currently being fetched, if any.
    pub fn fetching(&self) -> Option<usize> {
        self.in_flight
    }

    pub fn is_fetching(&self) -> bool {
        self.in_flight.is_some()
    }

    /// Start fetching demo `index` on a worker thread; the result comes back
    /// to the event loop as [`IntroEvent::DemoFetched`]. Returns whether the
    /// fetch was actually started.
    pub fn begin(
        &mut self,
        index: usize,
        store: Arc<dyn AssetStore + Send + Sync>,
        events: Sender<IntroEvent>,
    ) -> bool {
        if let Some(busy) = self.in_flight {
            tracing::debug!("demo fetch {index} ignored, {busy} already in flight");
            return false;
        }
        let Some(demo) = DEMOS.get(index) else {
            tracing::warn!("demo fetch for unknown index {index}");
            return false;
        };
        self.in_flight = Some(index);
        let url = demo.url.to_string();
        thread::spawn(move || {
            let result = store.fetch(&url);
            if events.send(IntroEvent::DemoFetched { index, result }).is_err() {
                tracing::debug!("intro gone before demo {index} finished");
            }
        });
        true
    }

    /// Fold a completion event back into the controller. Clears the in-flight
    /// slot and returns the outcome the screen must act on (hand the file to
    /// the consumer, or report the failure); `None` means the completion was
    /// stale and nothing should happen.
    pub fn complete(
        &mut self,
        index: usize,
        result: Result<FetchedPayload, FetchError>,
    ) -> Option<Result<ImageFile, FetchError>> {
        if self.in_flight != Some(index) {
            tracing::debug!("stale demo completion for index {index}");
            return None;
        }
        self.in_flight = None;
        Some(result.map(|payload| ImageFile {
            name: DEMOS[index].filename.to_string(),
            bytes: payload.bytes,
            content_type: payload.content_type,
        }))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::sync::mpsc;
    use std::time::Duration;

    struct StaticStore(Vec<u8>);

    impl AssetStore for StaticStore {
        fn fetch(&self, _url: &str) -> Result<FetchedPayload, FetchError> {
            Ok(FetchedPayload {
                bytes: self.0.clone(),
                content_type: Some("image/jpeg".to_string()),
            })
        }
    }

    struct FailingStore;

    impl AssetStore for FailingStore {
        fn fetch(&self, url: &str) -> Result<FetchedPayload, FetchError> {
            Err(FetchError::Http(format!("unreachable: {url}")))
        }
    }

    fn recv(rx: &mpsc::Receiver<IntroEvent>) -> (usize, Result<FetchedPayload, FetchError>) {
        match rx.recv_timeout(Duration::from_secs(5)).unwrap() {
            IntroEvent::DemoFetched { index, result } => (index, result),
            other => panic!("unexpected event: {other:?}"),
        }
    }

    #[test]
    fn successful_fetch_yields_catalog_filename() {
        let (tx, rx) = mpsc::channel();
        let mut fetcher = DemoFetcher::new();
        assert!(fetcher.begin(1, Arc::new(StaticStore(vec![1, 2, 3])), tx));
        assert_eq!(fetcher.fetching(), Some(1));

        let (index, result) = recv(&rx);
        let file = fetcher.complete(index, result).unwrap().unwrap();
        assert_eq!(file.name, "art.jpg");
        assert_eq!(file.bytes, vec![1, 2, 3]);
        assert!(!fetcher.is_fetching());
    }

    #[test]
    fn failure_clears_slot_and_reports() {
        let (tx, rx) = mpsc::channel();
        let mut fetcher = DemoFetcher::new();
        assert!(fetcher.begin(2, Arc::new(FailingStore), tx));

        let (index, result) = recv(&rx);
        let outcome = fetcher.complete(index, result).unwrap();
        assert!(outcome.is_err());
        assert!(!fetcher.is_fetching());
    }

    #[test]
    fn overlapping_begin_is_ignored() {
        let (tx, rx) = mpsc::channel();
        let mut fetcher = DemoFetcher::new();
        assert!(fetcher.begin(0, Arc::new(StaticStore(vec![0])), tx.clone()));
        assert!(!fetcher.begin(3, Arc::new(StaticStore(vec![9])), tx));
        assert_eq!(fetcher.fetching(), Some(0));

        // Only the first fetch ever produces a completion.
        let (index, _) = recv(&rx);
        assert_eq!(index, 0);
        assert!(rx.recv_timeout(Duration::from_millis(200)).is_err());
    }

    #[test]
    fn stale_completion_is_dropped() {
        let mut fetcher = DemoFetcher::new();
        let stale = fetcher.complete(
            2,
            Ok(FetchedPayload {
                bytes: vec![],
                content_type: None,
            }),
        );
        assert!(stale.is_none());
        assert!(!fetcher.is_fetching());
    }

    #[test]
    fn out_of_range_index_is_rejected() {
        let (tx, _rx) = mpsc::channel();
        let mut fetcher = DemoFetcher::new();
        assert!(!fetcher.begin(DEMOS.len(), Arc::new(FailingStore), tx));
        assert!(!fetcher.is_fetching());
    }
}
