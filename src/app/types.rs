use std::collections::VecDeque;
use std::time::{Duration, Instant};

use crate::anim::BlobAnim;
use crate::intro::demo::FetchedPayload;
use crate::intro::error::FetchError;
use crate::platform::InstallSignal;

/// A file-like value handed to the image pipeline: bytes plus the name the
/// rest of the app should treat the image as having.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ImageFile {
    pub name: String,
    pub bytes: Vec<u8>,
    pub content_type: Option<String>,
}

/// Which interaction mode the screen is in.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Mode {
    /// Normal intro handling.
    Intro,
    /// The "file picker": a path entry modal.
    PathInput { buffer: String },
}

/// Which intro control currently has keyboard focus.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Focus {
    Open,
    Paste,
    Demo(usize),
    Install,
}

/// Asynchronous completions delivered to the event loop over the intro's
/// mpsc channel. Everything is owned data; producers are worker threads.
#[derive(Debug)]
pub enum IntroEvent {
    DemoFetched {
        index: usize,
        result: Result<FetchedPayload, FetchError>,
    },
    AnimReady(BlobAnim),
    Install(InstallSignal),
}

/// How long a snack stays visible.
const SNACK_TTL: Duration = Duration::from_secs(4);

/// Fire-and-forget notification surface state. Messages queue and expire.
#[derive(Debug, Default)]
pub struct Snackbar {
    queue: VecDeque<(String, Instant)>,
}

impl Snackbar {
    pub fn show<S: Into<String>>(&mut self, message: S) {
        self.queue
            .push_back((message.into(), Instant::now() + SNACK_TTL));
    }

    /// The message currently on screen, if any.
    pub fn current(&self) -> Option<&str> {
        self.queue.front().map(|(m, _)| m.as_str())
    }

    /// Drop expired messages; called once per tick.
    pub fn prune(&mut self, now: Instant) {
        while matches!(self.queue.front(), Some((_, deadline)) if *deadline <= now) {
            self.queue.pop_front();
        }
    }

    pub fn len(&self) -> usize {
        self.queue.len()
    }

    pub fn is_empty(&self) -> bool {
        self.queue.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn snackbar_queues_and_expires() {
        let mut bar = Snackbar::default();
        assert!(bar.current().is_none());
        bar.show("first");
        bar.show("second");
        assert_eq!(bar.current(), Some("first"));
        assert_eq!(bar.len(), 2);

        bar.prune(Instant::now());
        assert_eq!(bar.current(), Some("first"));

        bar.prune(Instant::now() + SNACK_TTL + Duration::from_millis(1));
        assert!(bar.is_empty());
    }
}
