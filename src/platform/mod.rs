//! Platform install signals.
//!
//! The surrounding platform (store front, package manager, browser chrome in
//! the original web incarnation) decides when the app is installable and
//! hands the screen a deferred, one-shot prompt. The screen only ever sees
//! the channel of [`InstallSignal`]s plus the [`InstallPrompt`] handle, so a
//! platform that never signals simply never makes the screen installable.

use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::mpsc::{self, Receiver, Sender, TryRecvError};
use std::sync::Arc;
use std::thread;
use std::time::Duration;

/// How the user answered the native install prompt.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PromptOutcome {
    Accepted,
    Dismissed,
}

/// Signals delivered by the platform while the intro screen is mounted.
#[derive(Debug)]
pub enum InstallSignal {
    /// The app became installable; carries the deferred prompt handle.
    PromptAvailable(InstallPrompt),
    /// The app was installed, by whatever means (may arrive without any
    /// preceding prompt interaction).
    Installed,
}

/// Deferred, single-use "show the native install prompt" capability.
///
/// The trigger is consumed by [`InstallPrompt::fire`], so a stale handle can
/// never re-show the prompt. The native banner suppression must happen
/// synchronously inside the availability signal handler, before the platform
/// gets a chance to show its own UI.
pub struct InstallPrompt {
    banner_suppressed: Arc<AtomicBool>,
    trigger: Box<dyn FnOnce() + Send>,
    outcome: Receiver<PromptOutcome>,
}

impl InstallPrompt {
    pub fn new(
        banner_suppressed: Arc<AtomicBool>,
        trigger: Box<dyn FnOnce() + Send>,
        outcome: Receiver<PromptOutcome>,
    ) -> Self {
        InstallPrompt {
            banner_suppressed,
            trigger,
            outcome,
        }
    }

    /// Tell the platform not to show its own install banner for this signal.
    pub fn suppress_banner(&self) {
        self.banner_suppressed.store(true, Ordering::SeqCst);
    }

    /// Show the native prompt. Consumes the handle; the returned watcher
    /// resolves to the user's decision, eventually.
    pub fn fire(self) -> OutcomeWatcher {
        (self.trigger)();
        OutcomeWatcher { rx: self.outcome }
    }
}

impl std::fmt::Debug for InstallPrompt {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("InstallPrompt")
            .field(
                "banner_suppressed",
                &self.banner_suppressed.load(Ordering::SeqCst),
            )
            .finish_non_exhaustive()
    }
}

/// Pending user decision for a fired prompt. Polled from the event loop;
/// there is no timeout, a user who never decides leaves this pending forever.
#[derive(Debug)]
pub struct OutcomeWatcher {
    rx: Receiver<PromptOutcome>,
}

impl OutcomeWatcher {
    pub fn poll(&self) -> Option<PromptOutcome> {
        match self.rx.try_recv() {
            Ok(outcome) => Some(outcome),
            Err(TryRecvError::Empty) | Err(TryRecvError::Disconnected) => None,
        }
    }
}

/// A platform that never signals installability. The receiver reports
/// disconnection immediately, which the event loop treats as "no signal".
pub fn null_platform() -> Receiver<InstallSignal> {
    let (_tx, rx) = mpsc::channel::<InstallSignal>();
    rx
}

/// Scripted platform used by the `--simulate-install` flag: offers a prompt
/// shortly after startup, resolves it a beat after it is fired, and (when
/// accepting) follows up with the installed signal. Timings are arbitrary but
/// long enough to watch the button appear and react.
pub fn simulated_platform(accept: bool) -> Receiver<InstallSignal> {
    let (sig_tx, sig_rx) = mpsc::channel();
    thread::spawn(move || {
        thread::sleep(Duration::from_millis(1500));
        let (out_tx, out_rx) = mpsc::channel();
        let banner = Arc::new(AtomicBool::new(false));
        let installed_tx: Sender<InstallSignal> = sig_tx.clone();
        let trigger = Box::new(move || {
            // The "user" decides off-thread, like a real native dialog.
            thread::spawn(move || {
                thread::sleep(Duration::from_millis(1200));
                let outcome = if accept {
                    PromptOutcome::Accepted
                } else {
                    PromptOutcome::Dismissed
                };
                if out_tx.send(outcome).is_err() {
                    tracing::debug!("simulated prompt outcome dropped, screen gone");
                    return;
                }
                if accept {
                    thread::sleep(Duration::from_millis(800));
                    let _ = installed_tx.send(InstallSignal::Installed);
                }
            });
        });
        let prompt = InstallPrompt::new(banner, trigger, out_rx);
        if sig_tx.send(InstallSignal::PromptAvailable(prompt)).is_err() {
            tracing::debug!("simulated install signal dropped, screen gone");
        }
    });
    sig_rx
}
