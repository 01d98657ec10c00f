//! Install lifecycle manager.
//!
//! Holds the deferred install prompt as a tagged union so a consumed trigger
//! can never be fired twice, and attributes the eventual install to either
//! the in-page button or the platform's own chrome.

use crate::platform::{InstallPrompt, OutcomeWatcher, PromptOutcome};

use super::telemetry::{TelemetryEvent, TelemetrySink};

pub const TELEMETRY_CATEGORY: &str = "install";
/// Label identifying installs that went through the screen's own button.
pub const BUTTON_SOURCE: &str = "intro-install-button";
/// Label for installs performed entirely through the platform chrome.
pub const CHROME_SOURCE: &str = "browser";

/// Where the lifecycle currently stands.
///
/// `Accepted` is the window between the user accepting the prompt and the
/// platform confirming the install; acceptance alone is no guarantee the
/// OS-level install completes or is observable immediately.
#[derive(Debug)]
pub enum InstallStage {
    Idle,
    Promptable(InstallPrompt),
    Prompting(OutcomeWatcher),
    Accepted,
    Installed,
}

pub struct InstallLifecycle {
    stage: InstallStage,
    /// Whether the current flow was initiated by the in-page button. Lives
    /// here, not in a free-floating flag, so its lifetime is tied to the
    /// manager's.
    via_button: bool,
}

impl Default for InstallLifecycle {
    fn default() -> Self {
        Self::new()
    }
}

impl InstallLifecycle {
    pub fn new() -> Self {
        InstallLifecycle {
            stage: InstallStage::Idle,
            via_button: false,
        }
    }

    pub fn stage(&self) -> &InstallStage {
        &self.stage
    }

    /// Whether the in-page install control should be rendered: only between
    /// the availability signal and the installed signal.
    pub fn shows_button(&self) -> bool {
        matches!(
            self.stage,
            InstallStage::Promptable(_) | InstallStage::Prompting(_) | InstallStage::Accepted
        )
    }

    /// The platform signalled installability. The native banner suppression
    /// must happen here, synchronously, or the platform shows its own UI.
    pub fn on_prompt_available(&mut self, prompt: InstallPrompt, sink: &mut dyn TelemetrySink) {
        prompt.suppress_banner();
        self.stage = InstallStage::Promptable(prompt);
        sink.send(TelemetryEvent {
            category: TELEMETRY_CATEGORY,
            action: "promo-shown",
            label: None,
            value: None,
            non_interactive: true,
        });
    }

    /// The user activated the install control. With no deferred prompt held
    /// this is a guarded no-op: no telemetry, no state change.
    pub fn on_install_activated(&mut self) {
        match std::mem::replace(&mut self.stage, InstallStage::Idle) {
            InstallStage::Promptable(prompt) => {
                self.via_button = true;
                self.stage = InstallStage::Prompting(prompt.fire());
            }
            other => {
                tracing::debug!("install activated with no prompt held");
                self.stage = other;
            }
        }
    }

    /// Poll the pending prompt outcome; called once per event-loop tick.
    pub fn poll_outcome(&mut self, sink: &mut dyn TelemetrySink) {
        let outcome = match &self.stage {
            InstallStage::Prompting(watcher) => watcher.poll(),
            _ => None,
        };
        let Some(outcome) = outcome else { return };

        let accepted = outcome == PromptOutcome::Accepted;
        sink.send(TelemetryEvent {
            category: TELEMETRY_CATEGORY,
            action: "promo-clicked",
            label: Some(BUTTON_SOURCE),
            value: Some(if accepted { 1 } else { 0 }),
            non_interactive: false,
        });
        if accepted {
            // Attribution is kept until the installed signal arrives.
            self.stage = InstallStage::Accepted;
        } else {
            self.stage = InstallStage::Idle;
            self.via_button = false;
        }
    }

    /// The platform reported the app as installed. Can arrive in any stage,
    /// including with no prompt interaction at all. Telemetry is suppressed
    /// while the screen is not visible (such installs are unreliable to
    /// attribute), but the control is hidden and attribution cleared anyway.
    pub fn on_installed(&mut self, screen_visible: bool, sink: &mut dyn TelemetrySink) {
        self.stage = InstallStage::Installed;
        if screen_visible {
            let label = if self.via_button {
                BUTTON_SOURCE
            } else {
                CHROME_SOURCE
            };
            sink.send(TelemetryEvent {
                category: TELEMETRY_CATEGORY,
                action: "installed",
                label: Some(label),
                value: None,
                non_interactive: false,
            });
        }
        self.via_button = false;
    }
}
