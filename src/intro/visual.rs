//! Animated-to-static visual handoff.
//!
//! The screen boots showing static placeholder blobs. Unless animation is
//! suppressed (non-interactive render context, or the user prefers reduced
//! motion), the animated renderer is assembled on a worker thread and swapped
//! in atomically when ready, so the placeholder and the animation are never
//! both visible nor both absent.

use std::sync::mpsc::Sender;
use std::thread;

use crate::anim::BlobAnim;
use crate::app::types::IntroEvent;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum VisualMode {
    /// Static placeholder artwork.
    Placeholder,
    /// Canvas-driven animation.
    Animated,
}

pub struct VisualCoordinator {
    mode: VisualMode,
    suppressed: bool,
    load_started: bool,
    anim: Option<BlobAnim>,
}

impl VisualCoordinator {
    /// The gates are sampled once, at construction; they never change for the
    /// lifetime of the screen.
    pub fn new(interactive: bool, reduced_motion: bool) -> Self {
        VisualCoordinator {
            mode: VisualMode::Placeholder,
            suppressed: !interactive || reduced_motion,
            load_started: false,
            anim: None,
        }
    }

    pub fn mode(&self) -> VisualMode {
        self.mode
    }

    /// When suppressed the placeholder stays up forever and the animation is
    /// never even loaded.
    pub fn suppressed(&self) -> bool {
        self.suppressed
    }

    pub fn anim(&self) -> Option<&BlobAnim> {
        self.anim.as_ref()
    }

    /// Kick off the animation load, once, at mount. A no-op when suppressed
    /// or already started.
    pub fn start_load(&mut self, events: Sender<IntroEvent>) {
        if self.suppressed || self.load_started {
            return;
        }
        self.load_started = true;
        thread::spawn(move || {
            let anim = BlobAnim::build();
            if events.send(IntroEvent::AnimReady(anim)).is_err() {
                // Screen gone before the animation was ready: placeholder it is.
                tracing::debug!("blob animation ready after intro teardown");
            }
        });
    }

    /// Install the loaded renderer and flip the mode in one state update.
    /// Forward-only: a second ready event (or one arriving despite
    /// suppression) changes nothing.
    pub fn on_anim_ready(&mut self, anim: BlobAnim) {
        if self.suppressed || self.mode == VisualMode::Animated {
            return;
        }
        self.anim = Some(anim);
        self.mode = VisualMode::Animated;
    }

    /// Advance the animation clock; no-op until the handoff happened.
    pub fn tick(&mut self, dt: f64) {
        if let Some(anim) = &mut self.anim {
            anim.step(dt);
        }
    }
}
