//! Pause/resume controller — a held fist toggles the whole pipeline between
//! ACTIVE and PAUSED.
//!
//! The toggle is edge-triggered: one flip per qualifying hold, no matter how
//! long the fist stays closed afterward.  While paused only this check keeps
//! running, so the user can always resume.

use tracing::{debug, info};

use super::hand::FingerVector;

/// Seconds a fist must be held continuously before the state flips.
pub const REST_TOGGLE_HOLD_S: f64 = 0.35;

/// Fist-hold pause toggle state machine.  Initial state is active.
#[derive(Debug)]
pub struct PauseController {
    /// Whether the pipeline is currently paused.
    paused: bool,
    /// When the current continuous fist hold started, if one is in progress.
    rest_since: Option<f64>,
    /// Set once a hold has toggled; cleared on fist release.  Prevents a
    /// continuously held fist from toggling more than once.
    toggled: bool,
    /// Hold threshold in seconds.
    pub hold_s: f64,
}

impl Default for PauseController {
    fn default() -> Self {
        Self {
            paused: false,
            rest_since: None,
            toggled: false,
            hold_s: REST_TOGGLE_HOLD_S,
        }
    }
}

impl PauseController {
    pub fn new() -> Self {
        Self::default()
    }

    /// Feed one frame's finger vector.  Returns the new paused state when a
    /// toggle fires this frame, None otherwise.
    ///
    /// Interruptions get no partial credit: any non-fist frame clears the
    /// hold start.  No-hand frames must not be fed here; the hold survives
    /// them (the caller skips this check entirely when no hand is seen).
    pub fn update(&mut self, fingers: &FingerVector, now: f64) -> Option<bool> {
        if !fingers.is_fist() {
            if self.rest_since.is_some() {
                debug!("fist released before hold threshold");
            }
            self.rest_since = None;
            self.toggled = false;
            return None;
        }

        if self.toggled {
            // Still holding the fist that already toggled.
            return None;
        }

        match self.rest_since {
            None => {
                self.rest_since = Some(now);
                None
            }
            Some(since) if now - since >= self.hold_s => {
                self.paused = !self.paused;
                self.rest_since = None;
                self.toggled = true;
                info!("{}", if self.paused { "paused" } else { "active" });
                Some(self.paused)
            }
            Some(_) => None,
        }
    }

    pub fn is_paused(&self) -> bool {
        self.paused
    }

    /// When the current fist hold started, if one is in progress.
    pub fn rest_since(&self) -> Option<f64> {
        self.rest_since
    }
}

// ── Tests ──────────────────────────────────────────────────
