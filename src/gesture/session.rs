//! Mouse session — owns all per-session pipeline state and processes one
//! frame at a time.
//!
//! Combines the pause controller, fingertip trail, debounce timers, pointer
//! mapper, and classifier behind a single `process` entry point, so several
//! independent sessions can run side by side (and in tests) without any
//! process-wide state.

use super::classifier::{classify, ClassifierConfig, GestureEvent};
use super::debounce::DebounceBank;
use super::hand::{HandFrame, HandLandmark};
use super::pause::PauseController;
use super::pointer::{PointerConfig, PointerMapper};
use super::trail::TrailBuffer;

/// All mutable state for one gesture-recognition session.
pub struct MouseSession {
    /// Classifier thresholds and cooldowns.
    pub config: ClassifierConfig,
    /// Active-rectangle mapper with EMA state.
    pub pointer: PointerMapper,
    /// Fist-hold pause toggle.
    pub pause: PauseController,
    /// Recent index-tip samples.
    pub trail: TrailBuffer,
    /// Per-category debounce timers.
    pub timers: DebounceBank,
    /// Frames processed so far (all frames, including no-hand and paused).
    frames: u64,
}

impl MouseSession {
    /// Create a session mapping onto a `screen_width` x `screen_height`
    /// screen.
    pub fn new(
        pointer_config: PointerConfig,
        config: ClassifierConfig,
        screen_width: f32,
        screen_height: f32,
    ) -> Self {
        Self {
            config,
            pointer: PointerMapper::new(pointer_config, screen_width, screen_height),
            pause: PauseController::new(),
            trail: TrailBuffer::new(),
            timers: DebounceBank::new(),
            frames: 0,
        }
    }

    /// Process one frame.  `hand` is None when the detector saw no hand; the
    /// classifier and mapper are skipped entirely for such frames (pause
    /// state, including a partial fist hold, is left untouched).
    ///
    /// Returns the frame's events in dispatch order: pause toggle first, then
    /// move, clicks, swipe, scroll.
    pub fn process(&mut self, hand: Option<&HandFrame>, now: f64) -> Vec<GestureEvent> {
        self.frames += 1;

        let Some(frame) = hand else {
            return Vec::new();
        };

        let mut events = Vec::new();
        if let Some(paused) = self.pause.update(&frame.fingers, now) {
            events.push(GestureEvent::PauseToggle { paused });
        }
        if self.pause.is_paused() {
            // Only the fist check runs while paused.
            return events;
        }

        if let Some(tip) = frame.landmark(HandLandmark::IndexTip) {
            self.trail.push(tip.x, tip.y, now);
        }

        events.extend(classify(
            &self.config,
            frame,
            self.trail.displacement(),
            &mut self.timers,
            &mut self.pointer,
            now,
        ));
        events
    }

    pub fn is_paused(&self) -> bool {
        self.pause.is_paused()
    }

    pub fn frames_processed(&self) -> u64 {
        self.frames
    }

    /// Diagnostic s-expression describing the session state.
    pub fn status_sexp(&self) -> String {
        let (w, h) = self.pointer.screen_size();
        format!(
            "(:paused {} :frames {} :trail-len {} :screen ({:.0} {:.0}))",
            if self.pause.is_paused() { "t" } else { "nil" },
            self.frames,
            self.trail.len(),
            w,
            h,
        )
    }
}

// ── Tests ──────────────────────────────────────────────────

#[cfg(test)]
mod tests {
    use super::*;
    use crate::gesture::hand::{FingerVector, Point};

    fn session() -> MouseSession {
        MouseSession::new(
            PointerConfig::default(),
            ClassifierConfig::default(),
            1920.0,
            1080.0,
        )
    }

    fn index_frame(x: f32, y: f32) -> HandFrame {
        let mut frame = HandFrame::new(FingerVector([false, true, false, false, false]));
        frame.set_landmark(HandLandmark::IndexTip, Point::new(x, y));
        frame
    }

    #[test]
    fn test_no_hand_frame_produces_nothing() {
        let mut s = session();
        assert!(s.process(None, 0.0).is_empty());
        assert_eq!(s.frames_processed(), 1);
    }

    #[test]
    fn test_move_stream_smooths_and_mirrors() {
        // Scenario: index finger moving (150,150) -> (160,155) over 10 frames
        // in a 480x360 frame with margin 100.
        let mut s = session();
        let mut xs = Vec::new();
        for i in 0..10 {
            let t = i as f64 / 30.0;
            let fx = 150.0 + i as f32 * (10.0 / 9.0);
            let fy = 150.0 + i as f32 * (5.0 / 9.0);
            let events = s.process(Some(&index_frame(fx, fy)), t);
            let moves: Vec<_> = events
                .iter()
                .filter_map(|e| match e {
                    GestureEvent::Move { x, y } => Some((*x, *y)),
                    _ => None,
                })
                .collect();
            assert_eq!(moves.len(), 1, "frame {} should emit one move", i);
            xs.push(moves[0].0);
        }
        // The unsmoothed targets sit left of screen center; mirrored output
        // therefore approaches from the right and decreases as the smoothed
        // coordinate converges upward.
        for pair in xs.windows(2) {
            assert!(pair[1] < pair[0], "mirrored X should decrease: {:?}", xs);
        }
    }

    #[test]
    fn test_paused_session_skips_classification() {
        let mut s = session();

        // Hold a fist to pause.
        s.process(Some(&HandFrame::new(FingerVector::fist())), 0.0);
        let events = s.process(Some(&HandFrame::new(FingerVector::fist())), 0.4);
        assert!(
            matches!(events.as_slice(), [GestureEvent::PauseToggle { paused: true }]),
            "hold should toggle to paused, got {:?}",
            events,
        );
        assert!(s.is_paused());

        // Pointer frames are ignored while paused.
        let events = s.process(Some(&index_frame(240.0, 180.0)), 0.6);
        assert!(events.is_empty(), "paused session classified {:?}", events);
        assert_eq!(s.trail.len(), 0, "paused frames must not feed the trail");

        // Resume with a second hold.
        s.process(Some(&HandFrame::new(FingerVector::fist())), 1.0);
        let events = s.process(Some(&HandFrame::new(FingerVector::fist())), 1.4);
        assert!(
            matches!(events.as_slice(), [GestureEvent::PauseToggle { paused: false }]),
            "second hold should resume, got {:?}",
            events,
        );
        assert!(!s.is_paused());
    }

    #[test]
    fn test_no_hand_frames_preserve_fist_hold() {
        // A lost hand mid-hold neither clears nor completes the hold.
        let mut s = session();
        s.process(Some(&HandFrame::new(FingerVector::fist())), 0.0);
        s.process(None, 0.2);
        let events = s.process(Some(&HandFrame::new(FingerVector::fist())), 0.4);
        assert!(
            matches!(events.as_slice(), [GestureEvent::PauseToggle { paused: true }]),
            "hold should survive a no-hand frame, got {:?}",
            events,
        );
    }

    #[test]
    fn test_open_palm_swipe_end_to_end() {
        // Open palm sweeping left fast enough to cross the swipe threshold.
        let mut s = session();
        let mut all_events = Vec::new();
        for i in 0..5 {
            let t = i as f64 / 30.0;
            let mut frame = HandFrame::new(FingerVector([true; 5]));
            frame.set_landmark(
                HandLandmark::IndexTip,
                Point::new(380.0 - i as f32 * 40.0, 180.0),
            );
            all_events.extend(s.process(Some(&frame), t));
        }
        let swipes = all_events
            .iter()
            .filter(|e| matches!(e, GestureEvent::SwipeLeft))
            .count();
        assert_eq!(swipes, 1, "exactly one swipe per hold, got {:?}", all_events);
        assert!(
            !all_events.iter().any(|e| matches!(e, GestureEvent::SwipeRight)),
            "leftward motion must never classify as SwipeRight",
        );
    }

    #[test]
    fn test_status_sexp() {
        let mut s = session();
        s.process(Some(&index_frame(240.0, 180.0)), 0.0);
        let sexp = s.status_sexp();
        assert!(sexp.contains(":paused nil"));
        assert!(sexp.contains(":frames 1"));
        assert!(sexp.contains(":trail-len 1"));
    }
}
