//! Gesture classification — turns one frame's finger vector, key landmark
//! positions, and trail displacement into zero or more gesture events.
//!
//! The five checks are independent and run in a fixed order every active
//! frame; several events may fire together (a move-frame can also click).
//! Each event that consumes a debounce category marks that category's timer.

use tracing::debug;

use super::debounce::{ActionCategory, DebounceBank};
use super::hand::{distance, Finger, HandFrame, HandLandmark};
use super::pointer::PointerMapper;

// ── Events ─────────────────────────────────────────────────

/// A classified gesture for one frame.
#[derive(Debug, Clone, PartialEq)]
pub enum GestureEvent {
    /// Pointer move to a (possibly out-of-bounds, pre-clamp) screen position.
    Move { x: f32, y: f32 },
    LeftClick,
    DoubleClick,
    RightClick,
    SwipeLeft,
    SwipeRight,
    ScrollUp,
    ScrollDown,
    /// Pause state flipped; payload is the new paused flag.
    PauseToggle { paused: bool },
}

impl GestureEvent {
    /// String representation for logging.
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Move { .. } => "move",
            Self::LeftClick => "left-click",
            Self::DoubleClick => "double-click",
            Self::RightClick => "right-click",
            Self::SwipeLeft => "swipe-left",
            Self::SwipeRight => "swipe-right",
            Self::ScrollUp => "scroll-up",
            Self::ScrollDown => "scroll-down",
            Self::PauseToggle { .. } => "pause-toggle",
        }
    }

    /// Serialize the event as a diagnostic s-expression.
    pub fn to_sexp(&self) -> String {
        match self {
            Self::Move { x, y } => {
                format!("(:type :event :event :move :x {:.1} :y {:.1})", x, y)
            }
            Self::PauseToggle { paused } => {
                format!(
                    "(:type :event :event :pause-toggle :paused {})",
                    if *paused { "t" } else { "nil" }
                )
            }
            _ => format!("(:type :event :event :{})", self.as_str()),
        }
    }
}

// ── Config ─────────────────────────────────────────────────

/// Thresholds and cooldowns for gesture classification.
#[derive(Debug, Clone)]
pub struct ClassifierConfig {
    /// Index-middle tip distance below which a pinch is a left click (px).
    pub click_distance_px: f32,
    /// Index-middle tip distance above which a V-spread is a double click (px).
    pub double_click_distance_px: f32,
    /// Thumb-index tip distance below which a pinch is a right click (px).
    pub right_click_distance_px: f32,
    /// Minimum horizontal trail displacement for a swipe (px).
    pub swipe_threshold_px: f32,
    /// Minimum vertical trail displacement for a scroll (px).
    pub scroll_threshold_px: f32,
    /// Minimum interval between click-category events (s).
    pub click_debounce_s: f64,
    /// Minimum interval before another swipe may fire (s).
    pub swipe_cooldown_s: f64,
    /// Minimum interval before another scroll may fire (s).
    pub scroll_cooldown_s: f64,
}

impl Default for ClassifierConfig {
    fn default() -> Self {
        Self {
            click_distance_px: 35.0,
            double_click_distance_px: 60.0,
            right_click_distance_px: 30.0,
            swipe_threshold_px: 120.0,
            scroll_threshold_px: 80.0,
            click_debounce_s: 0.12,
            swipe_cooldown_s: 0.7,
            scroll_cooldown_s: 0.2,
        }
    }
}

// ── Classification ─────────────────────────────────────────

/// Classify one active (non-paused) frame.
///
/// Checks run in precedence order: move, click, right-click, swipe, scroll.
/// The click thresholds are disjoint (`click < double_click`); distances in
/// the dead zone between them fire nothing.  Swipe and scroll share the
/// Motion timer, so at most one of the two fires per cooldown window.
pub fn classify(
    config: &ClassifierConfig,
    frame: &HandFrame,
    displacement: Option<(f32, f32)>,
    timers: &mut DebounceBank,
    pointer: &mut PointerMapper,
    now: f64,
) -> Vec<GestureEvent> {
    let mut events = Vec::new();
    let fingers = &frame.fingers;

    // ── Move: index finger alone ──
    if fingers.index_only() {
        if let Some(tip) = frame.landmark(HandLandmark::IndexTip) {
            let (x, y) = pointer.map(tip.x, tip.y);
            events.push(GestureEvent::Move { x, y });
        }
    }

    // ── Click: index and middle extended ──
    if fingers.extended(Finger::Index) && fingers.extended(Finger::Middle) {
        if let (Some(index_tip), Some(middle_tip)) = (
            frame.landmark(HandLandmark::IndexTip),
            frame.landmark(HandLandmark::MiddleTip),
        ) {
            let d1 = distance(index_tip, middle_tip);
            if d1 < config.click_distance_px
                && timers.allow(ActionCategory::Click, now, config.click_debounce_s)
            {
                timers.mark(ActionCategory::Click, now);
                debug!("pinch {:.1}px -> left click", d1);
                events.push(GestureEvent::LeftClick);
            } else if d1 > config.double_click_distance_px
                && timers.allow(ActionCategory::Click, now, config.click_debounce_s)
            {
                timers.mark(ActionCategory::Click, now);
                debug!("V spread {:.1}px -> double click", d1);
                events.push(GestureEvent::DoubleClick);
            }
        }
    }

    // ── Right click: thumb and index extended ──
    if fingers.extended(Finger::Thumb) && fingers.extended(Finger::Index) {
        if let (Some(thumb_tip), Some(index_tip)) = (
            frame.landmark(HandLandmark::ThumbTip),
            frame.landmark(HandLandmark::IndexTip),
        ) {
            let d2 = distance(thumb_tip, index_tip);
            if d2 < config.right_click_distance_px
                && timers.allow(ActionCategory::Click, now, config.click_debounce_s)
            {
                timers.mark(ActionCategory::Click, now);
                debug!("thumb pinch {:.1}px -> right click", d2);
                events.push(GestureEvent::RightClick);
            }
        }
    }

    // ── Swipe: open palm, near-horizontal displacement ──
    if let Some((dx, dy)) = displacement {
        if fingers.all_extended()
            && timers.allow(ActionCategory::Motion, now, config.swipe_cooldown_s)
        {
            // Reject diagonal motion as ambiguous.
            let near_horizontal = dy.abs() < config.swipe_threshold_px / 2.0;
            if dx <= -config.swipe_threshold_px && near_horizontal {
                timers.mark(ActionCategory::Motion, now);
                debug!("swipe left: dx={:.0} dy={:.0}", dx, dy);
                events.push(GestureEvent::SwipeLeft);
            } else if dx >= config.swipe_threshold_px && near_horizontal {
                timers.mark(ActionCategory::Motion, now);
                debug!("swipe right: dx={:.0} dy={:.0}", dx, dy);
                events.push(GestureEvent::SwipeRight);
            }
        }

        // ── Scroll: open palm, or index with at most one companion ──
        let scroll_pose = fingers.all_extended()
            || (fingers.extended(Finger::Index) && fingers.extended_count() <= 2);
        if scroll_pose && timers.allow(ActionCategory::Motion, now, config.scroll_cooldown_s) {
            if dy <= -config.scroll_threshold_px {
                timers.mark(ActionCategory::Motion, now);
                debug!("scroll up: dy={:.0}", dy);
                events.push(GestureEvent::ScrollUp);
            } else if dy >= config.scroll_threshold_px {
                timers.mark(ActionCategory::Motion, now);
                debug!("scroll down: dy={:.0}", dy);
                events.push(GestureEvent::ScrollDown);
            }
        }
    }

    events
}

// ── Tests ──────────────────────────────────────────────────
