//! Debounce timers — last-trigger timestamps per action category.
//!
//! Landmark jitter produces several frames inside one physical gesture; the
//! timer bank makes sure each gesture category fires at most once per
//! cooldown window.  Swipe and scroll share the single Motion category, so
//! at most one of the two fires per window.

// ── Categories ─────────────────────────────────────────────

/// Action category gated by its own timer.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ActionCategory {
    /// Left, double, and right clicks.
    Click,
    /// Swipes and scrolls (shared timer family).
    Motion,
}

impl ActionCategory {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Click => "click",
            Self::Motion => "motion",
        }
    }
}

// ── Timer bank ─────────────────────────────────────────────

/// Last-trigger timestamp per category.  A category that has never fired
/// allows its first qualifying attempt unconditionally.
#[derive(Debug, Default)]
pub struct DebounceBank {
    last_click_s: Option<f64>,
    last_motion_s: Option<f64>,
}

impl DebounceBank {
    pub fn new() -> Self {
        Self::default()
    }

    /// Last trigger time for a category, if it has ever fired.
    pub fn last(&self, category: ActionCategory) -> Option<f64> {
        match category {
            ActionCategory::Click => self.last_click_s,
            ActionCategory::Motion => self.last_motion_s,
        }
    }

    /// Whether an action in `category` may fire at `now` given the category's
    /// minimum interval.  On a true result the caller must `mark` the
    /// category if the action actually fires.
    pub fn allow(&self, category: ActionCategory, now: f64, min_interval_s: f64) -> bool {
        match self.last(category) {
            None => true,
            Some(last) => now - last >= min_interval_s,
        }
    }

    /// Record a trigger at `now`.  Timers only move forward.
    pub fn mark(&mut self, category: ActionCategory, now: f64) {
        let slot = match category {
            ActionCategory::Click => &mut self.last_click_s,
            ActionCategory::Motion => &mut self.last_motion_s,
        };
        *slot = Some(match *slot {
            Some(last) if last > now => last,
            _ => now,
        });
    }
}

// ── Tests ──────────────────────────────────────────────────

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_first_attempt_allowed() {
        let bank = DebounceBank::new();
        assert!(bank.allow(ActionCategory::Click, 0.0, 0.12));
        assert!(bank.allow(ActionCategory::Motion, 0.0, 0.7));
    }

    #[test]
    fn test_debounce_window() {
        let mut bank = DebounceBank::new();
        bank.mark(ActionCategory::Click, 1.0);

        // Within the window: rejected.
        assert!(!bank.allow(ActionCategory::Click, 1.05, 0.12));
        // At the boundary: allowed (>= semantics).
        assert!(bank.allow(ActionCategory::Click, 1.12, 0.12));
        assert!(bank.allow(ActionCategory::Click, 1.5, 0.12));
    }

    #[test]
    fn test_categories_independent() {
        let mut bank = DebounceBank::new();
        bank.mark(ActionCategory::Click, 1.0);
        // A click trigger does not gate motion.
        assert!(bank.allow(ActionCategory::Motion, 1.01, 0.7));
    }

    #[test]
    fn test_timers_only_move_forward() {
        let mut bank = DebounceBank::new();
        bank.mark(ActionCategory::Motion, 5.0);
        bank.mark(ActionCategory::Motion, 3.0);
        assert_eq!(bank.last(ActionCategory::Motion), Some(5.0));
    }

    #[test]
    fn test_at_most_one_event_per_window() {
        // Two qualifying attempts closer than the interval produce one fire.
        let mut bank = DebounceBank::new();
        let mut fired = 0;
        for t in [0.0, 0.05] {
            if bank.allow(ActionCategory::Click, t, 0.12) {
                bank.mark(ActionCategory::Click, t);
                fired += 1;
            }
        }
        assert_eq!(fired, 1);
    }
}
