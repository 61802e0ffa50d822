//! Pointer mapping — converts an index-fingertip position inside the active
//! camera-frame rectangle into a smoothed, X-mirrored screen coordinate.
//!
//! The active rectangle is the camera frame inset by `margin_px` on every
//! edge.  Interpolation saturates at the rectangle bounds, so inputs outside
//! it map to the screen edge rather than out of range.

// ── Config ─────────────────────────────────────────────────

/// Configuration for the active rectangle and smoothing.
#[derive(Debug, Clone)]
pub struct PointerConfig {
    /// Camera frame width in pixels.
    pub frame_width: f32,
    /// Camera frame height in pixels.
    pub frame_height: f32,
    /// Inset from each frame edge defining the active rectangle.
    pub margin_px: f32,
    /// EMA damping divisor (> 1 means more lag, less jitter).
    pub smoothing: f32,
}

impl Default for PointerConfig {
    fn default() -> Self {
        Self {
            frame_width: 480.0,
            frame_height: 360.0,
            margin_px: 100.0,
            smoothing: 3.0,
        }
    }
}

// ── Mapper ─────────────────────────────────────────────────

/// Maps fingertip positions to screen coordinates with EMA smoothing.
///
/// Holds the previous smoothed coordinate (unmirrored), updated exactly once
/// per move-frame after the new coordinate is computed.
#[derive(Debug)]
pub struct PointerMapper {
    pub config: PointerConfig,
    /// Target screen width in pixels.
    screen_width: f32,
    /// Target screen height in pixels.
    screen_height: f32,
    /// Previous smoothed coordinate, before mirroring.
    ploc_x: f32,
    ploc_y: f32,
}

impl PointerMapper {
    pub fn new(config: PointerConfig, screen_width: f32, screen_height: f32) -> Self {
        Self {
            config,
            screen_width,
            screen_height,
            ploc_x: 0.0,
            ploc_y: 0.0,
        }
    }

    /// Map a fingertip position to the final screen coordinate.
    ///
    /// Interpolates from the active rectangle onto the screen, applies EMA
    /// smoothing against the previous smoothed position, mirrors the X axis,
    /// and records the (unmirrored) smoothed position for the next frame.
    pub fn map(&mut self, x1: f32, y1: f32) -> (f32, f32) {
        let c = &self.config;
        let x3 = interp(x1, c.margin_px, c.frame_width - c.margin_px, 0.0, self.screen_width);
        let y3 = interp(y1, c.margin_px, c.frame_height - c.margin_px, 0.0, self.screen_height);

        let cloc_x = self.ploc_x + (x3 - self.ploc_x) / c.smoothing;
        let cloc_y = self.ploc_y + (y3 - self.ploc_y) / c.smoothing;

        self.ploc_x = cloc_x;
        self.ploc_y = cloc_y;

        // Mirror X so the pointer tracks a mirrored camera view.
        (self.screen_width - cloc_x, cloc_y)
    }

    /// Previous smoothed coordinate (unmirrored), for diagnostics.
    pub fn previous(&self) -> (f32, f32) {
        (self.ploc_x, self.ploc_y)
    }

    pub fn screen_size(&self) -> (f32, f32) {
        (self.screen_width, self.screen_height)
    }
}

/// Linear interpolation of `v` from `[lo, hi]` onto `[out_lo, out_hi]`,
/// saturating outside the input range.
fn interp(v: f32, lo: f32, hi: f32, out_lo: f32, out_hi: f32) -> f32 {
    if hi <= lo {
        return out_lo;
    }
    if v <= lo {
        return out_lo;
    }
    if v >= hi {
        return out_hi;
    }
    out_lo + (v - lo) * (out_hi - out_lo) / (hi - lo)
}

// ── Tests ──────────────────────────────────────────────────
