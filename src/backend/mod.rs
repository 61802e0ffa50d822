//! OS input backend abstraction — the sink for pointer and key commands.
//!
//! The pipeline only ever talks to `InputBackend`; whether commands reach a
//! real desktop (`system` feature) or a logging headless sink is a startup
//! decision.

pub mod headless;

#[cfg(feature = "system")]
pub mod system;

/// Mouse button for click commands.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MouseButton {
    Left,
    Right,
}

impl MouseButton {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Left => "left",
            Self::Right => "right",
        }
    }
}

/// Sink for the dispatcher's commands.
///
/// Implementations may fail per command (a platform can deny synthetic
/// input); the dispatcher logs and swallows such failures, so errors here
/// never abort the frame loop.
pub trait InputBackend {
    /// Screen dimensions in pixels (width, height).
    fn screen_size(&self) -> (i32, i32);

    /// Move the cursor to an absolute position.  Coordinates are already
    /// clamped to `[0, width-1] x [0, height-1]` by the dispatcher.
    fn move_cursor(&mut self, x: i32, y: i32) -> anyhow::Result<()>;

    fn click(&mut self, button: MouseButton) -> anyhow::Result<()>;

    fn double_click(&mut self) -> anyhow::Result<()>;

    /// Scroll vertically; positive scrolls up.
    fn scroll(&mut self, amount: i32) -> anyhow::Result<()>;

    /// Press a key chord, e.g. `["ctrl", "a"]`, in order.
    fn hotkey(&mut self, keys: &[&str]) -> anyhow::Result<()>;
}
