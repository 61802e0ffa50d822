//! System backend — performs real synthetic input through `enigo`.
//!
//! Only compiled with the `system` cargo feature; the default build stays
//! headless so the pipeline can run in CI without a display server.

use anyhow::{anyhow, Context};
use enigo::{Axis, Button, Coordinate, Direction, Enigo, Key, Keyboard, Mouse, Settings};
use tracing::info;

use super::{InputBackend, MouseButton};

/// Backend driving the real desktop cursor and keyboard.
pub struct SystemBackend {
    enigo: Enigo,
    width: i32,
    height: i32,
}

impl SystemBackend {
    /// Connect to the platform input system and query the main display size.
    pub fn new() -> anyhow::Result<Self> {
        let enigo =
            Enigo::new(&Settings::default()).context("failed to initialize input backend")?;
        let (width, height) = enigo
            .main_display()
            .map_err(|e| anyhow!("failed to query display size: {e}"))?;
        info!("system backend: display {}x{}", width, height);
        Ok(Self {
            enigo,
            width,
            height,
        })
    }

    fn key_for(name: &str) -> anyhow::Result<Key> {
        let mut chars = name.chars();
        match (chars.next(), chars.next()) {
            (Some(c), None) => return Ok(Key::Unicode(c)),
            _ => {}
        }
        match name {
            "ctrl" => Ok(Key::Control),
            "alt" => Ok(Key::Alt),
            "shift" => Ok(Key::Shift),
            "meta" | "super" => Ok(Key::Meta),
            other => Err(anyhow!("unknown hotkey key: {other}")),
        }
    }
}

impl InputBackend for SystemBackend {
    fn screen_size(&self) -> (i32, i32) {
        (self.width, self.height)
    }

    fn move_cursor(&mut self, x: i32, y: i32) -> anyhow::Result<()> {
        self.enigo
            .move_mouse(x, y, Coordinate::Abs)
            .map_err(|e| anyhow!("mouse move rejected: {e}"))
    }

    fn click(&mut self, button: MouseButton) -> anyhow::Result<()> {
        let button = match button {
            MouseButton::Left => Button::Left,
            MouseButton::Right => Button::Right,
        };
        self.enigo
            .button(button, Direction::Click)
            .map_err(|e| anyhow!("click rejected: {e}"))
    }

    fn double_click(&mut self) -> anyhow::Result<()> {
        for _ in 0..2 {
            self.enigo
                .button(Button::Left, Direction::Click)
                .map_err(|e| anyhow!("double click rejected: {e}"))?;
        }
        Ok(())
    }

    fn scroll(&mut self, amount: i32) -> anyhow::Result<()> {
        // Positive pipeline amounts scroll up; enigo's vertical axis counts
        // lines downward.
        self.enigo
            .scroll(-amount, Axis::Vertical)
            .map_err(|e| anyhow!("scroll rejected: {e}"))
    }

    fn hotkey(&mut self, keys: &[&str]) -> anyhow::Result<()> {
        let keys = keys
            .iter()
            .map(|k| Self::key_for(k))
            .collect::<anyhow::Result<Vec<_>>>()?;
        for key in &keys {
            self.enigo
                .key(*key, Direction::Press)
                .map_err(|e| anyhow!("key press rejected: {e}"))?;
        }
        for key in keys.iter().rev() {
            self.enigo
                .key(*key, Direction::Release)
                .map_err(|e| anyhow!("key release rejected: {e}"))?;
        }
        Ok(())
    }
}
