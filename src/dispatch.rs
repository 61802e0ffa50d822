//! Action dispatch — route classified gesture events to the input backend.
//!
//! Exactly one backend command per event, in emission order.  Backend
//! rejections (a platform can deny synthetic input) are logged and
//! swallowed; they never abort the frame loop.

use tracing::{debug, info, warn};

use crate::backend::{InputBackend, MouseButton};
use crate::gesture::GestureEvent;

/// Maps gesture events to backend commands.
pub struct Dispatcher {
    screen_width: i32,
    screen_height: i32,
}

impl Dispatcher {
    pub fn new(screen_width: i32, screen_height: i32) -> Self {
        Self {
            screen_width,
            screen_height,
        }
    }

    /// Dispatch one frame's events in order.
    pub fn dispatch(&self, events: &[GestureEvent], backend: &mut dyn InputBackend) {
        for event in events {
            self.dispatch_one(event, backend);
        }
    }

    fn dispatch_one(&self, event: &GestureEvent, backend: &mut dyn InputBackend) {
        let result = match event {
            GestureEvent::Move { x, y } => {
                let (cx, cy) = self.clamp(*x, *y);
                backend.move_cursor(cx, cy)
            }
            GestureEvent::LeftClick => {
                info!("left click");
                backend.click(MouseButton::Left)
            }
            GestureEvent::DoubleClick => {
                info!("double click (V shape)");
                backend.double_click()
            }
            GestureEvent::RightClick => {
                info!("right click");
                backend.click(MouseButton::Right)
            }
            GestureEvent::SwipeLeft => {
                info!("swipe left -> select all");
                backend.hotkey(&["ctrl", "a"])
            }
            GestureEvent::SwipeRight => {
                info!("swipe right -> copy");
                backend.hotkey(&["ctrl", "c"])
            }
            GestureEvent::ScrollUp => {
                info!("scroll up");
                backend.scroll(60)
            }
            GestureEvent::ScrollDown => {
                info!("scroll down");
                backend.scroll(-60)
            }
            // State change only; no backend command.
            GestureEvent::PauseToggle { paused } => {
                info!("{}", if *paused { "pipeline paused" } else { "pipeline active" });
                Ok(())
            }
        };

        if let Err(e) = result {
            match event {
                GestureEvent::Move { .. } => debug!("cursor move ignored: {e}"),
                _ => warn!("{} command rejected: {e}", event.as_str()),
            }
        }
    }

    /// Clamp a screen coordinate to `[0, w-1] x [0, h-1]`.
    fn clamp(&self, x: f32, y: f32) -> (i32, i32) {
        let cx = (x as i32).clamp(0, self.screen_width - 1);
        let cy = (y as i32).clamp(0, self.screen_height - 1);
        (cx, cy)
    }
}

// ── Tests ──────────────────────────────────────────────────
