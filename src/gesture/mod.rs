//! Gesture subsystem — per-frame recognition state machines.
//!
//! Provides:
//! - `hand`: landmark/finger data model for one frame's observation
//! - `trail`: bounded fingertip history for net-displacement gestures
//! - `pointer`: active-rectangle mapping with EMA smoothing
//! - `debounce`: per-category cooldown timers
//! - `pause`: fist-hold pause/resume toggle
//! - `classifier`: the per-frame gesture checks
//! - `session`: the state struct tying the pipeline together

pub mod classifier;
pub mod debounce;
pub mod hand;
pub mod pause;
pub mod pointer;
pub mod session;
pub mod trail;

pub use classifier::{ClassifierConfig, GestureEvent};
pub use hand::{FingerVector, HandFrame, HandLandmark, Point};
pub use pointer::PointerConfig;
pub use session::MouseSession;
