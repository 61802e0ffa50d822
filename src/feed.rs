//! Frame feed — parse per-frame detector messages.
//!
//! The external landmark detector writes one s-expression per line:
//!
//! ```text
//! (:type :frame :t 1.234 :fingers (0 1 0 0 0) :landmarks ((4 210 200) (8 150 150)))
//! (:type :frame :t 1.267)    ; no hand this frame
//! (:type :quit)
//! ```
//!
//! `:t` is the detector timestamp in seconds and is required.  Malformed
//! lines are logged and skipped; a frame is the unit of fault isolation.

use lexpr::Value;
use tracing::warn;

use crate::gesture::{FingerVector, HandFrame, HandLandmark, Point};

/// One parsed feed line.
#[derive(Debug)]
pub enum FeedMessage {
    Frame(FrameInput),
    /// External quit signal; the frame loop terminates.
    Quit,
}

/// One frame from the detector.
#[derive(Debug)]
pub struct FrameInput {
    /// Detector timestamp in seconds.
    pub t: f64,
    /// The observed hand, or None when the detector saw no hand.
    pub hand: Option<HandFrame>,
}

/// Parse one feed line.  Returns None (after logging) on malformed input.
pub fn parse_message(raw: &str) -> Option<FeedMessage> {
    let value = match lexpr::from_str(raw) {
        Ok(v) => v,
        Err(e) => {
            warn!("malformed feed line: {}", e);
            return None;
        }
    };

    match get_keyword(&value, "type").as_deref() {
        Some("quit") => Some(FeedMessage::Quit),
        Some("frame") => parse_frame(&value),
        Some(other) => {
            warn!("unknown feed message type: {}", other);
            None
        }
        None => {
            warn!("feed message without :type");
            None
        }
    }
}

fn parse_frame(value: &Value) -> Option<FeedMessage> {
    let Some(t) = get_float(value, "t") else {
        warn!("frame message without :t timestamp");
        return None;
    };

    let hand = match get_value(value, "fingers") {
        None => None,
        Some(fingers_value) => {
            let Some(fingers) = parse_fingers(fingers_value) else {
                warn!("frame with malformed :fingers vector");
                return None;
            };
            let mut frame = HandFrame::new(fingers);
            if let Some(landmarks) = get_value(value, "landmarks") {
                parse_landmarks(landmarks, &mut frame);
            }
            Some(frame)
        }
    };

    Some(FeedMessage::Frame(FrameInput { t, hand }))
}

/// Parse a five-entry 0/1 list into a finger vector.
fn parse_fingers(value: &Value) -> Option<FingerVector> {
    let items = list_items(value);
    if items.len() != 5 {
        return None;
    }
    let mut fingers = [false; 5];
    for (i, item) in items.iter().enumerate() {
        fingers[i] = item.as_u64()? != 0;
    }
    Some(FingerVector(fingers))
}

/// Parse `((index x y) ...)` landmark triples into the frame.  Entries with
/// unknown indices or non-numeric coordinates are skipped with a warning.
fn parse_landmarks(value: &Value, frame: &mut HandFrame) {
    for entry in list_items(value) {
        let triple = list_items(entry);
        let parsed = (|| {
            let [idx, x, y] = triple.as_slice() else {
                return None;
            };
            let landmark = HandLandmark::from_index(idx.as_u64()? as usize)?;
            Some((landmark, x.as_f64()? as f32, y.as_f64()? as f32))
        })();
        match parsed {
            Some((landmark, x, y)) => frame.set_landmark(landmark, Point::new(x, y)),
            None => warn!("skipping malformed landmark entry: {}", entry),
        }
    }
}

// ── S-expression helpers ───────────────────────────────────

/// Walk a keyword plist and return the value following `:key`.
fn get_value<'a>(value: &'a Value, key: &str) -> Option<&'a Value> {
    let prefixed = format!(":{}", key);
    let mut current = value;
    while let Value::Cons(pair) = current {
        let car = pair.car();
        let is_key = match car {
            Value::Keyword(k) => k.as_ref() == key,
            Value::Symbol(s) => s.as_ref() == prefixed,
            _ => false,
        };
        if is_key {
            if let Value::Cons(next) = pair.cdr() {
                return Some(next.car());
            }
            return None;
        }
        current = pair.cdr();
    }
    None
}

/// Like `get_value`, rendered to a plain string (keywords lose their colon).
fn get_keyword(value: &Value, key: &str) -> Option<String> {
    let val = get_value(value, key)?;
    match val {
        Value::Keyword(v) => Some(v.to_string()),
        Value::Symbol(v) => {
            let s = v.to_string();
            Some(s.strip_prefix(':').unwrap_or(&s).to_string())
        }
        Value::String(v) => Some(v.to_string()),
        Value::Number(n) => Some(n.to_string()),
        _ => None,
    }
}

fn get_float(value: &Value, key: &str) -> Option<f64> {
    get_value(value, key)?.as_f64()
}

/// Collect the elements of a cons list.
fn list_items(value: &Value) -> Vec<&Value> {
    let mut items = Vec::new();
    let mut current = value;
    while let Value::Cons(pair) = current {
        items.push(pair.car());
        current = pair.cdr();
    }
    items
}

// ── Tests ──────────────────────────────────────────────────
