//! Headless backend — CI testing and dry-run mode.
//!
//! Accepts every command against a configurable virtual screen, logs it, and
//! keeps per-command counters for the end-of-run summary.

use tracing::{debug, info};

use super::{InputBackend, MouseButton};

/// Headless virtual screen configuration.
#[derive(Debug, Clone)]
pub struct HeadlessConfig {
    /// Virtual screen width in pixels.
    pub width: i32,
    /// Virtual screen height in pixels.
    pub height: i32,
}

impl Default for HeadlessConfig {
    fn default() -> Self {
        Self {
            width: 1920,
            height: 1080,
        }
    }
}

impl HeadlessConfig {
    /// Parse a "WxH" resolution string. Returns (width, height) or None.
    pub fn parse_resolution(s: &str) -> Option<(i32, i32)> {
        let parts: Vec<&str> = s.split('x').collect();
        if parts.len() != 2 {
            return None;
        }
        let w = parts[0].parse::<i32>().ok()?;
        let h = parts[1].parse::<i32>().ok()?;
        if w > 0 && h > 0 {
            Some((w, h))
        } else {
            None
        }
    }
}

/// Backend that logs commands instead of performing them.
#[derive(Debug)]
pub struct HeadlessBackend {
    config: HeadlessConfig,
    /// Cursor moves accepted.
    pub moves: u64,
    /// Clicks accepted (left, right, and double).
    pub clicks: u64,
    /// Scroll commands accepted.
    pub scrolls: u64,
    /// Hotkey chords accepted.
    pub hotkeys: u64,
    /// Last cursor position seen, if any.
    pub cursor: Option<(i32, i32)>,
}

impl HeadlessBackend {
    pub fn new(config: HeadlessConfig) -> Self {
        info!(
            "headless backend: virtual screen {}x{}",
            config.width, config.height
        );
        Self {
            config,
            moves: 0,
            clicks: 0,
            scrolls: 0,
            hotkeys: 0,
            cursor: None,
        }
    }

    /// Diagnostic s-expression with the action counters.
    pub fn status_sexp(&self) -> String {
        format!(
            "(:screen ({} {}) :moves {} :clicks {} :scrolls {} :hotkeys {})",
            self.config.width, self.config.height, self.moves, self.clicks, self.scrolls,
            self.hotkeys,
        )
    }
}

impl InputBackend for HeadlessBackend {
    fn screen_size(&self) -> (i32, i32) {
        (self.config.width, self.config.height)
    }

    fn move_cursor(&mut self, x: i32, y: i32) -> anyhow::Result<()> {
        self.moves += 1;
        self.cursor = Some((x, y));
        debug!("cursor -> ({}, {})", x, y);
        Ok(())
    }

    fn click(&mut self, button: MouseButton) -> anyhow::Result<()> {
        self.clicks += 1;
        debug!("{} click", button.as_str());
        Ok(())
    }

    fn double_click(&mut self) -> anyhow::Result<()> {
        self.clicks += 1;
        debug!("double click");
        Ok(())
    }

    fn scroll(&mut self, amount: i32) -> anyhow::Result<()> {
        self.scrolls += 1;
        debug!("scroll {}", amount);
        Ok(())
    }

    fn hotkey(&mut self, keys: &[&str]) -> anyhow::Result<()> {
        self.hotkeys += 1;
        debug!("hotkey {}", keys.join("+"));
        Ok(())
    }
}

// ── Tests ──────────────────────────────────────────────────

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_resolution() {
        assert_eq!(HeadlessConfig::parse_resolution("1920x1080"), Some((1920, 1080)));
        assert_eq!(HeadlessConfig::parse_resolution("640x480"), Some((640, 480)));
        assert_eq!(HeadlessConfig::parse_resolution("1920"), None);
        assert_eq!(HeadlessConfig::parse_resolution("0x1080"), None);
        assert_eq!(HeadlessConfig::parse_resolution("axb"), None);
    }

    #[test]
    fn test_counters_and_cursor() {
        let mut backend = HeadlessBackend::new(HeadlessConfig::default());
        backend.move_cursor(10, 20).unwrap();
        backend.move_cursor(30, 40).unwrap();
        backend.click(MouseButton::Left).unwrap();
        backend.double_click().unwrap();
        backend.scroll(60).unwrap();
        backend.hotkey(&["ctrl", "a"]).unwrap();

        assert_eq!(backend.moves, 2);
        assert_eq!(backend.clicks, 2);
        assert_eq!(backend.scrolls, 1);
        assert_eq!(backend.hotkeys, 1);
        assert_eq!(backend.cursor, Some((30, 40)));

        let sexp = backend.status_sexp();
        assert!(sexp.contains(":moves 2"));
        assert!(sexp.contains(":clicks 2"));
    }
}
