//! Typewriter effect: reveals a string one character per interval.

use std::time::{Duration, Instant};

use tracing::debug;

use super::interval::Interval;
use crate::Result;

/// Caret blink half-period
const CARET_BLINK: Duration = Duration::from_millis(500);

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RevealProgress<'a> {
    pub full_text: &'a str,
    /// Number of characters shown, `0..=full_text.chars().count()`
    pub visible_length: usize,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum RevealPhase {
    Idle,
    Revealing,
    Complete,
    TornDown,
}

#[derive(Debug, Clone)]
pub struct TextRevealer {
    full_text: String,
    char_count: usize,
    visible_length: usize,
    timer: Interval,
    phase: RevealPhase,
    started_at: Option<Instant>,
}

impl TextRevealer {
    pub fn new(full_text: impl Into<String>, interval: Duration) -> Result<Self> {
        let full_text = full_text.into();
        let char_count = full_text.chars().count();
        Ok(Self {
            full_text,
            char_count,
            visible_length: 0,
            timer: Interval::new(interval)?,
            phase: RevealPhase::Idle,
            started_at: None,
        })
    }

    /// Activate the reveal. Returns the initial empty prefix on the first call;
    /// a started revealer cannot be restarted.
    pub fn start(&mut self, now: Instant) -> Option<&str> {
        if self.phase != RevealPhase::Idle {
            return None;
        }
        self.started_at = Some(now);
        self.visible_length = 0;
        if self.char_count == 0 {
            self.phase = RevealPhase::Complete;
        } else {
            self.timer.start(now);
            self.phase = RevealPhase::Revealing;
        }
        Some("")
    }

    /// Advance by one character per elapsed interval. Returns the new prefix
    /// when it grew, `None` otherwise.
    pub fn update(&mut self, now: Instant) -> Option<&str> {
        if self.phase != RevealPhase::Revealing {
            return None;
        }
        let ticks = self.timer.poll(now);
        if ticks == 0 {
            return None;
        }
        let ticks = usize::try_from(ticks).unwrap_or(usize::MAX);
        self.visible_length = self.visible_length.saturating_add(ticks).min(self.char_count);
        if self.visible_length == self.char_count {
            self.timer.cancel();
            self.phase = RevealPhase::Complete;
            debug!(chars = self.char_count, "Text reveal complete");
        }
        Some(self.visible_text())
    }

    /// Stop the timer; the revealed prefix freezes where it is
    pub fn teardown(&mut self) {
        self.timer.cancel();
        self.phase = RevealPhase::TornDown;
    }

    pub fn visible_text(&self) -> &str {
        let end = self
            .full_text
            .char_indices()
            .nth(self.visible_length)
            .map(|(idx, _)| idx)
            .unwrap_or(self.full_text.len());
        &self.full_text[..end]
    }

    pub fn progress(&self) -> RevealProgress<'_> {
        RevealProgress {
            full_text: &self.full_text,
            visible_length: self.visible_length,
        }
    }

    #[inline]
    pub fn full_text(&self) -> &str {
        &self.full_text
    }

    #[inline]
    pub fn is_complete(&self) -> bool {
        self.phase == RevealPhase::Complete
    }

    #[inline]
    pub fn is_active(&self) -> bool {
        self.phase == RevealPhase::Revealing
    }

    /// Blinking caret state; hidden before start and after teardown
    pub fn caret_visible(&self, now: Instant) -> bool {
        if self.phase == RevealPhase::TornDown {
            return false;
        }
        match self.started_at {
            Some(start) => {
                let elapsed = now.saturating_duration_since(start);
                (elapsed.as_millis() / CARET_BLINK.as_millis()) % 2 == 0
            }
            None => false,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::Error;

    fn ms(n: u64) -> Duration {
        Duration::from_millis(n)
    }

    #[test]
    fn test_reveals_one_char_per_tick() {
        let t0 = Instant::now();
        let mut revealer = TextRevealer::new("AI", ms(50)).unwrap();

        assert_eq!(revealer.start(t0), Some(""));
        assert_eq!(revealer.update(t0 + ms(49)), None);
        assert_eq!(revealer.update(t0 + ms(50)), Some("A"));
        assert_eq!(revealer.update(t0 + ms(100)), Some("AI"));
        assert!(revealer.is_complete());
        assert_eq!(revealer.update(t0 + ms(150)), None);
        assert_eq!(revealer.update(t0 + ms(10_000)), None);
        assert_eq!(revealer.visible_text(), "AI");
    }

    #[test]
    fn test_empty_text_completes_at_start() {
        let t0 = Instant::now();
        let mut revealer = TextRevealer::new("", ms(50)).unwrap();
        assert_eq!(revealer.start(t0), Some(""));
        assert!(revealer.is_complete());
        assert_eq!(revealer.update(t0 + ms(500)), None);
    }

    #[test]
    fn test_zero_interval_rejected() {
        assert!(matches!(
            TextRevealer::new("abc", Duration::ZERO),
            Err(Error::InvalidConfiguration(_))
        ));
    }

    #[test]
    fn test_not_restartable() {
        let t0 = Instant::now();
        let mut revealer = TextRevealer::new("abc", ms(10)).unwrap();
        revealer.start(t0);
        revealer.update(t0 + ms(20));
        assert_eq!(revealer.start(t0 + ms(25)), None);
        assert_eq!(revealer.visible_text(), "ab");
    }

    #[test]
    fn test_late_frame_coalesces_but_never_overshoots() {
        let t0 = Instant::now();
        let mut revealer = TextRevealer::new("hello", ms(10)).unwrap();
        revealer.start(t0);
        assert_eq!(revealer.update(t0 + ms(30)), Some("hel"));
        assert_eq!(revealer.update(t0 + ms(999)), Some("hello"));
        assert_eq!(revealer.progress().visible_length, 5);
    }

    #[test]
    fn test_multibyte_prefixes_stay_on_char_boundaries() {
        let t0 = Instant::now();
        let mut revealer = TextRevealer::new("Gyanify – AI", ms(10)).unwrap();
        revealer.start(t0);
        revealer.update(t0 + ms(90));
        assert_eq!(revealer.visible_text(), "Gyanify –");
    }

    #[test]
    fn test_teardown_stops_mutation() {
        let t0 = Instant::now();
        let mut revealer = TextRevealer::new("abcdef", ms(10)).unwrap();
        revealer.start(t0);
        revealer.update(t0 + ms(20));
        revealer.teardown();
        assert_eq!(revealer.update(t0 + ms(1_000)), None);
        assert_eq!(revealer.visible_text(), "ab");
        assert!(!revealer.is_active());
        assert!(!revealer.caret_visible(t0 + ms(1_000)));
    }

    #[test]
    fn test_caret_blinks() {
        let t0 = Instant::now();
        let mut revealer = TextRevealer::new("x", ms(10)).unwrap();
        assert!(!revealer.caret_visible(t0));
        revealer.start(t0);
        assert!(revealer.caret_visible(t0 + ms(100)));
        assert!(!revealer.caret_visible(t0 + ms(600)));
        assert!(revealer.caret_visible(t0 + ms(1_100)));
    }
}
