//! Time helpers for scroll animations. The clock is always passed in.

use std::time::{Duration, Instant};

use gyanify_core::animation::lerp;

/// Progress in [0.0, 1.0] of an animation that began at `start`
#[inline]
pub fn progress(start: Instant, duration: Duration, now: Instant) -> f64 {
    if duration.is_zero() {
        return 1.0;
    }
    let elapsed = now.saturating_duration_since(start);
    let ratio = elapsed.as_secs_f64() / duration.as_secs_f64();
    ratio.clamp(0.0, 1.0)
}

#[inline]
pub fn is_complete(start: Instant, duration: Duration, now: Instant) -> bool {
    now.saturating_duration_since(start) >= duration
}

/// Interpolate between two scroll offsets
#[inline]
pub fn lerp_u16(from: u16, to: u16, t: f64) -> u16 {
    lerp(f64::from(from), f64::from(to), t).round() as u16
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_lerp_u16() {
        assert_eq!(lerp_u16(0, 100, 0.0), 0);
        assert_eq!(lerp_u16(0, 100, 0.5), 50);
        assert_eq!(lerp_u16(100, 0, 1.0), 0);
    }

    #[test]
    fn test_progress_zero_duration() {
        let start = Instant::now();
        assert_eq!(progress(start, Duration::ZERO, start), 1.0);
    }

    #[test]
    fn test_progress_midway_and_done() {
        let start = Instant::now();
        let d = Duration::from_millis(200);
        assert!((progress(start, d, start + Duration::from_millis(100)) - 0.5).abs() < 1e-9);
        assert!(!is_complete(start, d, start + Duration::from_millis(199)));
        assert!(is_complete(start, d, start + d));
        assert_eq!(progress(start, d, start + Duration::from_secs(5)), 1.0);
    }
}
