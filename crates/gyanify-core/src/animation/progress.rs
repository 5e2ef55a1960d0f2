//! Page scroll progress as a fraction in [0, 1].

/// Scroll geometry as reported by the environment, in rows
#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct ScrollMetrics {
    pub offset: f64,
    pub document_height: f64,
    pub viewport_height: f64,
}

impl ScrollMetrics {
    pub fn new(offset: f64, document_height: f64, viewport_height: f64) -> Self {
        Self {
            offset,
            document_height,
            viewport_height,
        }
    }

    /// Largest offset the document can be scrolled to
    pub fn max_scroll(&self) -> f64 {
        (self.document_height - self.viewport_height).max(0.0)
    }
}

/// `offset / (document_height - viewport_height)`, clamped to [0, 1].
///
/// A document that fits in the viewport has nothing to scroll and reports 0.
pub fn scroll_progress(metrics: ScrollMetrics) -> f64 {
    let scrollable = metrics.document_height - metrics.viewport_height;
    if !(scrollable > 0.0) {
        return 0.0;
    }
    let progress = metrics.offset / scrollable;
    if progress.is_nan() {
        return 0.0;
    }
    progress.clamp(0.0, 1.0)
}

#[derive(Debug, Clone, Copy, Default)]
pub struct ScrollProgressTracker {
    progress: f64,
}

impl ScrollProgressTracker {
    pub fn new() -> Self {
        Self::default()
    }

    /// Recompute on a scroll notification; returns the new progress
    pub fn on_scroll(&mut self, metrics: ScrollMetrics) -> f64 {
        self.progress = scroll_progress(metrics);
        self.progress
    }

    #[inline]
    pub fn current_progress(&self) -> f64 {
        self.progress
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_endpoints_are_exact() {
        let max = 300.0;
        assert_eq!(scroll_progress(ScrollMetrics::new(0.0, 340.0, 40.0)), 0.0);
        assert_eq!(scroll_progress(ScrollMetrics::new(max, 340.0, 40.0)), 1.0);
    }

    #[test]
    fn test_monotonic_in_offset() {
        let mut prev = 0.0;
        for offset in 0..=300 {
            let p = scroll_progress(ScrollMetrics::new(offset as f64, 340.0, 40.0));
            assert!(p >= prev, "progress dropped at offset {}", offset);
            assert!((0.0..=1.0).contains(&p));
            prev = p;
        }
    }

    #[test]
    fn test_no_overflow_reports_zero() {
        for offset in [0.0, 5.0, 100.0] {
            let p = scroll_progress(ScrollMetrics::new(offset, 40.0, 40.0));
            assert_eq!(p, 0.0);
        }
        // Content shorter than the viewport
        assert_eq!(scroll_progress(ScrollMetrics::new(3.0, 20.0, 40.0)), 0.0);
    }

    #[test]
    fn test_overscroll_is_clamped() {
        assert_eq!(scroll_progress(ScrollMetrics::new(900.0, 340.0, 40.0)), 1.0);
        assert_eq!(scroll_progress(ScrollMetrics::new(-10.0, 340.0, 40.0)), 0.0);
    }

    #[test]
    fn test_tracker_keeps_last_value() {
        let mut tracker = ScrollProgressTracker::new();
        assert_eq!(tracker.current_progress(), 0.0);
        tracker.on_scroll(ScrollMetrics::new(150.0, 340.0, 40.0));
        assert!((tracker.current_progress() - 0.5).abs() < 1e-9);
        tracker.on_scroll(ScrollMetrics::new(0.0, 40.0, 40.0));
        assert_eq!(tracker.current_progress(), 0.0);
    }
}
