//! Viewport visibility detection.
//!
//! A detector watches one section region. It reports `true` once the visible
//! fraction of the region reaches its threshold, and either latches there
//! (trigger-once) or keeps flipping as the region scrolls in and out.

use tracing::{debug, warn};

use crate::{Error, Result};

/// Vertical extent of a block inside the document, in rows
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct Region {
    pub top: u32,
    pub height: u32,
}

impl Region {
    pub fn new(top: u32, height: u32) -> Self {
        Self { top, height }
    }

    #[inline]
    pub fn bottom(&self) -> u32 {
        self.top.saturating_add(self.height)
    }
}

/// The window onto the document currently on screen
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct Viewport {
    pub offset: u32,
    pub height: u32,
}

impl Viewport {
    pub fn new(offset: u32, height: u32) -> Self {
        Self { offset, height }
    }

    #[inline]
    pub fn bottom(&self) -> u32 {
        self.offset.saturating_add(self.height)
    }
}

/// Fraction of `region` that lies inside `viewport`, in [0, 1]
pub fn intersection_ratio(region: Region, viewport: Viewport) -> f64 {
    if region.height == 0 {
        let inside = region.top >= viewport.offset && region.top < viewport.bottom();
        return if inside { 1.0 } else { 0.0 };
    }
    let top = region.top.max(viewport.offset);
    let bottom = region.bottom().min(viewport.bottom());
    if bottom <= top {
        return 0.0;
    }
    f64::from(bottom - top) / f64::from(region.height)
}

/// Environment capability that reports how much of a region is on screen.
///
/// `None` means the environment cannot observe visibility at all.
pub trait ViewportObserver {
    fn intersection_ratio(&self, region: Region) -> Option<f64>;
}

impl ViewportObserver for Viewport {
    fn intersection_ratio(&self, region: Region) -> Option<f64> {
        Some(intersection_ratio(region, *self))
    }
}

/// Observer for environments without visibility support
#[derive(Debug, Clone, Copy, Default)]
pub struct UnsupportedObserver;

impl ViewportObserver for UnsupportedObserver {
    fn intersection_ratio(&self, _region: Region) -> Option<f64> {
        None
    }
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct VisibilityState {
    /// Write-once under trigger-once; mirrors `is_currently_visible` otherwise
    pub has_triggered: bool,
    pub is_currently_visible: bool,
}

#[derive(Debug, Clone)]
pub struct VisibilityDetector {
    threshold: f64,
    trigger_once: bool,
    state: VisibilityState,
    /// Whether the observation handle is still held
    observing: bool,
}

impl VisibilityDetector {
    /// `threshold` is the visible fraction required, in (0, 1]
    pub fn new(threshold: f64, trigger_once: bool) -> Result<Self> {
        if !(threshold > 0.0 && threshold <= 1.0) {
            return Err(Error::invalid(format!(
                "visibility threshold must be in (0, 1], got {}",
                threshold
            )));
        }
        Ok(Self {
            threshold,
            trigger_once,
            state: VisibilityState::default(),
            observing: true,
        })
    }

    /// Feed the latest intersection ratio. Returns the new visibility when it changed.
    ///
    /// A `None` ratio fails open: the region is reported visible and latched,
    /// since no further notifications can arrive to hide it again.
    pub fn observe(&mut self, ratio: Option<f64>) -> Option<bool> {
        if !self.observing {
            return None;
        }

        let Some(ratio) = ratio else {
            warn!("Visibility observation unsupported, showing content");
            self.observing = false;
            return self.transition(true);
        };

        let visible = ratio >= self.threshold;
        let changed = self.transition(visible);
        if self.trigger_once && self.state.has_triggered {
            self.observing = false;
        }
        changed
    }

    /// Convenience: query `observer` for `region` and feed the result
    pub fn observe_region(
        &mut self,
        observer: &dyn ViewportObserver,
        region: Region,
    ) -> Option<bool> {
        if !self.observing {
            return None;
        }
        self.observe(observer.intersection_ratio(region))
    }

    fn transition(&mut self, visible: bool) -> Option<bool> {
        if visible == self.state.is_currently_visible {
            return None;
        }
        self.state.is_currently_visible = visible;
        if self.trigger_once {
            self.state.has_triggered |= visible;
        } else {
            self.state.has_triggered = visible;
        }
        debug!(visible, "Visibility changed");
        Some(visible)
    }

    /// Release the observation handle. No further changes are emitted.
    pub fn release(&mut self) {
        self.observing = false;
    }

    #[inline]
    pub fn is_observing(&self) -> bool {
        self.observing
    }

    #[inline]
    pub fn is_visible(&self) -> bool {
        self.state.is_currently_visible
    }

    #[inline]
    pub fn state(&self) -> VisibilityState {
        self.state
    }

    #[inline]
    pub fn threshold(&self) -> f64 {
        self.threshold
    }

    #[inline]
    pub fn trigger_once(&self) -> bool {
        self.trigger_once
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    /// Drive the visible fraction from 0 to 1 in 1% steps and collect emissions
    fn sweep_up(detector: &mut VisibilityDetector) -> Vec<(u32, bool)> {
        (0..=100)
            .filter_map(|pct| {
                detector
                    .observe(Some(pct as f64 / 100.0))
                    .map(|visible| (pct, visible))
            })
            .collect()
    }

    #[test]
    fn test_rejects_threshold_out_of_range() {
        for bad in [0.0, -0.5, 1.01, f64::NAN] {
            assert!(
                matches!(
                    VisibilityDetector::new(bad, true),
                    Err(Error::InvalidConfiguration(_))
                ),
                "threshold {} accepted",
                bad
            );
        }
        assert!(VisibilityDetector::new(1.0, true).is_ok());
    }

    #[test]
    fn test_emits_true_once_at_threshold_crossing() {
        for threshold_pct in [1u32, 10, 37, 50, 99, 100] {
            let threshold = threshold_pct as f64 / 100.0;
            let mut detector = VisibilityDetector::new(threshold, true).unwrap();
            let emissions = sweep_up(&mut detector);
            assert_eq!(emissions, vec![(threshold_pct, true)], "threshold {}", threshold);
        }
    }

    #[test]
    fn test_trigger_once_latches() {
        let mut detector = VisibilityDetector::new(0.1, true).unwrap();
        assert_eq!(detector.observe(Some(0.5)), Some(true));
        assert!(!detector.is_observing());
        assert_eq!(detector.observe(Some(0.0)), None);
        assert_eq!(detector.observe(Some(0.9)), None);
        assert_eq!(
            detector.state(),
            VisibilityState {
                has_triggered: true,
                is_currently_visible: true
            }
        );
    }

    #[test]
    fn test_continuous_mode_flips_both_ways() {
        let mut detector = VisibilityDetector::new(0.5, false).unwrap();
        assert_eq!(detector.observe(Some(0.2)), None);
        assert_eq!(detector.observe(Some(0.6)), Some(true));
        assert_eq!(detector.observe(Some(0.7)), None);
        assert_eq!(detector.observe(Some(0.1)), Some(false));
        assert!(!detector.state().has_triggered);
        assert_eq!(detector.observe(Some(0.5)), Some(true));
        assert!(detector.state().has_triggered);
        assert!(detector.is_observing());
    }

    #[test]
    fn test_never_reaching_viewport_never_emits() {
        let mut detector = VisibilityDetector::new(0.1, true).unwrap();
        for _ in 0..10 {
            assert_eq!(detector.observe(Some(0.05)), None);
        }
        assert!(!detector.is_visible());
    }

    #[test]
    fn test_release_before_trigger() {
        let mut detector = VisibilityDetector::new(0.1, true).unwrap();
        detector.release();
        assert!(!detector.is_observing());
        assert_eq!(detector.observe(Some(1.0)), None);
        assert!(!detector.is_visible());
    }

    #[test]
    fn test_unsupported_environment_fails_open() {
        let mut detector = VisibilityDetector::new(0.1, false).unwrap();
        let region = Region::new(500, 20);
        assert_eq!(detector.observe_region(&UnsupportedObserver, region), Some(true));
        assert!(detector.is_visible());
        assert!(!detector.is_observing());
    }

    #[test]
    fn test_intersection_ratio() {
        let viewport = Viewport::new(10, 20);
        assert_eq!(intersection_ratio(Region::new(0, 5), viewport), 0.0);
        assert_eq!(intersection_ratio(Region::new(12, 4), viewport), 1.0);
        assert!((intersection_ratio(Region::new(25, 10), viewport) - 0.5).abs() < 1e-9);
        assert!((intersection_ratio(Region::new(0, 40), viewport) - 0.5).abs() < 1e-9);
        assert_eq!(intersection_ratio(Region::new(30, 10), viewport), 0.0);
        assert_eq!(intersection_ratio(Region::new(15, 0), viewport), 1.0);
    }

    #[test]
    fn test_observe_region_through_viewport() {
        let mut detector = VisibilityDetector::new(0.1, true).unwrap();
        let region = Region::new(100, 50);
        assert_eq!(detector.observe_region(&Viewport::new(0, 40), region), None);
        assert_eq!(detector.observe_region(&Viewport::new(70, 40), region), Some(true));
    }
}
