//! Scroll-driven animation primitives
//!
//! All primitives are plain state machines advanced by the owner with an
//! injected `Instant`; none of them spawn work of their own.
//!
//! - `interval` - fixed-period timer, the single scheduling primitive
//! - `easing` - easing curves for eased transitions
//! - `entrance` - delayed fade/slide-in timelines
//! - `visibility` - threshold-based viewport visibility detection
//! - `progress` - page scroll progress
//! - `typewriter` - incremental text reveal
//! - `counter` - visibility-gated numeric counters

pub mod counter;
pub mod easing;
pub mod entrance;
pub mod interval;
pub mod progress;
pub mod typewriter;
pub mod visibility;

pub use counter::{CounterAnimator, CounterGroup, CounterState};
pub use easing::{lerp, EasingType};
pub use entrance::Entrance;
pub use interval::Interval;
pub use progress::{scroll_progress, ScrollMetrics, ScrollProgressTracker};
pub use typewriter::{RevealProgress, TextRevealer};
pub use visibility::{
    intersection_ratio, Region, UnsupportedObserver, Viewport, ViewportObserver,
    VisibilityDetector, VisibilityState,
};
