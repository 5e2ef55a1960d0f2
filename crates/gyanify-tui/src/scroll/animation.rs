//! Scroll animation controller for the page body.
//!
//! Key presses only record a target; `update()` advances the visible offset
//! toward it each frame along the configured easing curve.

use std::time::{Duration, Instant};

use gyanify_core::animation::EasingType;
use gyanify_core::ScrollConfig;

use super::timing::{is_complete, lerp_u16, progress};

#[derive(Debug, Clone)]
struct ActiveAnimation {
    start: Instant,
    from: u16,
    to: u16,
    duration: Duration,
    easing: EasingType,
}

#[derive(Debug, Clone)]
pub struct PageScroller {
    animation: Option<ActiveAnimation>,
    config: ScrollConfig,
    /// Offset currently on screen
    current: u16,
    /// Scroll delta batched since the last frame
    pending_delta: i32,
}

impl Default for PageScroller {
    fn default() -> Self {
        Self::new(ScrollConfig::default())
    }
}

impl PageScroller {
    pub fn new(config: ScrollConfig) -> Self {
        Self {
            animation: None,
            config,
            current: 0,
            pending_delta: 0,
        }
    }

    pub fn config(&self) -> &ScrollConfig {
        &self.config
    }

    #[inline]
    pub fn is_animating(&self) -> bool {
        self.animation.is_some()
    }

    /// True while there is an animation or unprocessed delta; the event loop
    /// switches to the fast frame rate while this holds
    #[inline]
    pub fn needs_update(&self) -> bool {
        self.animation.is_some() || self.pending_delta != 0
    }

    /// Where the offset will settle once the current animation ends
    pub fn target(&self) -> u16 {
        self.animation
            .as_ref()
            .map(|a| a.to)
            .unwrap_or(self.current)
    }

    #[inline]
    pub fn current(&self) -> u16 {
        self.current
    }

    /// Jump without animating
    pub fn set(&mut self, offset: u16) {
        self.animation = None;
        self.current = offset;
        self.pending_delta = 0;
    }

    /// Keep the offset inside a shrunken document, e.g. after a resize
    pub fn clamp_to(&mut self, max_scroll: u16) {
        if self.target() > max_scroll || self.current > max_scroll {
            self.set(self.current.min(max_scroll));
        }
    }

    /// Animate toward an absolute offset
    pub fn scroll_to(&mut self, target: u16, max_scroll: u16, now: Instant) {
        let target = target.min(max_scroll);
        self.pending_delta = 0;

        if !self.config.is_smooth() {
            self.set(target);
            return;
        }
        if self.current == target {
            self.animation = None;
            return;
        }
        self.animation = Some(self.animation_to(target, now));
    }

    /// Queue a relative scroll; positive is down
    ///
    /// Deltas arriving within one frame are batched so that held keys chain
    /// into a single animation.
    pub fn scroll_by(&mut self, delta: i32, max_scroll: u16) {
        if !self.config.is_smooth() {
            let offset = (i32::from(self.current) + delta).clamp(0, i32::from(max_scroll));
            self.set(offset as u16);
            return;
        }
        self.pending_delta += delta;
    }

    pub fn line_down(&mut self, max_scroll: u16) {
        self.scroll_by(self.line_step(), max_scroll);
    }

    pub fn line_up(&mut self, max_scroll: u16) {
        self.scroll_by(-self.line_step(), max_scroll);
    }

    pub fn half_page_down(&mut self, viewport_height: u16, max_scroll: u16) {
        self.scroll_by(i32::from((viewport_height / 2).max(1)), max_scroll);
    }

    pub fn half_page_up(&mut self, viewport_height: u16, max_scroll: u16) {
        self.scroll_by(-i32::from((viewport_height / 2).max(1)), max_scroll);
    }

    pub fn page_down(&mut self, viewport_height: u16, max_scroll: u16) {
        self.scroll_by(i32::from(viewport_height.max(1)), max_scroll);
    }

    pub fn page_up(&mut self, viewport_height: u16, max_scroll: u16) {
        self.scroll_by(-i32::from(viewport_height.max(1)), max_scroll);
    }

    /// Advance one frame and return the offset to draw
    pub fn update(&mut self, max_scroll: u16, now: Instant) -> u16 {
        if self.pending_delta != 0 {
            let target = (i32::from(self.target()) + self.pending_delta)
                .clamp(0, i32::from(max_scroll)) as u16;
            self.pending_delta = 0;
            if target != self.current {
                self.animation = Some(self.animation_to(target, now));
            } else {
                self.animation = None;
            }
        }

        if let Some(anim) = &self.animation {
            if is_complete(anim.start, anim.duration, now) {
                self.current = anim.to.min(max_scroll);
                self.animation = None;
            } else {
                let t = anim.easing.apply(progress(anim.start, anim.duration, now));
                self.current = lerp_u16(anim.from, anim.to, t).min(max_scroll);
            }
        }

        self.current
    }

    /// Stop where we are
    pub fn cancel(&mut self) {
        self.animation = None;
        self.pending_delta = 0;
    }

    fn line_step(&self) -> i32 {
        i32::from(self.config.scroll_lines.max(1))
    }

    fn animation_to(&self, to: u16, now: Instant) -> ActiveAnimation {
        ActiveAnimation {
            start: now,
            from: self.current,
            to,
            duration: self.config.animation_duration(),
            easing: self.config.easing,
        }
    }
}
