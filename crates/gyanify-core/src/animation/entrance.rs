//! Entrance timelines: fade/slide-in progress for a block once its section is revealed.

use std::time::{Duration, Instant};

use super::easing::EasingType;

#[derive(Debug, Clone)]
pub struct Entrance {
    duration: Duration,
    delay: Duration,
    easing: EasingType,
    started: Option<Instant>,
}

impl Entrance {
    pub fn new(duration: Duration, delay: Duration, easing: EasingType) -> Self {
        Self {
            duration,
            delay,
            easing,
            started: None,
        }
    }

    /// Entrance for the `index`-th block of a section, staggered after `base_delay`
    pub fn staggered(
        duration: Duration,
        base_delay: Duration,
        stagger: Duration,
        index: u32,
        easing: EasingType,
    ) -> Self {
        let delay = base_delay.saturating_add(stagger.saturating_mul(index));
        Self::new(duration, delay, easing)
    }

    /// Start the timeline; later calls keep the first start time
    pub fn start(&mut self, now: Instant) {
        self.started.get_or_insert(now);
    }

    /// Back to the hidden state so the entrance can play again
    pub fn reset(&mut self) {
        self.started = None;
    }

    #[inline]
    pub fn has_started(&self) -> bool {
        self.started.is_some()
    }

    /// Eased progress in [0, 1]; 0 before start or during the delay
    pub fn progress(&self, now: Instant) -> f64 {
        let Some(start) = self.started else {
            return 0.0;
        };
        let elapsed = now.saturating_duration_since(start);
        if elapsed < self.delay {
            return 0.0;
        }
        let running = elapsed - self.delay;
        if self.duration.is_zero() || running >= self.duration {
            return 1.0;
        }
        self.easing
            .apply(running.as_secs_f64() / self.duration.as_secs_f64())
    }

    pub fn is_settled(&self, now: Instant) -> bool {
        match self.started {
            Some(start) => {
                now.saturating_duration_since(start) >= self.delay.saturating_add(self.duration)
            }
            None => false,
        }
    }
}
