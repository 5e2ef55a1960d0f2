//! Fixed-period timer driven by an injected clock.
//!
//! Every timed primitive owns one of these. Nothing runs in the background:
//! the owner polls with the current `Instant` and receives the number of
//! periods that elapsed since the previous poll.

use std::time::{Duration, Instant};

use crate::{Error, Result};

#[derive(Debug, Clone)]
pub struct Interval {
    period: Duration,
    /// Set on `start`; `None` while idle
    anchor: Option<Instant>,
    /// Periods already reported to the owner
    fired: u64,
    cancelled: bool,
}

impl Interval {
    /// Create an idle interval. A zero period would fire unboundedly and is rejected.
    pub fn new(period: Duration) -> Result<Self> {
        if period.is_zero() {
            return Err(Error::invalid("interval period must be positive"));
        }
        Ok(Self {
            period,
            anchor: None,
            fired: 0,
            cancelled: false,
        })
    }

    /// Begin counting periods from `now`. Restarting an already running
    /// interval is ignored; a cancelled interval stays cancelled.
    pub fn start(&mut self, now: Instant) {
        if self.anchor.is_none() && !self.cancelled {
            self.anchor = Some(now);
        }
    }

    /// Number of whole periods elapsed since the last poll.
    ///
    /// Late polls coalesce: if three periods passed, this returns 3 once.
    pub fn poll(&mut self, now: Instant) -> u64 {
        if self.cancelled {
            return 0;
        }
        let Some(anchor) = self.anchor else {
            return 0;
        };
        let elapsed = now.saturating_duration_since(anchor);
        let total = (elapsed.as_nanos() / self.period.as_nanos()) as u64;
        let due = total.saturating_sub(self.fired);
        self.fired = self.fired.max(total);
        due
    }

    /// Stop the interval for good. Later polls report nothing.
    pub fn cancel(&mut self) {
        self.cancelled = true;
    }

    #[inline]
    pub fn is_running(&self) -> bool {
        self.anchor.is_some() && !self.cancelled
    }

    #[inline]
    pub fn is_cancelled(&self) -> bool {
        self.cancelled
    }

    #[inline]
    pub fn period(&self) -> Duration {
        self.period
    }
}
