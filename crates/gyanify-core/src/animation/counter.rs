//! Animated numeric counters gated on a visibility signal.
//!
//! A counter waits at 0 until its gate first reports visible, then adds
//! `target / steps` per tick and shows the floor of the running total. The
//! last emitted value is always exactly `target`.

use std::time::{Duration, Instant};

use tracing::debug;

use super::interval::Interval;
use crate::{Error, Result};

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct CounterState {
    pub target: u64,
    pub current: f64,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum CounterPhase {
    /// Waiting for the gate to open
    Waiting,
    Running,
    Complete,
    TornDown,
}

#[derive(Debug, Clone)]
pub struct CounterAnimator {
    target: u64,
    steps: u32,
    increment: f64,
    accumulated: f64,
    ticks: u32,
    emitted: u64,
    timer: Interval,
    phase: CounterPhase,
}

impl CounterAnimator {
    /// Counter reaching `target` in `steps` ticks spread over `total_duration`
    pub fn new(target: i64, total_duration: Duration, steps: u32) -> Result<Self> {
        if target < 0 {
            return Err(Error::invalid(format!(
                "counter target must not be negative, got {}",
                target
            )));
        }
        if steps == 0 {
            return Err(Error::invalid("counter steps must be positive"));
        }
        if total_duration.is_zero() {
            return Err(Error::invalid("counter duration must be positive"));
        }
        let tick = total_duration / steps;
        let timer = Interval::new(tick).map_err(|_| {
            Error::invalid(format!(
                "counter duration {:?} is too short for {} steps",
                total_duration, steps
            ))
        })?;
        let target = target as u64;

        Ok(Self {
            target,
            steps,
            increment: target as f64 / steps as f64,
            accumulated: 0.0,
            ticks: 0,
            emitted: 0,
            timer,
            phase: CounterPhase::Waiting,
        })
    }

    /// Feed the gating signal. Only the first `true` starts the counter;
    /// returns whether this call started it.
    pub fn on_visibility(&mut self, visible: bool, now: Instant) -> bool {
        if !visible || self.phase != CounterPhase::Waiting {
            return false;
        }
        self.timer.start(now);
        self.phase = CounterPhase::Running;
        debug!(goal = self.target, "Counter started");
        true
    }

    /// Apply elapsed ticks; returns the displayed value if any tick fired
    pub fn update(&mut self, now: Instant) -> Option<u64> {
        if self.phase != CounterPhase::Running {
            return None;
        }
        let due = self.timer.poll(now);
        if due == 0 {
            return None;
        }
        for _ in 0..due {
            self.ticks += 1;
            self.accumulated += self.increment;
            if self.accumulated >= self.target as f64 || self.ticks >= self.steps {
                self.finish();
                break;
            }
        }
        self.emitted = (self.accumulated.floor() as u64).min(self.target);
        Some(self.emitted)
    }

    fn finish(&mut self) {
        self.accumulated = self.target as f64;
        self.timer.cancel();
        self.phase = CounterPhase::Complete;
        debug!(goal = self.target, ticks = self.ticks, "Counter complete");
    }

    /// Stop the timer; the displayed value freezes
    pub fn teardown(&mut self) {
        self.timer.cancel();
        self.phase = CounterPhase::TornDown;
    }

    /// Value currently displayed
    #[inline]
    pub fn current(&self) -> u64 {
        self.emitted
    }

    #[inline]
    pub fn target(&self) -> u64 {
        self.target
    }

    pub fn state(&self) -> CounterState {
        CounterState {
            target: self.target,
            current: self.accumulated,
        }
    }

    #[inline]
    pub fn tick_interval(&self) -> Duration {
        self.timer.period()
    }

    #[inline]
    pub fn has_started(&self) -> bool {
        self.phase != CounterPhase::Waiting
    }

    #[inline]
    pub fn is_running(&self) -> bool {
        self.phase == CounterPhase::Running
    }

    #[inline]
    pub fn is_complete(&self) -> bool {
        self.phase == CounterPhase::Complete
    }
}

/// Counters sharing one gate, each on its own timer
#[derive(Debug, Clone, Default)]
pub struct CounterGroup {
    counters: Vec<CounterAnimator>,
}

impl CounterGroup {
    pub fn new(targets: &[i64], total_duration: Duration, steps: u32) -> Result<Self> {
        let counters = targets
            .iter()
            .map(|&target| CounterAnimator::new(target, total_duration, steps))
            .collect::<Result<Vec<_>>>()?;
        Ok(Self { counters })
    }

    pub fn on_visibility(&mut self, visible: bool, now: Instant) -> bool {
        let mut started = false;
        for counter in &mut self.counters {
            started |= counter.on_visibility(visible, now);
        }
        started
    }

    /// Advance every counter; returns whether any displayed value was emitted
    pub fn update(&mut self, now: Instant) -> bool {
        let mut emitted = false;
        for counter in &mut self.counters {
            emitted |= counter.update(now).is_some();
        }
        emitted
    }

    pub fn teardown(&mut self) {
        for counter in &mut self.counters {
            counter.teardown();
        }
    }

    pub fn values(&self) -> Vec<u64> {
        self.counters.iter().map(CounterAnimator::current).collect()
    }

    pub fn get(&self, index: usize) -> Option<&CounterAnimator> {
        self.counters.get(index)
    }

    pub fn len(&self) -> usize {
        self.counters.len()
    }

    pub fn is_empty(&self) -> bool {
        self.counters.is_empty()
    }

    pub fn is_running(&self) -> bool {
        self.counters.iter().any(CounterAnimator::is_running)
    }

    pub fn is_complete(&self) -> bool {
        self.counters.iter().all(CounterAnimator::is_complete)
    }
}
