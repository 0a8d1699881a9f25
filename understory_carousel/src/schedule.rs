// Copyright 2025 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Scheduled tasks: the auto-advance interval and the resize debounce.
//!
//! ## Overview
//!
//! Neither task owns a clock. The host passes a monotonic `now` (time since
//! any fixed origin) and polls; each task reports whether it fired. Ask
//! [`Scheduler::next_deadline`] when the next poll is useful.
//!
//! ```
//! use core::time::Duration;
//! use understory_carousel::schedule::Debounce;
//!
//! let ms = Duration::from_millis;
//! let mut d = Debounce::new(ms(250));
//! d.trigger(ms(0));
//! d.trigger(ms(100)); // restarts the quiet period
//! assert!(!d.poll(ms(300)));
//! assert!(d.poll(ms(350)));
//! assert!(!d.poll(ms(400)));
//! ```

use core::time::Duration;

/// A recurring task with a fixed period.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub struct Interval {
    period: Duration,
    next_due: Duration,
}

impl Interval {
    /// Start an interval whose first tick is due one period after `now`.
    pub fn start(period: Duration, now: Duration) -> Self {
        Self {
            period,
            next_due: now.saturating_add(period),
        }
    }

    /// The configured period.
    pub fn period(&self) -> Duration {
        self.period
    }

    /// When the next tick is due.
    pub fn deadline(&self) -> Duration {
        self.next_due
    }

    /// Consume the due tick, if any.
    ///
    /// A late poll fires once and moves the deadline to the first period
    /// boundary after `now`; ticks missed while the host was idle are dropped.
    pub fn poll(&mut self, now: Duration) -> bool {
        if self.period.is_zero() || now < self.next_due {
            return false;
        }
        let late = (now - self.next_due).as_nanos();
        let into_period = late % self.period.as_nanos();
        let since_boundary = Duration::from_nanos(u64::try_from(into_period).unwrap_or(u64::MAX));
        self.next_due = now.saturating_sub(since_boundary).saturating_add(self.period);
        true
    }
}

/// A trailing-edge debounce: fires once after triggers stop for `wait`.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub struct Debounce {
    wait: Duration,
    deadline: Option<Duration>,
}

impl Debounce {
    /// An idle debounce with the given quiet period.
    pub fn new(wait: Duration) -> Self {
        Self {
            wait,
            deadline: None,
        }
    }

    /// Restart the quiet period from `now`.
    pub fn trigger(&mut self, now: Duration) {
        self.deadline = Some(now.saturating_add(self.wait));
    }

    /// Fire if the quiet period has elapsed.
    pub fn poll(&mut self, now: Duration) -> bool {
        match self.deadline {
            Some(due) if now >= due => {
                self.deadline = None;
                true
            }
            _ => false,
        }
    }

    /// Drop a pending trigger.
    pub fn cancel(&mut self) {
        self.deadline = None;
    }

    /// When the pending trigger fires, if one is pending.
    pub fn deadline(&self) -> Option<Duration> {
        self.deadline
    }

    /// Replace the quiet period. A pending trigger keeps its deadline.
    pub fn set_wait(&mut self, wait: Duration) {
        self.wait = wait;
    }
}

/// Which scheduled task fired.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub enum Task {
    /// The resize debounce settled.
    Resize,
    /// An auto-advance tick.
    AutoAdvance,
}

/// The two tasks owned by one carousel.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Scheduler {
    auto_advance: Option<Interval>,
    resize: Debounce,
}

impl Scheduler {
    /// An idle scheduler with the given resize quiet period.
    pub fn new(resize_debounce: Duration) -> Self {
        Self {
            auto_advance: None,
            resize: Debounce::new(resize_debounce),
        }
    }

    /// Clear any running interval and start a new one when `period` is set.
    pub fn restart_auto_advance(&mut self, period: Option<Duration>, now: Duration) {
        self.auto_advance = period.map(|p| Interval::start(p, now));
    }

    /// The running auto-advance interval, if any.
    pub fn auto_advance(&self) -> Option<&Interval> {
        self.auto_advance.as_ref()
    }

    /// Restart the resize quiet period.
    pub fn trigger_resize(&mut self, now: Duration) {
        self.resize.trigger(now);
    }

    /// Replace the resize quiet period.
    pub fn set_resize_debounce(&mut self, wait: Duration) {
        self.resize.set_wait(wait);
    }

    /// True while a resize is waiting to settle.
    pub fn resize_pending(&self) -> bool {
        self.resize.deadline().is_some()
    }

    /// Pop the next task due at `now`.
    ///
    /// A settled resize is always returned before an auto-advance tick, so
    /// layout is recomputed before any offset that depends on it.
    pub fn poll(&mut self, now: Duration) -> Option<Task> {
        if self.resize.poll(now) {
            return Some(Task::Resize);
        }
        if let Some(interval) = self.auto_advance.as_mut()
            && interval.poll(now)
        {
            return Some(Task::AutoAdvance);
        }
        None
    }

    /// Earliest deadline among pending tasks.
    pub fn next_deadline(&self) -> Option<Duration> {
        let tick = self.auto_advance.map(|i| i.deadline());
        match (self.resize.deadline(), tick) {
            (Some(a), Some(b)) => Some(a.min(b)),
            (a, b) => a.or(b),
        }
    }

    /// Cancel both tasks.
    pub fn cancel_all(&mut self) {
        self.auto_advance = None;
        self.resize.cancel();
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use alloc::vec;
    use alloc::vec::Vec;

    fn ms(v: u64) -> Duration {
        Duration::from_millis(v)
    }

    #[test]
    fn interval_fires_once_per_period() {
        let mut i = Interval::start(ms(100), ms(0));
        assert!(!i.poll(ms(99)));
        assert!(i.poll(ms(100)));
        assert!(!i.poll(ms(150)));
        assert!(i.poll(ms(200)));
        assert_eq!(i.deadline(), ms(300));
    }

    #[test]
    fn late_poll_fires_once_and_realigns_to_period() {
        let mut i = Interval::start(ms(100), ms(0));
        let mut fired = 0;
        while i.poll(ms(350)) {
            fired += 1;
        }
        assert_eq!(fired, 1);
        assert_eq!(i.deadline(), ms(400));
    }

    #[test]
    fn tiny_period_after_long_stall_fires_once() {
        let mut i = Interval::start(Duration::from_micros(1), ms(0));
        let mut fired = 0;
        while i.poll(Duration::from_secs(1)) {
            fired += 1;
        }
        assert_eq!(fired, 1);
        assert_eq!(i.deadline(), Duration::from_secs(1) + Duration::from_micros(1));
    }

    #[test]
    fn debounce_collapses_bursts() {
        let mut d = Debounce::new(ms(250));
        for t in [0, 50, 100, 150] {
            d.trigger(ms(t));
        }
        assert!(!d.poll(ms(399)));
        assert!(d.poll(ms(400)));
        assert!(!d.poll(ms(1000)));
    }

    #[test]
    fn scheduler_orders_resize_before_tick() {
        let mut s = Scheduler::new(ms(50));
        s.restart_auto_advance(Some(ms(100)), ms(0));
        s.trigger_resize(ms(60));
        let mut order = Vec::new();
        while let Some(task) = s.poll(ms(120)) {
            order.push(task);
        }
        assert_eq!(order, vec![Task::Resize, Task::AutoAdvance]);
    }

    #[test]
    fn scheduler_reports_earliest_deadline() {
        let mut s = Scheduler::new(ms(250));
        assert_eq!(s.next_deadline(), None);
        s.restart_auto_advance(Some(ms(1000)), ms(0));
        assert_eq!(s.next_deadline(), Some(ms(1000)));
        s.trigger_resize(ms(10));
        assert_eq!(s.next_deadline(), Some(ms(260)));
    }

    #[test]
    fn cancel_all_clears_both_tasks() {
        let mut s = Scheduler::new(ms(250));
        s.restart_auto_advance(Some(ms(100)), ms(0));
        s.trigger_resize(ms(0));
        s.cancel_all();
        assert_eq!(s.next_deadline(), None);
        assert_eq!(s.poll(ms(10_000)), None);
        assert!(!s.resize_pending());
    }

    #[test]
    fn disabled_auto_advance_never_fires() {
        let mut s = Scheduler::new(ms(250));
        s.restart_auto_advance(None, ms(0));
        assert!(s.auto_advance().is_none());
        assert_eq!(s.poll(ms(60_000)), None);
    }
}
