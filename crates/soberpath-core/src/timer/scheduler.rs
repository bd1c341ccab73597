//! Tick sources for session controllers.
//!
//! A scheduler does not call back into the session. It only reports how many
//! ticks became due since it was last asked; the controller applies them.
//! This keeps the phase machines free of clocks and lets tests substitute
//! [`ManualScheduler`].

use std::time::Duration;
use tokio::time::Instant;

/// Repeating interval abstraction.
pub trait Scheduler {
    /// Begin producing ticks every `interval`. Restarting discards any
    /// undelivered ticks.
    fn start(&mut self, interval: Duration);

    /// Halt. After this returns, `due_ticks` yields 0 until the next `start`.
    fn stop(&mut self);

    fn is_active(&self) -> bool;

    /// Ticks that became due since the previous call.
    fn due_ticks(&mut self) -> u32;
}

/// Test scheduler: ticks happen only when `advance` says so.
#[derive(Debug, Default)]
pub struct ManualScheduler {
    interval: Option<Duration>,
    pending: u32,
}

impl ManualScheduler {
    pub fn new() -> Self {
        Self::default()
    }

    /// Queue `ticks` ticks. Ignored while stopped.
    pub fn advance(&mut self, ticks: u32) {
        if self.interval.is_some() {
            self.pending = self.pending.saturating_add(ticks);
        }
    }

    pub fn interval(&self) -> Option<Duration> {
        self.interval
    }
}

impl Scheduler for ManualScheduler {
    fn start(&mut self, interval: Duration) {
        self.interval = Some(interval);
        self.pending = 0;
    }

    fn stop(&mut self) {
        self.interval = None;
        self.pending = 0;
    }

    fn is_active(&self) -> bool {
        self.interval.is_some()
    }

    fn due_ticks(&mut self) -> u32 {
        std::mem::take(&mut self.pending)
    }
}

/// Wall-clock scheduler counting whole intervals elapsed since `start`.
///
/// Built on `tokio::time::Instant`, so paused tokio test clocks drive it too.
#[derive(Debug, Default)]
pub struct IntervalScheduler {
    interval: Option<Duration>,
    started_at: Option<Instant>,
    delivered: u64,
}

impl IntervalScheduler {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn due_ticks_at(&mut self, now: Instant) -> u32 {
        let (Some(interval), Some(started_at)) = (self.interval, self.started_at) else {
            return 0;
        };
        let elapsed = now.saturating_duration_since(started_at).as_nanos();
        let total = (elapsed / interval.as_nanos()) as u64;
        let due = total.saturating_sub(self.delivered);
        self.delivered = total;
        u32::try_from(due).unwrap_or(u32::MAX)
    }

    fn start_at(&mut self, interval: Duration, now: Instant) {
        // A zero interval would divide by zero.
        self.interval = Some(interval.max(Duration::from_millis(1)));
        self.started_at = Some(now);
        self.delivered = 0;
    }
}

impl Scheduler for IntervalScheduler {
    fn start(&mut self, interval: Duration) {
        self.start_at(interval, Instant::now());
    }

    fn stop(&mut self) {
        self.interval = None;
        self.started_at = None;
        self.delivered = 0;
    }

    fn is_active(&self) -> bool {
        self.interval.is_some()
    }

    fn due_ticks(&mut self) -> u32 {
        self.due_ticks_at(Instant::now())
    }
}
