//! Couples a session machine with a scheduler.
//!
//! ## Usage
//!
//! ```ignore
//! let mut controller = SessionController::new(
//!     BreathingSession::default(),
//!     IntervalScheduler::new(),
//!     Duration::from_secs(1),
//! );
//! controller.start();
//! // In a loop:
//! for event in controller.pump() { /* render */ }
//! ```

use std::time::Duration;

use super::scheduler::Scheduler;
use super::Session;
use crate::events::Event;
use crate::observer::{SubscriptionId, Subscribers};

type SessionListener = dyn FnMut(&Event);

const MIN_INTERVAL: Duration = Duration::from_millis(1);

#[derive(Debug)]
pub struct SessionController<S, K> {
    session: S,
    scheduler: K,
    interval: Duration,
    ticks_applied: u64,
    subscribers: Subscribers<SessionListener>,
}

impl<S: Session, K: Scheduler> SessionController<S, K> {
    /// A zero `interval` is raised to 1ms.
    pub fn new(session: S, scheduler: K, interval: Duration) -> Self {
        Self {
            session,
            scheduler,
            interval: interval.max(MIN_INTERVAL),
            ticks_applied: 0,
            subscribers: Subscribers::new(),
        }
    }

    // ── Queries ──────────────────────────────────────────────────────

    pub fn session(&self) -> &S {
        &self.session
    }

    /// Direct access for user input such as taps.
    pub fn session_mut(&mut self) -> &mut S {
        &mut self.session
    }

    pub fn scheduler(&self) -> &K {
        &self.scheduler
    }

    pub fn scheduler_mut(&mut self) -> &mut K {
        &mut self.scheduler
    }

    pub fn interval(&self) -> Duration {
        self.interval
    }

    /// Ticks applied to the session since this controller was created.
    pub fn ticks_applied(&self) -> u64 {
        self.ticks_applied
    }

    pub fn is_running(&self) -> bool {
        self.session.is_active() && self.scheduler.is_active()
    }

    pub fn snapshot(&self) -> Event {
        self.session.snapshot()
    }

    // ── Commands ─────────────────────────────────────────────────────

    /// Start the session and its ticks. `None` if already running.
    pub fn start(&mut self) -> Option<Event> {
        let event = self.session.begin()?;
        self.scheduler.start(self.interval);
        self.notify(&event);
        Some(event)
    }

    /// Halt ticks, then stop the session. Ticks that accrued before the stop
    /// are discarded, never applied.
    pub fn stop(&mut self) -> Option<Event> {
        self.scheduler.stop();
        let event = self.session.end()?;
        self.notify(&event);
        Some(event)
    }

    /// Apply every tick that is due.
    pub fn pump(&mut self) -> Vec<Event> {
        self.pump_at_most(u32::MAX)
    }

    /// Apply at most `max_ticks` due ticks; any surplus is dropped.
    ///
    /// When the session ends on its own mid-batch, the remaining ticks are
    /// dropped and the scheduler is stopped.
    pub fn pump_at_most(&mut self, max_ticks: u32) -> Vec<Event> {
        if !self.scheduler.is_active() {
            return Vec::new();
        }
        let due = self.scheduler.due_ticks().min(max_ticks);

        let mut events = Vec::new();
        for _ in 0..due {
            if !self.session.is_active() {
                break;
            }
            self.ticks_applied += 1;
            if let Some(event) = self.session.tick() {
                events.push(event);
            }
        }

        if !self.session.is_active() {
            tracing::debug!(session = ?self.session.kind(), "session ended, stopping scheduler");
            self.scheduler.stop();
        }

        for event in &events {
            self.notify(event);
        }
        events
    }

    pub fn subscribe<F>(&mut self, listener: F) -> SubscriptionId
    where
        F: FnMut(&Event) + 'static,
    {
        self.subscribers.add(Box::new(listener))
    }

    pub fn unsubscribe(&mut self, id: SubscriptionId) -> bool {
        self.subscribers.remove(id)
    }

    fn notify(&mut self, event: &Event) {
        for listener in self.subscribers.iter_mut() {
            listener(event);
        }
    }
}
