//! Guided-exercise and game timers.
//!
//! Session machines are plain state: they advance only when `tick()` is
//! called and never read a clock. A [`SessionController`] pairs one with a
//! [`Scheduler`] that decides when ticks are due, and [`drive`] paces a
//! controller on the tokio runtime.

mod breathing;
mod controller;
mod driver;
mod scheduler;
mod tap_game;

use serde::{Deserialize, Serialize};

use crate::events::Event;

pub use breathing::{BreathPhase, BreathingSession, DEFAULT_PHASE_SECS};
pub use controller::SessionController;
pub use driver::{drive, DriveOutcome, StopReason};
pub use scheduler::{IntervalScheduler, ManualScheduler, Scheduler};
pub use tap_game::{Encouragement, GameState, TapGame, DEFAULT_SESSION_SECS};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum SessionKind {
    Breathing,
    TapGame,
}

/// A tick-driven session state machine.
pub trait Session {
    fn kind(&self) -> SessionKind;

    /// Enter the running state. `None` if already running.
    fn begin(&mut self) -> Option<Event>;

    /// Leave the running state early. `None` if not running.
    fn end(&mut self) -> Option<Event>;

    /// Apply one tick. Must be a no-op while inactive.
    fn tick(&mut self) -> Option<Event>;

    fn is_active(&self) -> bool;

    fn snapshot(&self) -> Event;
}
