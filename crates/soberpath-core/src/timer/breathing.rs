//! Guided breathing exercise.
//!
//! ## State Transitions
//!
//! ```text
//!            start                 every `phase_secs` ticks
//! Stopped ─────────> Inhale ──> Hold ──> Exhale ──> Inhale ...
//!    ^                  │         │         │
//!    └──────────────────┴─────────┴─────────┘ stop
//! ```
//!
//! One tick is one second. Stopping always returns to `Inhale` with a full
//! phase remaining.

use chrono::Utc;
use serde::{Deserialize, Serialize};

use super::{Session, SessionKind};
use crate::events::Event;

pub const DEFAULT_PHASE_SECS: u32 = 4;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum BreathPhase {
    Inhale,
    Hold,
    Exhale,
}

impl BreathPhase {
    pub fn next(self) -> Self {
        match self {
            BreathPhase::Inhale => BreathPhase::Hold,
            BreathPhase::Hold => BreathPhase::Exhale,
            BreathPhase::Exhale => BreathPhase::Inhale,
        }
    }

    pub fn instruction(self) -> &'static str {
        match self {
            BreathPhase::Inhale => "Breathe In",
            BreathPhase::Hold => "Hold",
            BreathPhase::Exhale => "Breathe Out",
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct BreathingSession {
    phase_secs: u32,
    active: bool,
    phase: BreathPhase,
    remaining_secs: u32,
    /// Full inhale-hold-exhale cycles finished since start.
    cycles_completed: u32,
}

impl BreathingSession {
    /// `phase_secs` below 1 is raised to 1.
    pub fn new(phase_secs: u32) -> Self {
        let phase_secs = phase_secs.max(1);
        Self {
            phase_secs,
            active: false,
            phase: BreathPhase::Inhale,
            remaining_secs: phase_secs,
            cycles_completed: 0,
        }
    }

    // ── Queries ──────────────────────────────────────────────────────

    pub fn is_active(&self) -> bool {
        self.active
    }

    pub fn phase(&self) -> BreathPhase {
        self.phase
    }

    pub fn remaining_secs(&self) -> u32 {
        self.remaining_secs
    }

    pub fn phase_secs(&self) -> u32 {
        self.phase_secs
    }

    pub fn cycles_completed(&self) -> u32 {
        self.cycles_completed
    }

    /// Ticks in one full inhale-hold-exhale cycle.
    pub fn cycle_ticks(&self) -> u32 {
        self.phase_secs * 3
    }

    pub fn snapshot(&self) -> Event {
        Event::BreathingSnapshot {
            active: self.active,
            phase: self.phase,
            instruction: self.phase.instruction().to_string(),
            remaining_secs: self.remaining_secs,
            cycles_completed: self.cycles_completed,
            at: Utc::now(),
        }
    }

    // ── Commands ─────────────────────────────────────────────────────

    /// Returns `None` if already running.
    pub fn start(&mut self) -> Option<Event> {
        if self.active {
            return None;
        }
        self.reset();
        self.active = true;
        tracing::info!(phase_secs = self.phase_secs, "breathing session started");
        Some(Event::SessionStarted {
            session: SessionKind::Breathing,
            remaining_secs: self.remaining_secs,
            at: Utc::now(),
        })
    }

    /// Always resets to the initial display state. Returns `None` if the
    /// session was not running.
    pub fn stop(&mut self) -> Option<Event> {
        let was_active = self.active;
        self.active = false;
        self.phase = BreathPhase::Inhale;
        self.remaining_secs = self.phase_secs;
        if !was_active {
            return None;
        }
        tracing::info!(cycles = self.cycles_completed, "breathing session stopped");
        Some(Event::SessionStopped {
            session: SessionKind::Breathing,
            at: Utc::now(),
        })
    }

    /// Advance one second. Returns `Some(Event::PhaseChanged)` on a phase
    /// boundary; ticks while stopped are ignored.
    pub fn tick(&mut self) -> Option<Event> {
        if !self.active {
            return None;
        }
        self.remaining_secs = self.remaining_secs.saturating_sub(1);
        if self.remaining_secs > 0 {
            return None;
        }

        self.phase = self.phase.next();
        self.remaining_secs = self.phase_secs;
        if self.phase == BreathPhase::Inhale {
            self.cycles_completed += 1;
        }
        tracing::debug!(phase = ?self.phase, cycles = self.cycles_completed, "breathing phase changed");
        Some(Event::PhaseChanged {
            phase: self.phase,
            remaining_secs: self.remaining_secs,
            cycles_completed: self.cycles_completed,
            at: Utc::now(),
        })
    }

    // ── Internal ─────────────────────────────────────────────────────

    fn reset(&mut self) {
        self.phase = BreathPhase::Inhale;
        self.remaining_secs = self.phase_secs;
        self.cycles_completed = 0;
    }
}

impl Default for BreathingSession {
    fn default() -> Self {
        Self::new(DEFAULT_PHASE_SECS)
    }
}

impl Session for BreathingSession {
    fn kind(&self) -> SessionKind {
        SessionKind::Breathing
    }

    fn begin(&mut self) -> Option<Event> {
        self.start()
    }

    fn end(&mut self) -> Option<Event> {
        self.stop()
    }

    fn tick(&mut self) -> Option<Event> {
        BreathingSession::tick(self)
    }

    fn is_active(&self) -> bool {
        self.active
    }

    fn snapshot(&self) -> Event {
        BreathingSession::snapshot(self)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn twelve_ticks_is_one_full_cycle() {
        let mut session = BreathingSession::default();
        session.start();
        for _ in 0..12 {
            session.tick();
        }
        assert_eq!(session.phase(), BreathPhase::Inhale);
        assert_eq!(session.remaining_secs(), 4);
        assert_eq!(session.cycles_completed(), 1);
    }

    #[test]
    fn phase_changes_every_four_ticks() {
        let mut session = BreathingSession::default();
        session.start();
        for _ in 0..3 {
            assert!(session.tick().is_none());
        }
        assert_eq!(session.remaining_secs(), 1);
        match session.tick() {
            Some(Event::PhaseChanged { phase, remaining_secs, .. }) => {
                assert_eq!(phase, BreathPhase::Hold);
                assert_eq!(remaining_secs, 4);
            }
            other => panic!("Expected PhaseChanged, got {other:?}"),
        }
    }

    #[test]
    fn stop_resets_to_initial_display_state() {
        let mut session = BreathingSession::default();
        session.start();
        for _ in 0..6 {
            session.tick();
        }
        assert_eq!(session.phase(), BreathPhase::Hold);
        assert!(session.stop().is_some());
        assert!(!session.is_active());
        assert_eq!(session.phase(), BreathPhase::Inhale);
        assert_eq!(session.remaining_secs(), 4);
        assert!(session.stop().is_none());
    }

    #[test]
    fn ticks_while_stopped_are_ignored() {
        let mut session = BreathingSession::default();
        assert!(session.tick().is_none());
        assert_eq!(session.remaining_secs(), 4);
    }

    #[test]
    fn start_twice_is_noop() {
        let mut session = BreathingSession::default();
        assert!(session.start().is_some());
        session.tick();
        assert!(session.start().is_none());
        assert_eq!(session.remaining_secs(), 3);
    }

    #[test]
    fn zero_phase_length_is_clamped() {
        let mut session = BreathingSession::new(0);
        session.start();
        assert!(session.tick().is_some());
        assert_eq!(session.phase(), BreathPhase::Hold);
    }

    #[test]
    fn snapshot_carries_instruction() {
        let session = BreathingSession::default();
        match session.snapshot() {
            Event::BreathingSnapshot { instruction, active, .. } => {
                assert_eq!(instruction, "Breathe In");
                assert!(!active);
            }
            _ => panic!("Expected BreathingSnapshot"),
        }
    }
}
