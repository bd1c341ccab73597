//! Tap-counter distraction game.
//!
//! ## State Transitions
//!
//! ```text
//!        start                      remaining hits 0
//! Idle ─────────> Running ────────────────────────────> Idle (score finalized)
//!                    │ abandon
//!                    └──────────────> Idle (no score)
//! ```
//!
//! Taps only count while running. The high score and lifetime tap total
//! survive between rounds until `reset_stats`.

use chrono::Utc;
use serde::{Deserialize, Serialize};

use super::{Session, SessionKind};
use crate::events::Event;

pub const DEFAULT_SESSION_SECS: u32 = 30;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum GameState {
    Idle,
    Running,
}

/// Streak-based encouragement tier.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Encouragement {
    Starting,
    GoodRhythm,
    KeepGoing,
    AmazingStreak,
    OnFire,
}

impl Encouragement {
    pub fn for_streak(streak: u32) -> Self {
        if streak >= 50 {
            Encouragement::OnFire
        } else if streak >= 25 {
            Encouragement::AmazingStreak
        } else if streak >= 10 {
            Encouragement::KeepGoing
        } else if streak >= 5 {
            Encouragement::GoodRhythm
        } else {
            Encouragement::Starting
        }
    }

    pub fn message(&self) -> &'static str {
        match self {
            Encouragement::Starting => "Tap away the craving!",
            Encouragement::GoodRhythm => "Good rhythm!",
            Encouragement::KeepGoing => "Keep it going!",
            Encouragement::AmazingStreak => "Amazing streak!",
            Encouragement::OnFire => "You're on fire!",
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct TapGame {
    session_secs: u32,
    state: GameState,
    remaining_secs: u32,
    tap_count: u32,
    streak: u32,
    total_taps: u32,
    high_score: u32,
}

impl TapGame {
    /// `session_secs` below 1 is raised to 1.
    pub fn new(session_secs: u32) -> Self {
        let session_secs = session_secs.max(1);
        Self {
            session_secs,
            state: GameState::Idle,
            remaining_secs: session_secs,
            tap_count: 0,
            streak: 0,
            total_taps: 0,
            high_score: 0,
        }
    }

    /// Carry a previously stored high score into a fresh game.
    pub fn with_high_score(mut self, high_score: u32) -> Self {
        self.high_score = high_score;
        self
    }

    // ── Queries ──────────────────────────────────────────────────────

    pub fn state(&self) -> GameState {
        self.state
    }

    pub fn is_running(&self) -> bool {
        self.state == GameState::Running
    }

    pub fn remaining_secs(&self) -> u32 {
        self.remaining_secs
    }

    pub fn session_secs(&self) -> u32 {
        self.session_secs
    }

    pub fn tap_count(&self) -> u32 {
        self.tap_count
    }

    pub fn streak(&self) -> u32 {
        self.streak
    }

    pub fn total_taps(&self) -> u32 {
        self.total_taps
    }

    pub fn high_score(&self) -> u32 {
        self.high_score
    }

    pub fn encouragement(&self) -> Encouragement {
        Encouragement::for_streak(self.streak)
    }

    pub fn snapshot(&self) -> Event {
        Event::TapGameSnapshot {
            state: self.state,
            remaining_secs: self.remaining_secs,
            tap_count: self.tap_count,
            streak: self.streak,
            total_taps: self.total_taps,
            high_score: self.high_score,
            at: Utc::now(),
        }
    }

    // ── Commands ─────────────────────────────────────────────────────

    /// Returns `None` if a round is already running.
    pub fn start(&mut self) -> Option<Event> {
        if self.is_running() {
            return None;
        }
        self.state = GameState::Running;
        self.remaining_secs = self.session_secs;
        self.tap_count = 0;
        self.streak = 0;
        tracing::info!(session_secs = self.session_secs, "tap game started");
        Some(Event::SessionStarted {
            session: SessionKind::TapGame,
            remaining_secs: self.remaining_secs,
            at: Utc::now(),
        })
    }

    /// Count one tap. Returns `false` (and changes nothing) while idle.
    pub fn tap(&mut self) -> bool {
        if !self.is_running() {
            return false;
        }
        self.tap_count = self.tap_count.saturating_add(1);
        self.streak = self.streak.saturating_add(1);
        self.total_taps = self.total_taps.saturating_add(1);
        true
    }

    /// Advance one second. Returns `Some(Event::GameFinished)` when time
    /// runs out.
    pub fn tick(&mut self) -> Option<Event> {
        if !self.is_running() {
            return None;
        }
        self.remaining_secs = self.remaining_secs.saturating_sub(1);
        if self.remaining_secs > 0 {
            return None;
        }
        Some(self.finish())
    }

    /// End a running round early without scoring it.
    pub fn abandon(&mut self) -> Option<Event> {
        if !self.is_running() {
            return None;
        }
        self.state = GameState::Idle;
        self.remaining_secs = self.session_secs;
        self.streak = 0;
        tracing::info!(taps = self.tap_count, "tap game abandoned");
        Some(Event::SessionStopped {
            session: SessionKind::TapGame,
            at: Utc::now(),
        })
    }

    /// Zero the high score, lifetime total, current count and streak.
    pub fn reset_stats(&mut self) {
        self.high_score = 0;
        self.total_taps = 0;
        self.tap_count = 0;
        self.streak = 0;
    }

    // ── Internal ─────────────────────────────────────────────────────

    fn finish(&mut self) -> Event {
        self.state = GameState::Idle;
        let score = self.tap_count;
        let new_high_score = score > self.high_score;
        if new_high_score {
            self.high_score = score;
        }
        tracing::info!(score, high_score = self.high_score, new_high_score, "tap game finished");
        Event::GameFinished {
            score,
            high_score: self.high_score,
            new_high_score,
            at: Utc::now(),
        }
    }
}

impl Default for TapGame {
    fn default() -> Self {
        Self::new(DEFAULT_SESSION_SECS)
    }
}

impl Session for TapGame {
    fn kind(&self) -> SessionKind {
        SessionKind::TapGame
    }

    fn begin(&mut self) -> Option<Event> {
        self.start()
    }

    fn end(&mut self) -> Option<Event> {
        self.abandon()
    }

    fn tick(&mut self) -> Option<Event> {
        TapGame::tick(self)
    }

    fn is_active(&self) -> bool {
        self.is_running()
    }

    fn snapshot(&self) -> Event {
        TapGame::snapshot(self)
    }
}
