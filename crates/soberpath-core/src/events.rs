use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::timer::{BreathPhase, GameState, SessionKind};
use crate::tracker::ItemId;

/// Every effective state change in the core produces an Event.
/// No-ops (unknown ids, ticks while stopped) produce none.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "snake_case")]
pub enum Event {
    ItemAdded {
        item_id: ItemId,
        title: String,
        at: DateTime<Utc>,
    },
    ItemToggled {
        item_id: ItemId,
        completed: bool,
        at: DateTime<Utc>,
    },
    ItemRemoved {
        item_id: ItemId,
        title: String,
        at: DateTime<Utc>,
    },
    SessionStarted {
        session: SessionKind,
        remaining_secs: u32,
        at: DateTime<Utc>,
    },
    SessionStopped {
        session: SessionKind,
        at: DateTime<Utc>,
    },
    /// Breathing exercise moved to its next phase.
    PhaseChanged {
        phase: BreathPhase,
        remaining_secs: u32,
        cycles_completed: u32,
        at: DateTime<Utc>,
    },
    /// Tap game ran out of time and the score was finalized.
    GameFinished {
        score: u32,
        high_score: u32,
        new_high_score: bool,
        at: DateTime<Utc>,
    },
    BreathingSnapshot {
        active: bool,
        phase: BreathPhase,
        instruction: String,
        remaining_secs: u32,
        cycles_completed: u32,
        at: DateTime<Utc>,
    },
    TapGameSnapshot {
        state: GameState,
        remaining_secs: u32,
        tap_count: u32,
        streak: u32,
        total_taps: u32,
        high_score: u32,
        at: DateTime<Utc>,
    },
}
