//! # SoberPath Core Library
//!
//! This library provides the core logic behind the SoberPath recovery
//! companion. Every operation is available through the standalone CLI; any
//! future front end is a thin layer over the same library.
//!
//! ## Architecture
//!
//! - **Trackers**: Ordered, id-keyed item lists with copy-on-write snapshots
//!   and change notification
//! - **Progress**: Pure aggregation over tracker snapshots and day counts
//! - **Timers**: Tick-driven session state machines paced by a pluggable
//!   scheduler, with an async driver for the tokio runtime
//! - **Storage**: TOML-based configuration
//!
//! ## Key Components
//!
//! - [`ItemStore`]: Tracked collection of goals, habits or checklist entries
//! - [`ProgressSnapshot`]: Completion summary derived from a store
//! - [`BreathingSession`] / [`TapGame`]: Guided-exercise and game timers
//! - [`SessionController`]: Pairs a session with a [`Scheduler`]
//! - [`ContactBook`] / [`ReminderSet`]: Emergency contacts and reminder setup
//! - [`Config`]: Application configuration management

#[macro_use]
mod macros;

pub mod error;
pub mod events;
pub mod journal;
pub mod logging;
pub mod observer;
pub mod onboarding;
pub mod progress;
pub mod seeds;
pub mod storage;
pub mod support;
pub mod timer;
pub mod tracker;

pub use error::{ConfigError, CoreError, Result, ValidationError};
pub use events::Event;
pub use journal::{Journal, JournalEntry, Mood};
pub use observer::{Subscribers, SubscriptionId};
pub use onboarding::{AddictionType, AppState, OnboardingData, OnboardingFlow, OnboardingStep, SupportStyle};
pub use progress::{
    milestone_progress, percentage, summarize, MilestoneProgress, MilestoneRef, ProgressBand,
    ProgressSnapshot, SobrietyCounter, SobrietyStats,
};
pub use storage::Config;
pub use support::{Contact, ContactBook, Relationship, Reminder, ReminderSet};
pub use timer::{
    drive, BreathPhase, BreathingSession, DriveOutcome, GameState, IntervalScheduler,
    ManualScheduler, Scheduler, Session, SessionController, SessionKind, StopReason, TapGame,
};
pub use tracker::{
    ChecklistCategory, ChecklistEntry, Goal, GoalCategory, Habit, InsertPosition, ItemDraft,
    ItemId, ItemStore, Snapshot, TargetValue, Trackable, TrackableItem,
};
