//! Derived progress statistics.
//!
//! Nothing in here owns state. Callers pass a store snapshot (or a day count)
//! and get back read-only summaries for display.

mod aggregate;
pub mod milestones;
pub mod sobriety;

pub use aggregate::{
    average_percentage, days_until, encouragement, percentage, summarize, summarize_by_category,
    summarize_category, summarize_where, MilestoneRef, ProgressBand, ProgressSnapshot,
};
pub use milestones::{milestone_progress, MilestoneProgress, MilestoneStatus, DEFAULT_MILESTONE_DAYS};
pub use sobriety::{SobrietyCounter, SobrietyStats, TimeRecovered};
