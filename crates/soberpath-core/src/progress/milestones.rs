//! Sobriety milestones derived from a day counter.
//!
//! Reaching a milestone is a read-only view (`days >= threshold`); nothing is
//! stored or toggled.

use serde::{Deserialize, Serialize};

use super::aggregate::percentage;

/// Default milestone thresholds in days.
pub const DEFAULT_MILESTONE_DAYS: [u32; 3] = [7, 30, 90];

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct MilestoneStatus {
    pub days: u32,
    pub reached: bool,
    pub days_left: u32,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct MilestoneProgress {
    pub days_sober: u32,
    /// Ascending by threshold, duplicates removed.
    pub milestones: Vec<MilestoneStatus>,
    /// First unreached threshold.
    pub next: Option<u32>,
    /// Progress toward `next`, 100 once every milestone is reached.
    pub percentage_to_next: u8,
}

impl MilestoneProgress {
    pub fn reached_count(&self) -> usize {
        self.milestones.iter().filter(|m| m.reached).count()
    }
}

pub fn milestone_progress(days_sober: u32, thresholds: &[u32]) -> MilestoneProgress {
    let mut sorted = thresholds.to_vec();
    sorted.sort_unstable();
    sorted.dedup();

    let milestones: Vec<MilestoneStatus> = sorted
        .iter()
        .map(|&days| MilestoneStatus {
            days,
            reached: days_sober >= days,
            days_left: days.saturating_sub(days_sober),
        })
        .collect();

    let next = milestones.iter().find(|m| !m.reached).map(|m| m.days);
    let percentage_to_next = match next {
        Some(target) => percentage(days_sober as usize, target as usize),
        None => 100,
    };

    MilestoneProgress {
        days_sober,
        milestones,
        next,
        percentage_to_next,
    }
}
