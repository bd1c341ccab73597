//! Pure aggregation from an item slice to a [`ProgressSnapshot`].
//!
//! Every function here is deterministic: the same slice yields the same
//! snapshot. An empty selection has a percentage of 0, not an error.

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

use crate::tracker::{ItemId, TargetValue, Trackable};

/// Derived, read-only progress summary.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ProgressSnapshot {
    pub completed_count: usize,
    pub total_count: usize,
    /// 0..=100, rounded half up.
    pub percentage: u8,
    pub next_milestone: Option<MilestoneRef>,
}

impl ProgressSnapshot {
    pub fn remaining_count(&self) -> usize {
        self.total_count.saturating_sub(self.completed_count)
    }

    /// True only for a non-empty selection with every item done.
    pub fn is_complete(&self) -> bool {
        self.total_count > 0 && self.completed_count == self.total_count
    }

    pub fn band(&self) -> ProgressBand {
        ProgressBand::from_percentage(self.percentage)
    }
}

/// The incomplete item with the lowest target.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct MilestoneRef {
    pub id: ItemId,
    pub title: String,
    pub target: TargetValue,
}

/// `round(100 * completed / total)` with halves rounded up; 0 when `total == 0`.
///
/// `completed` is clamped to `total`, so the result never exceeds 100.
pub fn percentage(completed: usize, total: usize) -> u8 {
    if total == 0 {
        return 0;
    }
    let completed = completed.min(total) as u64;
    let total = total as u64;
    ((200 * completed + total) / (2 * total)) as u8
}

pub fn summarize<T: Trackable>(items: &[T]) -> ProgressSnapshot {
    summarize_where(items, |_| true)
}

pub fn summarize_category<T: Trackable>(items: &[T], category: &T::Category) -> ProgressSnapshot {
    summarize_where(items, |item| item.category() == Some(category))
}

/// Summarize the items accepted by `filter`.
pub fn summarize_where<T, F>(items: &[T], filter: F) -> ProgressSnapshot
where
    T: Trackable,
    F: Fn(&T) -> bool,
{
    let mut total_count = 0;
    let mut completed_count = 0;
    let mut next: Option<&T> = None;

    for item in items.iter().filter(|item| filter(*item)) {
        total_count += 1;
        if item.is_completed() {
            completed_count += 1;
            continue;
        }
        let Some(target) = item.target() else {
            continue;
        };
        // Strict `<` keeps the earliest item on ties.
        if next.and_then(|best| best.target()).map_or(true, |best| target < best) {
            next = Some(item);
        }
    }

    ProgressSnapshot {
        completed_count,
        total_count,
        percentage: percentage(completed_count, total_count),
        next_milestone: next.and_then(|item| {
            item.target().map(|target| MilestoneRef {
                id: item.id().clone(),
                title: item.title().to_string(),
                target: *target,
            })
        }),
    }
}

/// One snapshot per category, in the order categories first appear.
/// Uncategorized items are skipped.
pub fn summarize_by_category<T: Trackable>(items: &[T]) -> Vec<(T::Category, ProgressSnapshot)> {
    let mut categories: Vec<T::Category> = Vec::new();
    for category in items.iter().filter_map(|item| item.category()) {
        if !categories.contains(category) {
            categories.push(category.clone());
        }
    }
    categories
        .into_iter()
        .map(|category| {
            let snapshot = summarize_category(items, &category);
            (category, snapshot)
        })
        .collect()
}

/// Rounded mean of per-goal percentages; 0 for an empty slice.
pub fn average_percentage(values: &[u8]) -> u8 {
    if values.is_empty() {
        return 0;
    }
    let n = values.len() as u64;
    let sum: u64 = values.iter().map(|&v| u64::from(v.min(100))).sum();
    ((2 * sum + n) / (2 * n)) as u8
}

/// Whole days from `today` until `target`; negative once overdue.
pub fn days_until(target: NaiveDate, today: NaiveDate) -> i64 {
    (target - today).num_days()
}

/// Coarse progress grading for display.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ProgressBand {
    /// Under 40%.
    Starting,
    /// 40% and up.
    Building,
    /// 60% and up.
    Steady,
    /// 80% and up.
    OnTrack,
}

impl ProgressBand {
    pub fn from_percentage(percentage: u8) -> Self {
        if percentage >= 80 {
            ProgressBand::OnTrack
        } else if percentage >= 60 {
            ProgressBand::Steady
        } else if percentage >= 40 {
            ProgressBand::Building
        } else {
            ProgressBand::Starting
        }
    }
}

/// Encouragement line shown next to a progress value.
pub fn encouragement(percentage: u8) -> &'static str {
    if percentage >= 90 {
        "Almost there!"
    } else if percentage >= 80 {
        "Great progress!"
    } else if percentage >= 60 {
        "Good momentum!"
    } else if percentage >= 40 {
        "Keep going!"
    } else {
        "Just getting started!"
    }
}
