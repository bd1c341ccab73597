//! Day counter, money saved and time recovered since the quit date.

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

use super::milestones::{milestone_progress, MilestoneProgress};

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SobrietyCounter {
    pub quit_date: NaiveDate,
    /// Money no longer spent per day.
    pub daily_spend: f64,
    /// Minutes per day the habit used to take.
    pub daily_minutes: u32,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct TimeRecovered {
    pub hours: u64,
    pub minutes: u64,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SobrietyStats {
    pub days_sober: u32,
    pub money_saved: f64,
    pub time_recovered: TimeRecovered,
}

impl SobrietyCounter {
    pub fn new(quit_date: NaiveDate, daily_spend: f64, daily_minutes: u32) -> Self {
        Self {
            quit_date,
            daily_spend,
            daily_minutes,
        }
    }

    /// Whole days since the quit date; 0 before it.
    pub fn days_sober(&self, today: NaiveDate) -> u32 {
        let days = (today - self.quit_date).num_days();
        u32::try_from(days.max(0)).unwrap_or(u32::MAX)
    }

    pub fn stats_on(&self, today: NaiveDate) -> SobrietyStats {
        let days_sober = self.days_sober(today);
        let total_minutes = u64::from(days_sober) * u64::from(self.daily_minutes);
        SobrietyStats {
            days_sober,
            money_saved: f64::from(days_sober) * self.daily_spend.max(0.0),
            time_recovered: TimeRecovered {
                hours: total_minutes / 60,
                minutes: total_minutes % 60,
            },
        }
    }

    pub fn milestones_on(&self, today: NaiveDate, thresholds: &[u32]) -> MilestoneProgress {
        milestone_progress(self.days_sober(today), thresholds)
    }
}
