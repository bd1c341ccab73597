//! Hardcoded starting sets. Each owner seeds its own copy; nothing is shared.

use chrono::NaiveDate;

use crate::error::ValidationError;
pub use crate::progress::DEFAULT_MILESTONE_DAYS;
use crate::support::Reminder;
use crate::tracker::{
    ChecklistCategory, ChecklistEntry, Goal, GoalCategory, InsertPosition, ItemStore, TargetValue,
};

fn deadline(y: i32, m: u32, d: u32) -> Option<TargetValue> {
    NaiveDate::from_ymd_opt(y, m, d).map(TargetValue::Date)
}

pub fn default_goals() -> Vec<Goal> {
    vec![
        Goal {
            target: deadline(2025, 2, 15),
            ..Goal::seeded("1", "30 Days Sober")
                .with_description("Reach my first major milestone")
                .with_category(GoalCategory::Milestone)
        },
        Goal {
            target: deadline(2025, 3, 1),
            ..Goal::seeded("2", "Save $500")
                .with_description("Money saved from not buying alcohol")
                .with_category(GoalCategory::Finance)
        },
        Goal {
            target: deadline(2025, 1, 20),
            ..Goal::seeded("3", "Start Exercise Routine")
                .with_description("Replace drinking time with healthy activities")
                .with_category(GoalCategory::Health)
                .completed(true)
        },
        Goal {
            target: deadline(2025, 6, 1),
            ..Goal::seeded("4", "Read 5 Books")
                .with_description("Use recovered time for personal growth")
                .with_category(GoalCategory::Personal)
        },
    ]
}

/// Goals list; new goals go to the end.
///
/// # Errors
///
/// Only if the seed set itself has duplicate ids.
pub fn goal_store() -> Result<ItemStore<Goal>, ValidationError> {
    ItemStore::from_items(default_goals(), InsertPosition::Back)
}

pub fn recovery_checklist() -> Vec<ChecklistEntry> {
    use ChecklistCategory::{Daily, Evening, Morning, Weekly};

    let rows: [(&str, &str, &str, ChecklistCategory); 14] = [
        ("1", "Morning Meditation", "Start your day with 5-10 minutes of mindfulness", Morning),
        ("2", "Set Daily Intention", "Choose one positive goal for today", Morning),
        ("3", "Healthy Breakfast", "Nourish your body with a nutritious meal", Morning),
        ("4", "Check-in with Support Person", "Connect with a friend, family member, or sponsor", Daily),
        ("5", "Physical Activity", "Move your body for at least 30 minutes", Daily),
        ("6", "Practice Gratitude", "Write down 3 things you're grateful for", Daily),
        ("7", "Avoid Triggers", "Stay away from people, places, or situations that trigger cravings", Daily),
        ("8", "Hydrate Well", "Drink at least 8 glasses of water", Daily),
        ("9", "Reflect on the Day", "Journal about your experiences and feelings", Evening),
        ("10", "Plan Tomorrow", "Set yourself up for success tomorrow", Evening),
        ("11", "Wind Down Routine", "Prepare for restful sleep (no screens 1hr before bed)", Evening),
        ("12", "Attend Support Meeting", "Join a recovery group or therapy session", Weekly),
        ("13", "Learn Something New", "Read recovery literature or take an online course", Weekly),
        ("14", "Social Connection", "Spend quality time with supportive friends or family", Weekly),
    ];

    rows.into_iter()
        .map(|(id, title, description, category)| {
            ChecklistEntry::seeded(id, title)
                .with_description(description)
                .with_category(category)
        })
        .collect()
}

/// # Errors
///
/// Only if the seed set itself has duplicate ids.
pub fn checklist_store() -> Result<ItemStore<ChecklistEntry>, ValidationError> {
    ItemStore::from_items(recovery_checklist(), InsertPosition::Back)
}

/// Reminder kinds offered during setup, all disabled.
pub fn default_reminders() -> Vec<Reminder> {
    let rows: [(&str, &str, &str); 6] = [
        ("daily_checkin", "Daily Check-in", "Get a gentle reminder to reflect on your day"),
        ("meditation", "Meditation Time", "Reminder to take a moment for mindfulness"),
        ("hydration", "Stay Hydrated", "Don't forget to drink water throughout the day"),
        ("exercise", "Movement Break", "Time to get your body moving"),
        ("gratitude", "Gratitude Practice", "Remind yourself of what you're grateful for"),
        ("support_checkin", "Connect with Support", "Reach out to your support network"),
    ];

    rows.into_iter()
        .map(|(id, title, description)| Reminder::seeded(id, title).with_description(description))
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn goal_seed_has_one_completed() {
        let store = goal_store().unwrap();
        let progress = store.progress();
        assert_eq!((progress.completed_count, progress.total_count), (1, 4));
        assert_eq!(progress.percentage, 25);
        assert_eq!(progress.next_milestone.unwrap().title, "30 Days Sober");
    }

    #[test]
    fn checklist_covers_every_section() {
        let store = checklist_store().unwrap();
        assert_eq!(store.len(), 14);
        for category in ChecklistCategory::ALL {
            assert!(store.in_category(&category).count() >= 3);
        }
        assert_eq!(store.progress().percentage, 0);
    }

    #[test]
    fn reminders_start_disabled() {
        let reminders = default_reminders();
        assert_eq!(reminders.len(), 6);
        assert!(reminders.iter().all(|r| !r.completed));
        assert_eq!(reminders[0].id.as_str(), "daily_checkin");
    }
}
