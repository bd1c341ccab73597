use serde::{Deserialize, Serialize};

/// Category for personal recovery goals.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum GoalCategory {
    Health,
    Finance,
    #[default]
    Personal,
    Social,
    Milestone,
}

impl GoalCategory {
    pub const ALL: [GoalCategory; 5] = [
        GoalCategory::Health,
        GoalCategory::Finance,
        GoalCategory::Personal,
        GoalCategory::Social,
        GoalCategory::Milestone,
    ];

    pub fn label(&self) -> &'static str {
        match self {
            GoalCategory::Health => "Health & Fitness",
            GoalCategory::Finance => "Financial",
            GoalCategory::Personal => "Personal Growth",
            GoalCategory::Social => "Social & Family",
            GoalCategory::Milestone => "Recovery Milestone",
        }
    }

    fn key(&self) -> &'static str {
        match self {
            GoalCategory::Health => "health",
            GoalCategory::Finance => "finance",
            GoalCategory::Personal => "personal",
            GoalCategory::Social => "social",
            GoalCategory::Milestone => "milestone",
        }
    }
}

/// Section of the daily recovery checklist.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ChecklistCategory {
    Morning,
    Daily,
    Evening,
    Weekly,
}

impl ChecklistCategory {
    pub const ALL: [ChecklistCategory; 4] = [
        ChecklistCategory::Morning,
        ChecklistCategory::Daily,
        ChecklistCategory::Evening,
        ChecklistCategory::Weekly,
    ];

    pub fn title(&self) -> &'static str {
        match self {
            ChecklistCategory::Morning => "Morning Routine",
            ChecklistCategory::Daily => "Daily Activities",
            ChecklistCategory::Evening => "Evening Routine",
            ChecklistCategory::Weekly => "Weekly Goals",
        }
    }

    fn key(&self) -> &'static str {
        match self {
            ChecklistCategory::Morning => "morning",
            ChecklistCategory::Daily => "daily",
            ChecklistCategory::Evening => "evening",
            ChecklistCategory::Weekly => "weekly",
        }
    }
}

snake_key_text!(GoalCategory, "category");
snake_key_text!(ChecklistCategory, "category");

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parse_is_case_insensitive() {
        assert_eq!("Morning".parse::<ChecklistCategory>().unwrap(), ChecklistCategory::Morning);
        assert_eq!(" finance ".parse::<GoalCategory>().unwrap(), GoalCategory::Finance);
    }

    #[test]
    fn parse_rejects_unknown() {
        assert!("brunch".parse::<ChecklistCategory>().is_err());
    }

    #[test]
    fn display_round_trips_through_from_str() {
        for category in GoalCategory::ALL {
            assert_eq!(category.to_string().parse::<GoalCategory>().unwrap(), category);
        }
    }

    #[test]
    fn goals_default_to_personal_growth() {
        assert_eq!(GoalCategory::default(), GoalCategory::Personal);
    }
}
