//! Habit, goal and checklist tracking.

mod category;
mod item;
mod store;

pub use category::{ChecklistCategory, GoalCategory};
pub use item::{ItemDraft, ItemId, TargetValue, Trackable, TrackableItem};
pub use store::{InsertPosition, ItemStore, Snapshot};

/// Personal recovery goal.
pub type Goal = TrackableItem<GoalCategory>;
/// Daily routine habit; habits carry no category.
pub type Habit = TrackableItem;
/// Entry in the recovery-mode checklist.
pub type ChecklistEntry = TrackableItem<ChecklistCategory>;
