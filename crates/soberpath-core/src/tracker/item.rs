//! Trackable item model.
//!
//! Habits, goals and checklist entries all share one shape: a title, a
//! completion flag, an optional category tag and an optional target. The
//! [`Trackable`] trait is the seam the store and aggregator are generic over;
//! [`TrackableItem`] is the stock implementation, parametrized by category.

use chrono::{DateTime, NaiveDate, Utc};
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;
use uuid::Uuid;

use crate::error::ValidationError;

/// Opaque, unique item identifier.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(transparent)]
pub struct ItemId(String);

impl ItemId {
    pub fn new(id: impl Into<String>) -> Self {
        Self(id.into())
    }

    /// Fresh random id for a newly created item.
    pub fn generate() -> Self {
        Self(Uuid::new_v4().to_string())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for ItemId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.pad(&self.0)
    }
}

impl From<&str> for ItemId {
    fn from(id: &str) -> Self {
        Self::new(id)
    }
}

impl From<String> for ItemId {
    fn from(id: String) -> Self {
        Self(id)
    }
}

/// Threshold attached to an item: a day count or a deadline.
///
/// Ordering: day counts numerically, dates chronologically, and every day
/// count before every date.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(tag = "kind", content = "value", rename_all = "snake_case")]
pub enum TargetValue {
    Days(u32),
    Date(NaiveDate),
}

impl fmt::Display for TargetValue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            TargetValue::Days(days) => write!(f, "{days} days"),
            TargetValue::Date(date) => write!(f, "{date}"),
        }
    }
}

/// `YYYY-MM-DD` is a deadline, a bare integer a day count.
impl FromStr for TargetValue {
    type Err = ValidationError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let s = s.trim();
        if let Ok(days) = s.parse::<u32>() {
            return Ok(TargetValue::Days(days));
        }
        NaiveDate::parse_from_str(s, "%Y-%m-%d")
            .map(TargetValue::Date)
            .map_err(|_| ValidationError::InvalidValue {
                field: "target".into(),
                message: format!("expected YYYY-MM-DD or a day count, got {s:?}"),
            })
    }
}

/// Optional metadata supplied when creating an item.
#[derive(Debug, Clone, PartialEq)]
pub struct ItemDraft<C> {
    pub description: String,
    pub category: Option<C>,
    pub target: Option<TargetValue>,
}

impl<C> Default for ItemDraft<C> {
    fn default() -> Self {
        Self {
            description: String::new(),
            category: None,
            target: None,
        }
    }
}

impl<C> ItemDraft<C> {
    pub fn with_description(mut self, description: impl Into<String>) -> Self {
        self.description = description.into();
        self
    }

    pub fn with_category(mut self, category: C) -> Self {
        self.category = Some(category);
        self
    }

    pub fn with_target(mut self, target: TargetValue) -> Self {
        self.target = Some(target);
        self
    }
}

/// Anything the item store can hold.
pub trait Trackable: Clone {
    type Category: Clone + PartialEq;

    /// Build a new, incomplete item. `title` is already trimmed and non-empty.
    fn create(
        id: ItemId,
        title: String,
        draft: ItemDraft<Self::Category>,
        created_at: DateTime<Utc>,
    ) -> Self;

    fn id(&self) -> &ItemId;
    fn title(&self) -> &str;
    fn is_completed(&self) -> bool;
    fn set_completed(&mut self, completed: bool);
    fn category(&self) -> Option<&Self::Category>;
    fn target(&self) -> Option<&TargetValue>;
}

/// Stock trackable item, generic over its category tag.
///
/// Use `()` for item kinds without categories (routine habits).
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TrackableItem<C = ()> {
    pub id: ItemId,
    pub title: String,
    #[serde(default)]
    pub description: String,
    #[serde(default)]
    pub completed: bool,
    #[serde(default)]
    pub category: Option<C>,
    #[serde(default)]
    pub target: Option<TargetValue>,
    pub created_at: DateTime<Utc>,
}

impl<C> TrackableItem<C> {
    /// Item with a fixed id, used for hardcoded seed sets.
    pub fn seeded(id: impl Into<ItemId>, title: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            title: title.into(),
            description: String::new(),
            completed: false,
            category: None,
            target: None,
            created_at: Utc::now(),
        }
    }

    pub fn with_description(mut self, description: impl Into<String>) -> Self {
        self.description = description.into();
        self
    }

    pub fn with_category(mut self, category: C) -> Self {
        self.category = Some(category);
        self
    }

    pub fn with_target(mut self, target: TargetValue) -> Self {
        self.target = Some(target);
        self
    }

    pub fn completed(mut self, completed: bool) -> Self {
        self.completed = completed;
        self
    }
}

impl<C: Clone + PartialEq> Trackable for TrackableItem<C> {
    type Category = C;

    fn create(id: ItemId, title: String, draft: ItemDraft<C>, created_at: DateTime<Utc>) -> Self {
        Self {
            id,
            title,
            description: draft.description.trim().to_string(),
            completed: false,
            category: draft.category,
            target: draft.target,
            created_at,
        }
    }

    fn id(&self) -> &ItemId {
        &self.id
    }

    fn title(&self) -> &str {
        &self.title
    }

    fn is_completed(&self) -> bool {
        self.completed
    }

    fn set_completed(&mut self, completed: bool) {
        self.completed = completed;
    }

    fn category(&self) -> Option<&C> {
        self.category.as_ref()
    }

    fn target(&self) -> Option<&TargetValue> {
        self.target.as_ref()
    }
}
