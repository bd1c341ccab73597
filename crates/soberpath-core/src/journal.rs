//! Mood journal for craving moments. Newest entry first.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

use crate::error::ValidationError;
use crate::tracker::ItemId;

#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Mood {
    Great,
    Good,
    Okay,
    Struggling,
    Difficult,
}

impl Mood {
    pub fn label(&self) -> &'static str {
        match self {
            Mood::Great => "Great",
            Mood::Good => "Good",
            Mood::Okay => "Okay",
            Mood::Struggling => "Struggling",
            Mood::Difficult => "Difficult",
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct JournalEntry {
    pub id: ItemId,
    pub content: String,
    pub mood: Mood,
    pub timestamp: DateTime<Utc>,
}

#[derive(Debug, Clone, Default)]
pub struct Journal {
    entries: Vec<JournalEntry>,
}

impl Journal {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn entries(&self) -> &[JournalEntry] {
        &self.entries
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// # Errors
    ///
    /// `EmptyContent` for blank text, `MissingField("mood")` without a mood.
    /// Content is checked first.
    pub fn add(&mut self, content: &str, mood: Option<Mood>) -> Result<&JournalEntry, ValidationError> {
        let content = content.trim();
        if content.is_empty() {
            return Err(ValidationError::EmptyContent);
        }
        let mood = mood.ok_or(ValidationError::MissingField("mood"))?;

        self.entries.insert(
            0,
            JournalEntry {
                id: ItemId::generate(),
                content: content.to_string(),
                mood,
                timestamp: Utc::now(),
            },
        );
        tracing::debug!(?mood, total = self.entries.len(), "journal entry saved");
        Ok(&self.entries[0])
    }

    pub fn mood_counts(&self) -> BTreeMap<Mood, usize> {
        let mut counts = BTreeMap::new();
        for entry in &self.entries {
            *counts.entry(entry.mood).or_insert(0) += 1;
        }
        counts
    }
}
