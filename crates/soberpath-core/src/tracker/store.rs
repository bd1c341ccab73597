//! Ordered, copy-on-write store of trackable items.
//!
//! The store hands out [`Snapshot`]s (shared `Arc`s). A mutation never alters
//! a snapshot someone else still holds: `Arc::make_mut` clones the backing
//! vector first when it is shared.
//!
//! ```text
//! add(title) ──> ItemAdded ──┐
//! toggle(id) ──> ItemToggled ├──> subscribers(&Event, &Snapshot)
//! remove(id) ──> ItemRemoved ┘
//! ```
//!
//! Unknown ids are silent no-ops and emit nothing.

use chrono::Utc;
use serde::{Deserialize, Serialize};
use std::collections::HashSet;
use std::sync::Arc;

use super::item::{ItemDraft, ItemId, Trackable};
use crate::error::ValidationError;
use crate::events::Event;
use crate::observer::{SubscriptionId, Subscribers};
use crate::progress::{self, ProgressSnapshot};

/// Read-only view of the store at one point in time.
pub type Snapshot<T> = Arc<Vec<T>>;

type StoreListener<T> = dyn FnMut(&Event, &Snapshot<T>);

/// Where `add` places new items.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum InsertPosition {
    /// Newest first.
    #[default]
    Front,
    Back,
}

#[derive(Debug)]
pub struct ItemStore<T: Trackable> {
    items: Snapshot<T>,
    position: InsertPosition,
    subscribers: Subscribers<StoreListener<T>>,
}

impl<T: Trackable> ItemStore<T> {
    pub fn new(position: InsertPosition) -> Self {
        Self {
            items: Arc::new(Vec::new()),
            position,
            subscribers: Subscribers::new(),
        }
    }

    /// Seed a store from a hardcoded initial set.
    ///
    /// # Errors
    ///
    /// Returns [`ValidationError::EmptyTitle`] if a title is blank, or
    /// [`ValidationError::DuplicateId`] if two items share an id.
    pub fn from_items(items: Vec<T>, position: InsertPosition) -> Result<Self, ValidationError> {
        let mut seen = HashSet::with_capacity(items.len());
        for item in &items {
            if item.title().trim().is_empty() {
                return Err(ValidationError::EmptyTitle);
            }
            if !seen.insert(item.id().clone()) {
                return Err(ValidationError::DuplicateId(item.id().to_string()));
            }
        }
        Ok(Self {
            items: Arc::new(items),
            position,
            subscribers: Subscribers::new(),
        })
    }

    // ── Queries ──────────────────────────────────────────────────────

    pub fn snapshot(&self) -> Snapshot<T> {
        Arc::clone(&self.items)
    }

    pub fn items(&self) -> &[T] {
        &self.items
    }

    pub fn iter(&self) -> std::slice::Iter<'_, T> {
        self.items.iter()
    }

    pub fn get(&self, id: &ItemId) -> Option<&T> {
        self.items.iter().find(|item| item.id() == id)
    }

    pub fn contains(&self, id: &ItemId) -> bool {
        self.get(id).is_some()
    }

    pub fn len(&self) -> usize {
        self.items.len()
    }

    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    pub fn position(&self) -> InsertPosition {
        self.position
    }

    pub fn in_category<'a>(&'a self, category: &'a T::Category) -> impl Iterator<Item = &'a T> + 'a {
        self.items
            .iter()
            .filter(move |item| item.category() == Some(category))
    }

    pub fn active(&self) -> impl Iterator<Item = &T> + '_ {
        self.items.iter().filter(|item| !item.is_completed())
    }

    pub fn completed(&self) -> impl Iterator<Item = &T> + '_ {
        self.items.iter().filter(|item| item.is_completed())
    }

    pub fn progress(&self) -> ProgressSnapshot {
        progress::summarize(&self.items)
    }

    pub fn progress_in(&self, category: &T::Category) -> ProgressSnapshot {
        progress::summarize_category(&self.items, category)
    }

    // ── Commands ─────────────────────────────────────────────────────

    /// Create a new incomplete item.
    ///
    /// # Errors
    ///
    /// Returns [`ValidationError::EmptyTitle`] when `title` is blank after
    /// trimming; the store is left untouched.
    pub fn add(&mut self, title: &str, draft: ItemDraft<T::Category>) -> Result<T, ValidationError> {
        let title = title.trim();
        if title.is_empty() {
            tracing::debug!("rejected item with empty title");
            return Err(ValidationError::EmptyTitle);
        }

        let mut id = ItemId::generate();
        while self.contains(&id) {
            id = ItemId::generate();
        }

        self.insert(T::create(id, title.to_string(), draft, Utc::now()))
    }

    /// Place an already-built item at the configured position.
    ///
    /// # Errors
    ///
    /// [`ValidationError::EmptyTitle`] for a blank title,
    /// [`ValidationError::DuplicateId`] when the id is taken.
    pub fn insert(&mut self, item: T) -> Result<T, ValidationError> {
        if item.title().trim().is_empty() {
            return Err(ValidationError::EmptyTitle);
        }
        if self.contains(item.id()) {
            return Err(ValidationError::DuplicateId(item.id().to_string()));
        }

        let items = Arc::make_mut(&mut self.items);
        match self.position {
            InsertPosition::Front => items.insert(0, item.clone()),
            InsertPosition::Back => items.push(item.clone()),
        }

        tracing::debug!(item_id = %item.id(), total = self.items.len(), "item added");
        self.notify(Event::ItemAdded {
            item_id: item.id().clone(),
            title: item.title().to_string(),
            at: Utc::now(),
        });
        Ok(item)
    }

    /// Flip completion for `id`. Returns `None` when `id` is not present.
    pub fn toggle(&mut self, id: &ItemId) -> Option<Event> {
        let index = self.index_of(id)?;
        let item = &mut Arc::make_mut(&mut self.items)[index];
        let completed = !item.is_completed();
        item.set_completed(completed);

        tracing::debug!(item_id = %id, completed, "item toggled");
        Some(self.notify(Event::ItemToggled {
            item_id: id.clone(),
            completed,
            at: Utc::now(),
        }))
    }

    /// Delete `id` permanently. Returns `None` when `id` is not present.
    pub fn remove(&mut self, id: &ItemId) -> Option<Event> {
        let index = self.index_of(id)?;
        let removed = Arc::make_mut(&mut self.items).remove(index);

        tracing::debug!(item_id = %id, total = self.items.len(), "item removed");
        Some(self.notify(Event::ItemRemoved {
            item_id: id.clone(),
            title: removed.title().to_string(),
            at: Utc::now(),
        }))
    }

    pub fn subscribe<F>(&mut self, listener: F) -> SubscriptionId
    where
        F: FnMut(&Event, &Snapshot<T>) + 'static,
    {
        self.subscribers.add(Box::new(listener))
    }

    pub fn unsubscribe(&mut self, id: SubscriptionId) -> bool {
        self.subscribers.remove(id)
    }

    // ── Internal ─────────────────────────────────────────────────────

    fn index_of(&self, id: &ItemId) -> Option<usize> {
        let index = self.items.iter().position(|item| item.id() == id);
        if index.is_none() {
            tracing::trace!(item_id = %id, "unknown item id, ignoring");
        }
        index
    }

    fn notify(&mut self, event: Event) -> Event {
        let snapshot = Arc::clone(&self.items);
        for listener in self.subscribers.iter_mut() {
            listener(&event, &snapshot);
        }
        event
    }
}

impl<T: Trackable> Default for ItemStore<T> {
    fn default() -> Self {
        Self::new(InsertPosition::default())
    }
}
