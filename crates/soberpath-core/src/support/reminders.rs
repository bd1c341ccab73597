//! Daily reminder selection.
//!
//! Reminders are a fixed menu; a reminder's completion flag means it is
//! enabled. Setup cannot be confirmed with nothing enabled.

use crate::error::ValidationError;
use crate::events::Event;
use crate::observer::SubscriptionId;
use crate::seeds;
use crate::tracker::{InsertPosition, ItemId, ItemStore, Snapshot, Trackable, TrackableItem};

/// Reminder kind; `completed` is the enabled flag.
pub type Reminder = TrackableItem;

#[derive(Debug)]
pub struct ReminderSet {
    store: ItemStore<Reminder>,
}

impl ReminderSet {
    /// The stock menu with every reminder disabled.
    ///
    /// # Errors
    ///
    /// Only if the seed set itself has duplicate ids.
    pub fn new() -> Result<Self, ValidationError> {
        Ok(Self {
            store: ItemStore::from_items(seeds::default_reminders(), InsertPosition::Back)?,
        })
    }

    pub fn items(&self) -> &[Reminder] {
        self.store.items()
    }

    pub fn snapshot(&self) -> Snapshot<Reminder> {
        self.store.snapshot()
    }

    pub fn get(&self, id: &ItemId) -> Option<&Reminder> {
        self.store.get(id)
    }

    pub fn toggle(&mut self, id: &ItemId) -> Option<Event> {
        self.store.toggle(id)
    }

    pub fn enabled(&self) -> impl Iterator<Item = &Reminder> + '_ {
        self.store.completed()
    }

    pub fn enabled_count(&self) -> usize {
        self.enabled().count()
    }

    /// Enabled reminders, in menu order.
    ///
    /// # Errors
    ///
    /// [`ValidationError::NothingSelected`] when none is enabled.
    pub fn confirm(&self) -> Result<Vec<&Reminder>, ValidationError> {
        let enabled: Vec<&Reminder> = self.enabled().collect();
        if enabled.is_empty() {
            return Err(ValidationError::NothingSelected("reminder"));
        }
        tracing::info!(
            enabled = ?enabled.iter().map(|r| r.id().as_str()).collect::<Vec<_>>(),
            "reminders confirmed"
        );
        Ok(enabled)
    }

    pub fn subscribe<F>(&mut self, listener: F) -> SubscriptionId
    where
        F: FnMut(&Event, &Snapshot<Reminder>) + 'static,
    {
        self.store.subscribe(listener)
    }
}
