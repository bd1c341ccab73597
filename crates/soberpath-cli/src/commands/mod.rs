pub mod breathe;
pub mod checklist;
pub mod config;
pub mod contacts;
pub mod goals;
pub mod habits;
pub mod milestones;
pub mod reminders;
pub mod tap_game;

use soberpath_core::{Event, ItemId, ItemStore, Trackable};

/// Print one event as a JSON line on stdout.
pub(crate) fn print_event(event: &Event) -> Result<(), serde_json::Error> {
    println!("{}", serde_json::to_string(event)?);
    Ok(())
}

/// Look `key` up as an id, then as a case-insensitive title.
pub(crate) fn resolve<T: Trackable>(store: &ItemStore<T>, key: &str) -> Option<ItemId> {
    let id = ItemId::from(key);
    if store.contains(&id) {
        return Some(id);
    }
    store
        .iter()
        .find(|item| item.title().eq_ignore_ascii_case(key.trim()))
        .map(|item| item.id().clone())
}
