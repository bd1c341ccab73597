use clap::Args;
use serde::Serialize;
use std::cell::RefCell;
use std::rc::Rc;

use soberpath_core::{Config, Event, Habit, ItemDraft, ItemStore, ProgressSnapshot};

use super::resolve;

#[derive(Args)]
pub struct HabitsArgs {
    /// Add a habit with this title (repeatable)
    #[arg(long = "add", value_name = "TITLE")]
    add: Vec<String>,
    /// Toggle the habit with this id or title (repeatable)
    #[arg(long = "toggle", value_name = "ID|TITLE")]
    toggle: Vec<String>,
    /// Remove the habit with this id or title (repeatable)
    #[arg(long = "remove", value_name = "ID|TITLE")]
    remove: Vec<String>,
    /// Output as JSON
    #[arg(long)]
    json: bool,
}

#[derive(Serialize)]
struct HabitsReport<'a> {
    habits: &'a [Habit],
    progress: ProgressSnapshot,
    events: Vec<Event>,
}

/// Build a routine from scratch: adds, then toggles, then removals.
///
/// New habits land where `tracker.insert_position` says.
pub fn run(args: HabitsArgs, config: &Config) -> Result<(), Box<dyn std::error::Error>> {
    let mut store: ItemStore<Habit> = ItemStore::new(config.tracker.insert_position);
    let events = Rc::new(RefCell::new(Vec::new()));
    let sink = Rc::clone(&events);
    store.subscribe(move |event, _| sink.borrow_mut().push(event.clone()));

    for title in &args.add {
        store.add(title, ItemDraft::default())?;
    }
    for key in &args.toggle {
        match resolve(&store, key) {
            Some(id) => {
                store.toggle(&id);
            }
            None => eprintln!("no habit named {key}"),
        }
    }
    for key in &args.remove {
        match resolve(&store, key) {
            Some(id) => {
                store.remove(&id);
            }
            None => eprintln!("no habit named {key}"),
        }
    }

    let progress = store.progress();
    if args.json {
        let report = HabitsReport {
            habits: store.items(),
            progress,
            events: events.take(),
        };
        println!("{}", serde_json::to_string_pretty(&report)?);
        return Ok(());
    }

    if store.is_empty() {
        println!("No habits yet. Add one with --add.");
        return Ok(());
    }
    for habit in store.iter() {
        let mark = if habit.completed { "x" } else { " " };
        println!("[{mark}] {}", habit.title);
    }
    println!();
    println!("{}/{} done today", progress.completed_count, progress.total_count);
    Ok(())
}
