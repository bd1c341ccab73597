use clap::Args;
use serde::Serialize;
use std::cell::RefCell;
use std::rc::Rc;

use soberpath_core::progress::encouragement;
use soberpath_core::{seeds, Event, Goal, GoalCategory, ItemDraft, ProgressSnapshot, TargetValue};

use super::resolve;

#[derive(Args)]
pub struct GoalsArgs {
    /// Add a goal with this title (repeatable)
    #[arg(long = "add", value_name = "TITLE")]
    add: Vec<String>,
    /// Description for added goals
    #[arg(long, requires = "add")]
    description: Option<String>,
    /// Category for added goals (health, finance, personal, social, milestone);
    /// defaults to personal
    #[arg(long, requires = "add")]
    category: Option<GoalCategory>,
    /// Target for added goals: a YYYY-MM-DD date or a number of days
    #[arg(long, requires = "add", value_name = "DATE|DAYS")]
    target: Option<TargetValue>,
    /// Toggle completion of the goal with this id or title (repeatable)
    #[arg(long = "toggle", value_name = "ID|TITLE")]
    toggle: Vec<String>,
    /// Remove the goal with this id or title (repeatable)
    #[arg(long = "remove", value_name = "ID|TITLE")]
    remove: Vec<String>,
    /// Output as JSON
    #[arg(long)]
    json: bool,
}

impl GoalsArgs {
    fn draft(&self) -> ItemDraft<GoalCategory> {
        let mut draft = ItemDraft::default().with_category(self.category.unwrap_or_default());
        if let Some(description) = &self.description {
            draft = draft.with_description(description.trim());
        }
        if let Some(target) = self.target {
            draft = draft.with_target(target);
        }
        draft
    }
}

#[derive(Serialize)]
struct GoalsReport<'a> {
    goals: &'a [Goal],
    progress: ProgressSnapshot,
    events: Vec<Event>,
}

/// Seed the goal list, apply adds, then toggles, then removals, and print the result.
pub fn run(args: GoalsArgs) -> Result<(), Box<dyn std::error::Error>> {
    let mut store = seeds::goal_store()?;
    let events = Rc::new(RefCell::new(Vec::new()));
    let sink = Rc::clone(&events);
    store.subscribe(move |event, _| sink.borrow_mut().push(event.clone()));

    for title in &args.add {
        store.add(title, args.draft())?;
    }
    for key in &args.toggle {
        match resolve(&store, key) {
            Some(id) => {
                store.toggle(&id);
            }
            None => eprintln!("no goal with id {key}"),
        }
    }
    for key in &args.remove {
        match resolve(&store, key) {
            Some(id) => {
                store.remove(&id);
            }
            None => eprintln!("no goal with id {key}"),
        }
    }

    let progress = store.progress();
    if args.json {
        let report = GoalsReport {
            goals: store.items(),
            progress,
            events: events.take(),
        };
        println!("{}", serde_json::to_string_pretty(&report)?);
        return Ok(());
    }

    for goal in store.iter() {
        let mark = if goal.completed { "x" } else { " " };
        let category = goal.category.map(|c| c.label()).unwrap_or("-");
        match goal.target {
            Some(target) => println!("[{mark}] {:<4} {} ({category}, target {target})", goal.id, goal.title),
            None => println!("[{mark}] {:<4} {} ({category})", goal.id, goal.title),
        }
        if !goal.description.is_empty() {
            println!("       {}", goal.description);
        }
    }
    println!();
    println!(
        "{}/{} completed ({}%), {} to go",
        progress.completed_count,
        progress.total_count,
        progress.percentage,
        progress.remaining_count()
    );
    if let Some(next) = &progress.next_milestone {
        println!("Next: {}", next.title);
    }
    println!("{}", encouragement(progress.percentage));
    Ok(())
}
