use clap::Args;
use serde::Serialize;

use soberpath_core::{ItemId, Reminder, ReminderSet};

#[derive(Args)]
pub struct RemindersArgs {
    /// Enable the reminder with this id (repeatable)
    #[arg(long = "enable", value_name = "ID")]
    enable: Vec<String>,
    /// Fail unless at least one reminder is enabled
    #[arg(long)]
    confirm: bool,
    /// Output as JSON
    #[arg(long)]
    json: bool,
}

#[derive(Serialize)]
struct RemindersReport<'a> {
    reminders: &'a [Reminder],
    enabled_count: usize,
}

pub fn run(args: RemindersArgs) -> Result<(), Box<dyn std::error::Error>> {
    let mut set = ReminderSet::new()?;
    for id in &args.enable {
        let id = ItemId::from(id.as_str());
        match set.get(&id).map(|reminder| reminder.completed) {
            Some(true) => {}
            Some(false) => {
                set.toggle(&id);
            }
            None => eprintln!("no reminder with id {id}"),
        }
    }
    if args.confirm {
        set.confirm()?;
    }

    if args.json {
        let report = RemindersReport {
            reminders: set.items(),
            enabled_count: set.enabled_count(),
        };
        println!("{}", serde_json::to_string_pretty(&report)?);
        return Ok(());
    }

    for reminder in set.items() {
        let mark = if reminder.completed { "x" } else { " " };
        println!("[{mark}] {:<16} {}", reminder.id, reminder.title);
        println!("    {}", reminder.description);
    }
    println!();
    println!("{} enabled", set.enabled_count());
    Ok(())
}
