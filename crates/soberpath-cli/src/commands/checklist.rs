use clap::Args;
use serde::Serialize;
use soberpath_core::progress::summarize_by_category;
use soberpath_core::{seeds, ChecklistCategory, ChecklistEntry, ItemId, ProgressSnapshot};

#[derive(Args)]
pub struct ChecklistArgs {
    /// Only show one section (morning, daily, evening, weekly)
    #[arg(long)]
    category: Option<ChecklistCategory>,
    /// Check or uncheck the entry with this id (repeatable)
    #[arg(long = "toggle", value_name = "ID")]
    toggle: Vec<String>,
    /// Output as JSON
    #[arg(long)]
    json: bool,
}

#[derive(Serialize)]
struct Section<'a> {
    category: ChecklistCategory,
    entries: Vec<&'a ChecklistEntry>,
    progress: ProgressSnapshot,
}

#[derive(Serialize)]
struct ChecklistReport<'a> {
    sections: Vec<Section<'a>>,
    overall: ProgressSnapshot,
}

pub fn run(args: ChecklistArgs) -> Result<(), Box<dyn std::error::Error>> {
    let mut store = seeds::checklist_store()?;
    for id in &args.toggle {
        if store.toggle(&ItemId::from(id.as_str())).is_none() {
            eprintln!("no checklist entry with id {id}");
        }
    }

    let overall = store.progress();
    let sections: Vec<Section<'_>> = summarize_by_category(store.items())
        .into_iter()
        .filter(|(category, _)| args.category.map_or(true, |wanted| wanted == *category))
        .map(|(category, progress)| Section {
            category,
            entries: store
                .iter()
                .filter(|entry| entry.category == Some(category))
                .collect(),
            progress,
        })
        .collect();

    if args.json {
        let report = ChecklistReport { sections, overall };
        println!("{}", serde_json::to_string_pretty(&report)?);
        return Ok(());
    }

    for section in &sections {
        println!(
            "{} ({}/{})",
            section.category.title(),
            section.progress.completed_count,
            section.progress.total_count
        );
        for entry in &section.entries {
            let mark = if entry.completed { "x" } else { " " };
            println!("  [{mark}] {:<3} {}", entry.id, entry.title);
        }
    }
    println!();
    println!("Today's progress: {}%", overall.percentage);
    Ok(())
}
