use chrono::{Local, NaiveDate};
use clap::Args;
use serde::Serialize;
use soberpath_core::{milestone_progress, Config, MilestoneProgress, SobrietyCounter, SobrietyStats};

#[derive(Args)]
pub struct MilestonesArgs {
    /// Days sober so far
    #[arg(long, conflicts_with = "quit_date", required_unless_present = "quit_date")]
    days: Option<u32>,
    /// Quit date (YYYY-MM-DD); days are counted up to today
    #[arg(long, value_name = "YYYY-MM-DD")]
    quit_date: Option<NaiveDate>,
    /// Output as JSON
    #[arg(long)]
    json: bool,
}

#[derive(Serialize)]
struct MilestonesReport {
    #[serde(skip_serializing_if = "Option::is_none")]
    stats: Option<SobrietyStats>,
    milestones: MilestoneProgress,
}

pub fn run(args: MilestonesArgs, config: &Config) -> Result<(), Box<dyn std::error::Error>> {
    let thresholds = &config.recovery.milestone_days;

    let report = match (args.quit_date, args.days) {
        (Some(quit_date), _) => {
            let today = Local::now().date_naive();
            if quit_date > today {
                return Err(format!("quit date {quit_date} is in the future").into());
            }
            let counter = SobrietyCounter::new(
                quit_date,
                config.recovery.daily_spend,
                config.recovery.daily_minutes,
            );
            MilestonesReport {
                stats: Some(counter.stats_on(today)),
                milestones: counter.milestones_on(today, thresholds),
            }
        }
        (None, Some(days)) => MilestonesReport {
            stats: None,
            milestones: milestone_progress(days, thresholds),
        },
        (None, None) => return Err("either --days or --quit-date is required".into()),
    };

    if args.json {
        println!("{}", serde_json::to_string_pretty(&report)?);
        return Ok(());
    }

    let progress = &report.milestones;
    println!("Days sober: {}", progress.days_sober);
    if let Some(stats) = &report.stats {
        println!("Money saved: {:.2}", stats.money_saved);
        println!(
            "Time recovered: {}h {}m",
            stats.time_recovered.hours, stats.time_recovered.minutes
        );
    }
    println!();
    for milestone in &progress.milestones {
        if milestone.reached {
            println!("[x] {} days", milestone.days);
        } else {
            println!("[ ] {} days ({} to go)", milestone.days, milestone.days_left);
        }
    }
    match progress.next {
        Some(next) => println!("{}% of the way to {next} days", progress.percentage_to_next),
        None => println!("Every milestone reached"),
    }
    Ok(())
}
