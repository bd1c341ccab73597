use clap::{Parser, Subcommand};
use soberpath_core::{logging, Config};

mod commands;

#[derive(Parser)]
#[command(name = "soberpath", version, about = "SoberPath recovery companion CLI")]
struct Cli {
    /// Log at debug level (overrides RUST_LOG and config)
    #[arg(short, long, global = true)]
    verbose: bool,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Recovery goals
    Goals(commands::goals::GoalsArgs),
    /// Daily routine habits
    Habits(commands::habits::HabitsArgs),
    /// Daily recovery checklist
    Checklist(commands::checklist::ChecklistArgs),
    /// Sobriety counter and milestones
    Milestones(commands::milestones::MilestonesArgs),
    /// Emergency contacts
    Contacts(commands::contacts::ContactsArgs),
    /// Daily reminder setup
    Reminders(commands::reminders::RemindersArgs),
    /// Guided breathing exercise
    Breathe(commands::breathe::BreatheArgs),
    /// Distraction tap game (each line on stdin is a tap)
    TapGame(commands::tap_game::TapGameArgs),
    /// Configuration management
    Config {
        #[command(subcommand)]
        action: commands::config::ConfigAction,
    },
}

fn main() {
    let cli = Cli::parse();
    let config = Config::load_or_default();
    logging::init(&config.logging, cli.verbose);

    let result = match cli.command {
        Commands::Goals(args) => commands::goals::run(args),
        Commands::Habits(args) => commands::habits::run(args, &config),
        Commands::Checklist(args) => commands::checklist::run(args),
        Commands::Milestones(args) => commands::milestones::run(args, &config),
        Commands::Contacts(args) => commands::contacts::run(args),
        Commands::Reminders(args) => commands::reminders::run(args),
        Commands::Breathe(args) => commands::breathe::run(args, &config),
        Commands::TapGame(args) => commands::tap_game::run(args, &config),
        Commands::Config { action } => commands::config::run(action),
    };

    if let Err(e) = result {
        eprintln!("error: {e}");
        std::process::exit(1);
    }
}
