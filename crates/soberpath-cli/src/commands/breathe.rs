use clap::Args;
use soberpath_core::timer::drive;
use soberpath_core::{BreathingSession, Config, IntervalScheduler, SessionController};
use tokio::sync::watch;

use super::print_event;

#[derive(Args)]
pub struct BreatheArgs {
    /// Stop after this many full inhale-hold-exhale cycles (default: run until Ctrl-C)
    #[arg(long)]
    cycles: Option<u32>,
}

pub fn run(args: BreatheArgs, config: &Config) -> Result<(), Box<dyn std::error::Error>> {
    let runtime = tokio::runtime::Runtime::new()?;
    runtime.block_on(async {
        let session = BreathingSession::new(config.breathing.phase_secs);
        let tick_budget = args
            .cycles
            .map(|cycles| u64::from(cycles) * u64::from(session.cycle_ticks()));
        let mut controller = SessionController::new(
            session,
            IntervalScheduler::new(),
            config.breathing.tick_interval(),
        );

        let (cancel_tx, cancel_rx) = watch::channel(false);
        tokio::spawn(async move {
            if tokio::signal::ctrl_c().await.is_ok() {
                let _ = cancel_tx.send(true);
            }
        });

        let mut print_error = None;
        let outcome = drive(&mut controller, tick_budget, cancel_rx, |event| {
            if let Err(e) = print_event(event) {
                print_error.get_or_insert(e);
            }
        })
        .await;

        if let Some(e) = print_error {
            return Err(e.into());
        }
        eprintln!(
            "{:?}: {} cycles completed",
            outcome.reason,
            controller.session().cycles_completed()
        );
        Ok(())
    })
}
