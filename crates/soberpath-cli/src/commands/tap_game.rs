use clap::Args;
use soberpath_core::{Config, IntervalScheduler, SessionController, TapGame};
use tokio::io::{AsyncBufReadExt, BufReader};
use tokio::time::MissedTickBehavior;

use super::print_event;

#[derive(Args)]
pub struct TapGameArgs {
    /// High score to beat
    #[arg(long, default_value = "0")]
    high_score: u32,
}

/// Play one round. Every line read from stdin counts as a tap; the round ends
/// when the timer runs out or on Ctrl-C.
pub fn run(args: TapGameArgs, config: &Config) -> Result<(), Box<dyn std::error::Error>> {
    let runtime = tokio::runtime::Runtime::new()?;
    runtime.block_on(async {
        let game = TapGame::new(config.tap_game.session_secs).with_high_score(args.high_score);
        let mut controller = SessionController::new(
            game,
            IntervalScheduler::new(),
            config.tap_game.tick_interval(),
        );

        if let Some(event) = controller.start() {
            print_event(&event)?;
        }

        let mut ticker = tokio::time::interval(controller.interval());
        ticker.set_missed_tick_behavior(MissedTickBehavior::Delay);
        let mut lines = BufReader::new(tokio::io::stdin()).lines();
        let mut stdin_open = true;
        let ctrl_c = tokio::signal::ctrl_c();
        tokio::pin!(ctrl_c);

        while controller.session().is_running() {
            tokio::select! {
                _ = ticker.tick() => {
                    for event in controller.pump() {
                        print_event(&event)?;
                    }
                }
                line = lines.next_line(), if stdin_open => {
                    match line? {
                        Some(_) => {
                            if controller.session_mut().tap() {
                                let game = controller.session();
                                tracing::debug!(taps = game.tap_count(), streak = game.streak(), "tap");
                                print_event(&controller.snapshot())?;
                            }
                        }
                        None => stdin_open = false,
                    }
                }
                _ = &mut ctrl_c => {
                    if let Some(event) = controller.stop() {
                        print_event(&event)?;
                    }
                }
            }
        }

        let game = controller.session();
        eprintln!(
            "{} ({} taps, best {})",
            game.encouragement().message(),
            game.tap_count(),
            game.high_score()
        );
        Ok::<(), Box<dyn std::error::Error>>(())
    })
}
