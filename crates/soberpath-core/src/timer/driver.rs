//! Async pacing loop for a [`SessionController`].
//!
//! The loop wakes on a `tokio::time::interval` matching the controller's
//! interval and pumps due ticks. It returns when the session ends by itself,
//! when the tick budget is spent, or when the cancel signal flips to `true`.
//! Cancellation stops the controller before returning.

use serde::{Deserialize, Serialize};
use tokio::sync::watch;
use tokio::time::MissedTickBehavior;

use super::controller::SessionController;
use super::scheduler::Scheduler;
use super::Session;
use crate::events::Event;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum StopReason {
    /// The session ended on its own (tap game timeout).
    Finished,
    TickBudget,
    Cancelled,
}

#[derive(Debug, Clone)]
pub struct DriveOutcome {
    pub reason: StopReason,
    pub events: Vec<Event>,
}

/// Drive `controller` until it finishes, `tick_budget` ticks have been
/// applied, or `cancel` is set. The controller is started if it is idle.
///
/// `on_event` sees each tick event as it happens, before `drive` returns.
pub async fn drive<S, K, F>(
    controller: &mut SessionController<S, K>,
    tick_budget: Option<u64>,
    mut cancel: watch::Receiver<bool>,
    mut on_event: F,
) -> DriveOutcome
where
    S: Session,
    K: Scheduler,
    F: FnMut(&Event),
{
    let mut events = Vec::new();
    if let Some(event) = controller.start() {
        on_event(&event);
        events.push(event);
    }

    let baseline = controller.ticks_applied();
    let mut ticker = tokio::time::interval(controller.interval());
    ticker.set_missed_tick_behavior(MissedTickBehavior::Delay);
    let mut cancel_open = true;

    let reason = loop {
        if *cancel.borrow() {
            break StopReason::Cancelled;
        }

        tokio::select! {
            _ = ticker.tick() => {
                let budget_left = tick_budget.map(|budget| {
                    budget.saturating_sub(controller.ticks_applied() - baseline)
                });
                let max = budget_left.map_or(u32::MAX, |left| u32::try_from(left).unwrap_or(u32::MAX));
                for event in controller.pump_at_most(max) {
                    on_event(&event);
                    events.push(event);
                }

                if !controller.session().is_active() {
                    break StopReason::Finished;
                }
                if let Some(budget) = tick_budget {
                    if controller.ticks_applied() - baseline >= budget {
                        break StopReason::TickBudget;
                    }
                }
            }
            changed = cancel.changed(), if cancel_open => {
                // A dropped sender can no longer cancel; keep ticking.
                if changed.is_err() {
                    cancel_open = false;
                }
            }
        }
    };

    if reason != StopReason::Finished {
        if let Some(event) = controller.stop() {
            on_event(&event);
            events.push(event);
        }
    }
    tracing::debug!(?reason, ticks = controller.ticks_applied() - baseline, "session drive ended");

    DriveOutcome { reason, events }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::timer::{BreathPhase, BreathingSession, IntervalScheduler, TapGame};
    use std::time::Duration;

    #[tokio::test(start_paused = true)]
    async fn breathing_runs_for_budget_then_stops() {
        let mut controller = SessionController::new(
            BreathingSession::default(),
            IntervalScheduler::new(),
            Duration::from_secs(1),
        );
        let (_tx, rx) = watch::channel(false);

        let outcome = drive(&mut controller, Some(12), rx, |_| {}).await;

        assert_eq!(outcome.reason, StopReason::TickBudget);
        assert_eq!(controller.ticks_applied(), 12);
        let phase_changes = outcome
            .events
            .iter()
            .filter(|e| matches!(e, Event::PhaseChanged { .. }))
            .count();
        assert_eq!(phase_changes, 3);
        assert!(!controller.session().is_active());
        assert_eq!(controller.session().phase(), BreathPhase::Inhale);
    }

    #[tokio::test(start_paused = true)]
    async fn tap_game_finishes_on_its_own() {
        let mut controller = SessionController::new(
            TapGame::new(5),
            IntervalScheduler::new(),
            Duration::from_secs(1),
        );
        let (_tx, rx) = watch::channel(false);

        let outcome = drive(&mut controller, None, rx, |_| {}).await;

        assert_eq!(outcome.reason, StopReason::Finished);
        assert!(matches!(outcome.events.last(), Some(Event::GameFinished { score: 0, .. })));
    }

    #[tokio::test(start_paused = true)]
    async fn zero_interval_still_paces_ticks() {
        let mut controller = SessionController::new(
            BreathingSession::default(),
            IntervalScheduler::new(),
            Duration::ZERO,
        );
        let (_tx, rx) = watch::channel(false);

        let outcome = drive(&mut controller, Some(4), rx, |_| {}).await;

        assert_eq!(outcome.reason, StopReason::TickBudget);
        assert_eq!(controller.ticks_applied(), 4);
    }

    #[tokio::test(start_paused = true)]
    async fn cancel_stops_the_session() {
        let mut controller = SessionController::new(
            BreathingSession::default(),
            IntervalScheduler::new(),
            Duration::from_secs(1),
        );
        let (tx, rx) = watch::channel(false);
        tokio::spawn(async move {
            tokio::time::sleep(Duration::from_millis(2500)).await;
            let _ = tx.send(true);
        });

        let outcome = drive(&mut controller, None, rx, |_| {}).await;

        assert_eq!(outcome.reason, StopReason::Cancelled);
        assert!(matches!(outcome.events.last(), Some(Event::SessionStopped { .. })));
        assert!(!controller.scheduler().is_active());
        assert!(controller.ticks_applied() <= 3);
    }
}
