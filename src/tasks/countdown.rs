//! Countdown background task

use std::time::Duration;
use tokio::{
    sync::{mpsc, oneshot, watch},
    time::{interval_at, Instant, Interval},
};
use tracing::{debug, info, trace, warn};

use crate::{
    engine::Command,
    state::{DisplayState, TickOutcome, TimerState},
};

/// Scheduler granularity
const TICK_PERIOD: Duration = Duration::from_secs(1);

/// Background task that owns the timer state and drives the countdown.
///
/// It is the only writer of `timer`. Ticks and commands are handled one at a
/// time from a single `select!`, ticks first when both are ready. The task
/// ends once every `TimerEngine` handle has been dropped.
pub(crate) async fn countdown_task(
    mut timer: TimerState,
    mut command_rx: mpsc::Receiver<Command>,
    display_tx: watch::Sender<DisplayState>,
) {
    info!("Starting countdown task (duration={}s)", timer.duration_secs());

    // Present only while a countdown is running. Replacing it drops the
    // previous tick sequence.
    let mut ticker: Option<Interval> = None;
    let mut generation: u64 = 0;

    loop {
        tokio::select! {
            biased;

            _ = next_tick(&mut ticker) => {
                match timer.tick() {
                    TickOutcome::Suppressed => {
                        trace!("Tick suppressed (generation={})", generation);
                    }
                    TickOutcome::Advanced => {
                        trace!("Tick: {}s remaining", timer.remaining_secs());
                        publish(&display_tx, &timer);
                    }
                    TickOutcome::Completed => {
                        info!("Countdown finished (generation={}, duration={}s)",
                              generation, timer.duration_secs());
                        ticker = None;
                        publish(&display_tx, &timer);
                    }
                }
            }

            command = command_rx.recv() => {
                let Some(command) = command else {
                    debug!("All engine handles dropped, stopping countdown task");
                    break;
                };

                match command {
                    Command::Start { duration_secs, reply } => {
                        if ticker.is_some() {
                            info!("Superseding countdown generation {}", generation);
                        }
                        timer.start(duration_secs);
                        generation += 1;
                        ticker = Some(new_ticker());
                        info!("Countdown started: {}s (generation={})", duration_secs, generation);
                        respond(reply, publish(&display_tx, &timer));
                    }
                    Command::TogglePause { reply } => {
                        if timer.is_running() {
                            let paused = timer.toggle_pause();
                            debug!("Countdown {} at {}s",
                                   if paused { "paused" } else { "resumed" },
                                   timer.remaining_secs());
                        } else {
                            timer.restart();
                            generation += 1;
                            ticker = Some(new_ticker());
                            info!("Countdown restarted from {}s (generation={})",
                                  timer.duration_secs(), generation);
                        }
                        respond(reply, publish(&display_tx, &timer));
                    }
                    Command::Reset { reply } => {
                        timer.reset();
                        debug!("Countdown reset to {}s", timer.duration_secs());
                        respond(reply, publish(&display_tx, &timer));
                    }
                    Command::Snapshot { reply } => {
                        respond(reply, timer.display());
                    }
                }
            }
        }
    }
}

/// First tick lands one period after the countdown starts
fn new_ticker() -> Interval {
    interval_at(Instant::now() + TICK_PERIOD, TICK_PERIOD)
}

async fn next_tick(ticker: &mut Option<Interval>) {
    match ticker {
        Some(interval) => {
            interval.tick().await;
        }
        None => std::future::pending().await,
    }
}

fn publish(display_tx: &watch::Sender<DisplayState>, timer: &TimerState) -> DisplayState {
    let display = timer.display();
    if let Err(e) = display_tx.send(display.clone()) {
        warn!("Failed to publish display state: {}", e);
    }
    display
}

fn respond(reply: oneshot::Sender<DisplayState>, display: DisplayState) {
    if reply.send(display).is_err() {
        debug!("Command caller went away before the reply");
    }
}
