//! Timer engine handle
//!
//! `TimerEngine` is a cheap, cloneable handle onto the countdown task. All
//! state changes are sent to that task as commands and applied there, so the
//! tick logic never observes a half-applied update.

use tokio::sync::{mpsc, oneshot, watch};
use tracing::{debug, info};

use crate::{
    error::TimerError,
    state::{DisplayState, TimerState},
    tasks::countdown_task,
    utils::parse_duration_input,
};

const COMMAND_BUFFER: usize = 32;

/// Messages understood by the countdown task. Each carries a reply channel
/// that receives the display state produced by the command.
#[derive(Debug)]
pub(crate) enum Command {
    Start {
        duration_secs: u64,
        reply: oneshot::Sender<DisplayState>,
    },
    TogglePause {
        reply: oneshot::Sender<DisplayState>,
    },
    Reset {
        reply: oneshot::Sender<DisplayState>,
    },
    Snapshot {
        reply: oneshot::Sender<DisplayState>,
    },
}

#[derive(Debug, Clone)]
pub struct TimerEngine {
    command_tx: mpsc::Sender<Command>,
    display_rx: watch::Receiver<DisplayState>,
}

impl TimerEngine {
    /// Spawn the countdown task on the current tokio runtime.
    ///
    /// `initial_duration_secs` is what `pause_timer` runs if it is pressed
    /// before any timer has been set.
    pub fn spawn(initial_duration_secs: u64) -> Self {
        let timer = TimerState::new(initial_duration_secs);
        let (command_tx, command_rx) = mpsc::channel(COMMAND_BUFFER);
        let (display_tx, display_rx) = watch::channel(timer.display());

        tokio::spawn(countdown_task(timer, command_rx, display_tx));

        Self {
            command_tx,
            display_rx,
        }
    }

    /// Parse keypad digits and start a fresh countdown, superseding any
    /// countdown already in flight. Invalid input leaves the engine as it was.
    pub async fn set_and_start_timer(&self, raw_input: &str) -> Result<DisplayState, TimerError> {
        let duration_secs = parse_duration_input(raw_input)?;
        debug!("Start requested: input={:?}, duration={}s", raw_input, duration_secs);
        self.request(|reply| Command::Start { duration_secs, reply }).await
    }

    /// Toggle pause on a running countdown, or start a new one from the last
    /// configured duration if nothing is running
    pub async fn pause_timer(&self) -> Result<DisplayState, TimerError> {
        self.request(|reply| Command::TogglePause { reply }).await
    }

    /// Run the configured duration when the process comes up
    pub async fn start_at_launch(&self) -> Result<DisplayState, TimerError> {
        let timer = self.pause_timer().await?;
        info!("Countdown started at launch: {}", timer.text);
        Ok(timer)
    }

    /// Restore the full duration without touching the pause/run state
    pub async fn reset(&self) -> Result<DisplayState, TimerError> {
        self.request(|reply| Command::Reset { reply }).await
    }

    /// Display state after every queued command and due tick has been applied
    pub async fn snapshot(&self) -> Result<DisplayState, TimerError> {
        self.request(|reply| Command::Snapshot { reply }).await
    }

    /// Latest published display state
    pub fn display(&self) -> DisplayState {
        self.display_rx.borrow().clone()
    }

    /// Subscribe to display updates; only the most recent value is kept
    pub fn subscribe(&self) -> watch::Receiver<DisplayState> {
        self.display_rx.clone()
    }

    async fn request<F>(&self, make_command: F) -> Result<DisplayState, TimerError>
    where
        F: FnOnce(oneshot::Sender<DisplayState>) -> Command,
    {
        let (reply_tx, reply_rx) = oneshot::channel();
        self.command_tx
            .send(make_command(reply_tx))
            .await
            .map_err(|_| TimerError::EngineStopped)?;
        reply_rx.await.map_err(|_| TimerError::EngineStopped)
    }
}
