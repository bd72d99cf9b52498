//! Timer state structure and countdown transitions
//!
//! `TimerState` is owned by the countdown task and mutated only there.

use super::{DisplayState, TimerPhase};
use crate::utils::format_elapsed;

/// Result of applying one scheduler tick
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TickOutcome {
    /// Paused or not running, nothing changed
    Suppressed,
    /// One second was taken off the remaining time
    Advanced,
    /// The countdown ran past zero and has stopped
    Completed,
}

/// Countdown state: configured duration, remaining time and run flags
#[derive(Debug, Clone)]
pub struct TimerState {
    duration_secs: u64,
    remaining_secs: u64,
    paused: bool,
    running: bool,
}

impl TimerState {
    /// Create an idle timer holding the given duration
    pub fn new(duration_secs: u64) -> Self {
        Self {
            duration_secs,
            remaining_secs: duration_secs,
            paused: false,
            running: false,
        }
    }

    /// Begin a fresh run with a new duration
    pub fn start(&mut self, duration_secs: u64) {
        self.duration_secs = duration_secs;
        self.remaining_secs = duration_secs;
        self.paused = false;
        self.running = true;
    }

    /// Begin a fresh run with the last configured duration
    pub fn restart(&mut self) {
        self.start(self.duration_secs);
    }

    /// Flip the paused flag of a running countdown, returning the new value
    pub fn toggle_pause(&mut self) -> bool {
        self.paused = !self.paused;
        self.paused
    }

    /// Put the full duration back on the clock. Run flags are left alone.
    pub fn reset(&mut self) {
        self.remaining_secs = self.duration_secs;
    }

    /// Apply one tick: decrement, then stop if the counter would go negative
    pub fn tick(&mut self) -> TickOutcome {
        if !self.running || self.paused {
            return TickOutcome::Suppressed;
        }

        match self.remaining_secs.checked_sub(1) {
            Some(remaining) => {
                self.remaining_secs = remaining;
                TickOutcome::Advanced
            }
            None => {
                self.running = false;
                self.paused = true;
                TickOutcome::Completed
            }
        }
    }

    pub fn duration_secs(&self) -> u64 {
        self.duration_secs
    }

    pub fn remaining_secs(&self) -> u64 {
        self.remaining_secs
    }

    pub fn is_running(&self) -> bool {
        self.running
    }

    /// Current state machine phase, derived from the run flags
    pub fn phase(&self) -> TimerPhase {
        match (self.running, self.paused) {
            (true, false) => TimerPhase::Running,
            (true, true) => TimerPhase::Paused,
            (false, true) => TimerPhase::Completed,
            (false, false) => TimerPhase::Idle,
        }
    }

    /// Fraction of the duration already elapsed, in 0..=1
    pub fn progress(&self) -> f32 {
        if self.duration_secs == 0 {
            return 1.0;
        }
        1.0 - (self.remaining_secs as f32 / self.duration_secs as f32)
    }

    /// Snapshot for the presentation layer
    pub fn display(&self) -> DisplayState {
        DisplayState {
            text: format_elapsed(self.remaining_secs),
            progress: self.progress(),
            paused: self.paused,
            remaining_seconds: self.remaining_secs,
            duration_seconds: self.duration_secs,
            phase: self.phase(),
        }
    }
}
