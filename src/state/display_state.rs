//! Display snapshot published to the presentation layer

use serde::{Deserialize, Serialize};

/// Countdown state machine phase
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum TimerPhase {
    Idle,
    Running,
    Paused,
    Completed,
}

impl TimerPhase {
    pub fn as_str(&self) -> &'static str {
        match self {
            TimerPhase::Idle => "idle",
            TimerPhase::Running => "running",
            TimerPhase::Paused => "paused",
            TimerPhase::Completed => "completed",
        }
    }
}

/// What a countdown screen renders: clock text, progress ring and the
/// pause/resume toggle
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DisplayState {
    /// Remaining time as `MM:SS` or `H:MM:SS`
    pub text: String,
    /// Fraction of the duration elapsed (0..=1)
    pub progress: f32,
    pub paused: bool,
    pub remaining_seconds: u64,
    pub duration_seconds: u64,
    pub phase: TimerPhase,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_phase_names_match_serde() {
        for phase in [
            TimerPhase::Idle,
            TimerPhase::Running,
            TimerPhase::Paused,
            TimerPhase::Completed,
        ] {
            let serialized = serde_json::to_value(phase).unwrap();
            assert_eq!(serialized, serde_json::Value::from(phase.as_str()));

            let parsed: TimerPhase = serde_json::from_value(serialized).unwrap();
            assert_eq!(parsed, phase);
        }
    }
}
