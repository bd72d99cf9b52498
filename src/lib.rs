//! Countdown Timer - a keypad-driven countdown engine
//!
//! The engine takes up to six keypad digits (HHMMSS), runs a one-second
//! countdown and publishes a display snapshot on every change. It can be
//! paused, resumed and reset, and an HTTP API exposes those controls.

pub mod config;
pub mod error;
pub mod engine;
pub mod state;
pub mod api;
pub mod tasks;
pub mod utils;

// Re-export commonly used types
pub use config::Config;
pub use error::TimerError;
pub use engine::TimerEngine;
pub use state::{AppState, DisplayState, TimerPhase};
pub use api::create_router;
pub use utils::signals::shutdown_signal;
