//! Utility functions module
//!
//! Keypad parsing, time formatting and process signal handling.

pub mod duration;
pub mod signals;

// Re-export main functions
pub use duration::{format_elapsed, parse_duration_input};
pub use signals::shutdown_signal;
