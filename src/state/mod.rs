//! State management module
//!
//! Timer state owned by the countdown task, the display snapshot it
//! publishes, and the shared state handed to HTTP handlers.

pub mod app_state;
pub mod display_state;
pub mod timer_state;

// Re-export main types
pub use app_state::AppState;
pub use display_state::{DisplayState, TimerPhase};
pub use timer_state::{TickOutcome, TimerState};
