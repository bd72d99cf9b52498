//! Background tasks module
//!
//! The countdown task is the single owner of the timer state.

pub mod countdown;

// Re-export main functions
pub(crate) use countdown::countdown_task;
