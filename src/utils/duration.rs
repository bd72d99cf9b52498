//! Keypad duration parsing and elapsed-time formatting

use crate::error::TimerError;

/// Number of digits the keypad collects (HHMMSS)
pub const KEYPAD_DIGITS: usize = 6;

/// Parse keypad digits into a number of seconds.
///
/// The input is left-padded with zeros to six characters and split into
/// two-digit hour, minute and second fields. Fields are taken literally,
/// so `"9900"` is 99 minutes.
pub fn parse_duration_input(raw: &str) -> Result<u64, TimerError> {
    if let Some(c) = raw.chars().find(|c| !c.is_ascii_digit()) {
        return Err(TimerError::invalid_input(
            raw,
            format!("unexpected character {:?}", c),
        ));
    }
    if raw.len() > KEYPAD_DIGITS {
        return Err(TimerError::invalid_input(
            raw,
            format!("expected at most {} digits, got {}", KEYPAD_DIGITS, raw.len()),
        ));
    }

    let padded = format!("{:0>width$}", raw, width = KEYPAD_DIGITS);
    let field = |start: usize| -> Result<u64, TimerError> {
        padded[start..start + 2]
            .parse::<u64>()
            .map_err(|e| TimerError::invalid_input(raw, e.to_string()))
    };

    let hours = field(0)?;
    let minutes = field(2)?;
    let seconds = field(4)?;
    Ok(hours * 3600 + minutes * 60 + seconds)
}

/// Format seconds as `MM:SS`, or `H:MM:SS` once an hour or more remains
pub fn format_elapsed(total_secs: u64) -> String {
    let hours = total_secs / 3600;
    let minutes = (total_secs % 3600) / 60;
    let seconds = total_secs % 60;

    if hours > 0 {
        format!("{}:{:02}:{:02}", hours, minutes, seconds)
    } else {
        format!("{:02}:{:02}", minutes, seconds)
    }
}
