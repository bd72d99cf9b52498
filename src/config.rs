//! Configuration and CLI argument handling

use clap::Parser;

use crate::{error::TimerError, utils::parse_duration_input};

/// CLI argument parsing structure
#[derive(Debug, Parser)]
#[command(name = "countdown-timer")]
#[command(about = "A keypad-driven countdown timer with an HTTP control surface")]
#[command(version)]
pub struct Config {
    /// Port to bind the server to
    #[arg(short, long, default_value = "20554")]
    pub port: u16,

    /// Host address to bind to
    #[arg(long, default_value = "0.0.0.0")]
    pub host: String,

    /// Initial countdown as keypad digits (HHMMSS, left-padded)
    #[arg(short, long, default_value = "500")]
    pub duration: String,

    /// Start the countdown as soon as the server is up
    #[arg(short, long)]
    pub start: bool,

    /// Enable verbose logging
    #[arg(short, long)]
    pub verbose: bool,
}

impl Config {
    /// Parse configuration from command line arguments
    pub fn parse() -> Self {
        Parser::parse()
    }

    /// Get the server address as a formatted string
    pub fn address(&self) -> String {
        format!("{}:{}", self.host, self.port)
    }

    /// Get the appropriate log level based on verbose flag
    pub fn log_level(&self) -> &'static str {
        if self.verbose { "debug" } else { "info" }
    }

    /// Initial duration in seconds, validated with the keypad parser
    pub fn initial_duration_secs(&self) -> Result<u64, TimerError> {
        parse_duration_input(&self.duration)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults() {
        let config = Config::try_parse_from(["countdown-timer"]).unwrap();
        assert_eq!(config.address(), "0.0.0.0:20554");
        assert_eq!(config.log_level(), "info");
        assert_eq!(config.initial_duration_secs(), Ok(300));
        assert!(!config.start);
    }

    #[test]
    fn test_flags() {
        let config = Config::try_parse_from([
            "countdown-timer", "-p", "8080", "--host", "127.0.0.1", "-d", "10000", "-s", "-v",
        ])
        .unwrap();
        assert_eq!(config.address(), "127.0.0.1:8080");
        assert_eq!(config.log_level(), "debug");
        assert_eq!(config.initial_duration_secs(), Ok(3600));
        assert!(config.start);
    }

    #[test]
    fn test_invalid_duration() {
        let config = Config::try_parse_from(["countdown-timer", "-d", "5m"]).unwrap();
        assert!(config.initial_duration_secs().is_err());
    }
}
