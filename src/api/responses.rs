//! API request and response structures

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::state::DisplayState;

/// Body of POST /timer/start
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct StartRequest {
    /// Keypad digits, HHMMSS left-padded
    pub input: String,
}

/// Response for the timer command endpoints
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ApiResponse {
    pub status: String,
    pub message: String,
    pub timestamp: DateTime<Utc>,
    pub timer: DisplayState,
}

impl ApiResponse {
    pub fn new(status: String, message: String, timer: DisplayState) -> Self {
        Self {
            status,
            message,
            timestamp: Utc::now(),
            timer,
        }
    }

    /// Response whose status is the timer phase after the command
    pub fn from_display(message: String, timer: DisplayState) -> Self {
        Self::new(timer.phase.as_str().to_string(), message, timer)
    }

    /// Create an error response
    pub fn error(message: String, timer: DisplayState) -> Self {
        Self::new("error".to_string(), message, timer)
    }
}

/// Status response with server metadata
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct StatusResponse {
    pub timer: DisplayState,
    pub uptime: String,
    pub port: u16,
    pub host: String,
    pub last_action: Option<String>,
    pub last_action_time: Option<DateTime<Utc>>,
}

/// Health check response
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct HealthResponse {
    pub status: String,
    pub timestamp: DateTime<Utc>,
    pub version: String,
}

impl HealthResponse {
    pub fn ok() -> Self {
        Self {
            status: "ok".to_string(),
            timestamp: Utc::now(),
            version: env!("CARGO_PKG_VERSION").to_string(),
        }
    }
}
