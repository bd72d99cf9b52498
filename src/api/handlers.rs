//! HTTP endpoint handlers

use std::sync::Arc;
use axum::{
    extract::State,
    http::StatusCode,
    response::Json,
};
use tracing::{error, info, warn};

use crate::{error::TimerError, state::{AppState, DisplayState}};
use super::responses::{ApiResponse, HealthResponse, StartRequest, StatusResponse};

/// Handle POST /timer/start - Parse keypad input and start a fresh countdown
pub async fn start_handler(
    State(state): State<Arc<AppState>>,
    Json(request): Json<StartRequest>,
) -> Result<(StatusCode, Json<ApiResponse>), StatusCode> {
    match state.engine.set_and_start_timer(&request.input).await {
        Ok(timer) => {
            state.record_action("start");
            info!("Start endpoint called - countdown of {}s started", timer.duration_seconds);
            Ok((
                StatusCode::OK,
                Json(ApiResponse::from_display(
                    format!("Countdown started at {}", timer.text),
                    timer,
                )),
            ))
        }
        Err(e @ TimerError::InvalidDurationFormat { .. }) => {
            warn!("Rejected start request: {}", e);
            Ok((
                StatusCode::UNPROCESSABLE_ENTITY,
                Json(ApiResponse::error(e.to_string(), state.engine.display())),
            ))
        }
        Err(e) => {
            error!("Failed to start countdown: {}", e);
            Err(StatusCode::INTERNAL_SERVER_ERROR)
        }
    }
}

/// Handle POST /timer/pause - Toggle pause, or start from the last duration
pub async fn pause_handler(State(state): State<Arc<AppState>>) -> Result<Json<ApiResponse>, StatusCode> {
    match state.engine.pause_timer().await {
        Ok(timer) => {
            state.record_action("pause");
            let message = if timer.paused { "Countdown paused" } else { "Countdown running" };
            info!("Pause endpoint called - {}", message);
            Ok(Json(ApiResponse::from_display(message.to_string(), timer)))
        }
        Err(e) => {
            error!("Failed to toggle pause: {}", e);
            Err(StatusCode::INTERNAL_SERVER_ERROR)
        }
    }
}

/// Handle POST /timer/reset - Put the full duration back on the clock
pub async fn reset_handler(State(state): State<Arc<AppState>>) -> Result<Json<ApiResponse>, StatusCode> {
    match state.engine.reset().await {
        Ok(timer) => {
            state.record_action("reset");
            info!("Reset endpoint called - countdown back at {}", timer.text);
            Ok(Json(ApiResponse::from_display(
                format!("Countdown reset to {}", timer.text),
                timer,
            )))
        }
        Err(e) => {
            error!("Failed to reset countdown: {}", e);
            Err(StatusCode::INTERNAL_SERVER_ERROR)
        }
    }
}

/// Handle GET /timer - Return the current display state
pub async fn timer_handler(State(state): State<Arc<AppState>>) -> Result<Json<DisplayState>, StatusCode> {
    state.engine.snapshot().await.map(Json).map_err(|e| {
        error!("Failed to read timer state: {}", e);
        StatusCode::INTERNAL_SERVER_ERROR
    })
}

/// Handle GET /status - Return timer state with server metadata
pub async fn status_handler(State(state): State<Arc<AppState>>) -> Result<Json<StatusResponse>, StatusCode> {
    let timer = match state.engine.snapshot().await {
        Ok(t) => t,
        Err(e) => {
            error!("Failed to read timer state: {}", e);
            return Err(StatusCode::INTERNAL_SERVER_ERROR);
        }
    };

    let (last_action, last_action_time) = state.get_last_action();

    Ok(Json(StatusResponse {
        timer,
        uptime: state.get_uptime(),
        port: state.port,
        host: state.host.clone(),
        last_action,
        last_action_time,
    }))
}

/// Handle GET /health - Health check endpoint
pub async fn health_handler() -> Json<HealthResponse> {
    Json(HealthResponse::ok())
}
