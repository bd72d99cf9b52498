//! Log lines emitted by the command paths, captured with a real subscriber

use std::{
    io,
    sync::{Arc, Mutex},
};
use axum::{
    body::Body,
    http::{Request, StatusCode},
    Router,
};
use tower::ServiceExt;
use tracing::subscriber::DefaultGuard;

use countdown_timer::{create_router, AppState, TimerEngine, TimerPhase};

#[derive(Clone, Default)]
struct CapturedLogs(Arc<Mutex<Vec<u8>>>);

impl CapturedLogs {
    fn contents(&self) -> String {
        String::from_utf8_lossy(&self.0.lock().unwrap()).into_owned()
    }
}

impl io::Write for CapturedLogs {
    fn write(&mut self, buf: &[u8]) -> io::Result<usize> {
        self.0.lock().unwrap().extend_from_slice(buf);
        Ok(buf.len())
    }

    fn flush(&mut self) -> io::Result<()> {
        Ok(())
    }
}

// Current-thread runtime: the engine task logs on the same thread as the test
fn capture_logs() -> (CapturedLogs, DefaultGuard) {
    let logs = CapturedLogs::default();
    let writer = logs.clone();
    let subscriber = tracing_subscriber::fmt()
        .with_max_level(tracing::Level::TRACE)
        .with_ansi(false)
        .with_writer(move || writer.clone())
        .finish();
    (logs, tracing::subscriber::set_default(subscriber))
}

fn post(uri: &str, body: Option<&str>) -> Request<Body> {
    let builder = Request::builder().method("POST").uri(uri);
    match body {
        Some(body) => builder
            .header("content-type", "application/json")
            .body(Body::from(body.to_string()))
            .unwrap(),
        None => builder.body(Body::empty()).unwrap(),
    }
}

async fn status_of(router: &Router, request: Request<Body>) -> StatusCode {
    router.clone().oneshot(request).await.unwrap().status()
}

#[tokio::test]
async fn test_command_handlers_log_timer_values() {
    let (logs, _guard) = capture_logs();
    let engine = TimerEngine::spawn(0);
    let router = create_router(Arc::new(AppState::new(engine, 0, "127.0.0.1".to_string())));

    assert_eq!(status_of(&router, post("/timer/start", Some(r#"{"input":"10"}"#))).await, StatusCode::OK);
    assert_eq!(status_of(&router, post("/timer/pause", None)).await, StatusCode::OK);
    assert_eq!(status_of(&router, post("/timer/reset", None)).await, StatusCode::OK);
    assert_eq!(
        status_of(&router, post("/timer/start", Some(r#"{"input":"1:0"}"#))).await,
        StatusCode::UNPROCESSABLE_ENTITY
    );

    let output = logs.contents();
    assert!(output.contains("Start endpoint called - countdown of 10s started"), "{}", output);
    assert!(output.contains("Pause endpoint called - Countdown paused"), "{}", output);
    assert!(output.contains("Reset endpoint called - countdown back at 00:10"), "{}", output);
    assert!(output.contains("Rejected start request"), "{}", output);
}

#[tokio::test]
async fn test_start_at_launch_logs_configured_duration() {
    let (logs, _guard) = capture_logs();
    let engine = TimerEngine::spawn(90);

    let timer = engine.start_at_launch().await.unwrap();
    assert_eq!(timer.phase, TimerPhase::Running);
    assert_eq!(timer.text, "01:30");

    let output = logs.contents();
    assert!(output.contains("Countdown started at launch: 01:30"), "{}", output);
    assert!(output.contains("Countdown restarted from 90s"), "{}", output);
}
