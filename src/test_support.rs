//! Shared helpers for server tests.

use std::sync::{Arc, Mutex};

use axum::Router;
use axum::extract::Form;
use axum::http::StatusCode;
use axum::routing::post;

pub type Captured = Arc<Mutex<Vec<Vec<(String, String)>>>>;

/// Start a local stand-in for the spreadsheet script. Returns its `/exec`
/// URL and every form body it has received.
pub async fn spawn_capture_endpoint() -> (String, Captured) {
    let seen: Captured = Arc::default();
    let sink = Arc::clone(&seen);
    let app = Router::new().route(
        "/exec",
        post(move |Form(fields): Form<Vec<(String, String)>>| {
            let sink = Arc::clone(&sink);
            async move {
                sink.lock().unwrap().push(fields);
                StatusCode::OK
            }
        }),
    );
    let listener = tokio::net::TcpListener::bind("127.0.0.1:0").await.unwrap();
    let addr = listener.local_addr().unwrap();
    tokio::spawn(async move {
        axum::serve(listener, app).await.unwrap();
    });
    (format!("http://{addr}/exec"), seen)
}
