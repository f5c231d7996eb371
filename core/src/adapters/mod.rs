//! Adapters layer - External system implementations.
//!
//! This module contains implementations of the infrastructure ports defined
//! in `ports`. Every adapter here is a stand-in: it simulates latency and
//! reports its step on the console instead of talking to a real system.

pub mod console;
pub mod database;
pub mod http;
pub mod queue;
pub mod repository;

// Re-export main types for convenience
pub use console::{RecordingConsole, StdoutConsole};
pub use database::StubDatabase;
pub use http::StubHttpClient;
pub use queue::SqsQueue;
pub use repository::StubRepository;

use std::time::Duration;

/// Simulated I/O wait.
pub(crate) async fn simulate_latency(latency: Duration) {
    if !latency.is_zero() {
        tokio::time::sleep(latency).await;
    }
}
