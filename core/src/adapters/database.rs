//! Database adapter.

use std::sync::Arc;
use std::time::Duration;

use async_trait::async_trait;
use tracing::debug;

use super::simulate_latency;
use crate::error::Result;
use crate::ports::{Console, Database};

/// Persistence stand-in: waits, then reports the save.
pub struct StubDatabase {
    console: Arc<dyn Console>,
    latency: Duration,
}

impl StubDatabase {
    pub fn new(console: Arc<dyn Console>, latency: Duration) -> Self {
        Self { console, latency }
    }
}

#[async_trait]
impl Database for StubDatabase {
    async fn save(&self) -> Result<()> {
        simulate_latency(self.latency).await;
        debug!(latency_ms = self.latency.as_millis() as u64, "Database save");
        self.console.line("[infra] Save DB!");
        Ok(())
    }
}
