//! Client repository adapter.

use std::sync::Arc;

use async_trait::async_trait;
use tracing::debug;

use crate::error::Result;
use crate::ports::{ClientRepository, Console};

/// Data-access stand-in. Never fails.
pub struct StubRepository {
    console: Arc<dyn Console>,
}

impl StubRepository {
    pub fn new(console: Arc<dyn Console>) -> Self {
        Self { console }
    }
}

#[async_trait]
impl ClientRepository for StubRepository {
    async fn execute(&self) -> Result<()> {
        debug!("Repository step");
        self.console.line("Repository done!");
        Ok(())
    }
}
