//! Message queue adapter.

use std::sync::Arc;
use std::time::Duration;

use async_trait::async_trait;
use tracing::{info, info_span, Instrument};
use uuid::Uuid;

use super::simulate_latency;
use crate::error::Result;
use crate::ports::{Console, MessageQueue, Worker};

/// SQS-style inbound queue stand-in.
///
/// Each `receive` simulates one delivery and hands it to the worker.
pub struct SqsQueue {
    worker: Arc<dyn Worker>,
    console: Arc<dyn Console>,
    latency: Duration,
}

impl SqsQueue {
    pub fn new(worker: Arc<dyn Worker>, console: Arc<dyn Console>, latency: Duration) -> Self {
        Self {
            worker,
            console,
            latency,
        }
    }
}

#[async_trait]
impl MessageQueue for SqsQueue {
    async fn receive(&self) -> Result<()> {
        let delivery = Uuid::new_v4();
        let span = info_span!("delivery", id = %delivery);

        async {
            simulate_latency(self.latency).await;
            info!("Message received");
            self.console.line("[infra] Message SQS");
            self.worker.process().await
        }
        .instrument(span)
        .await
    }
}
