//! Infrastructure capability ports (persistence, transport, messaging).

use async_trait::async_trait;

use crate::domain::Person;
use crate::error::Result;

/// Port for the persistence step.
#[async_trait]
pub trait Database: Send + Sync {
    async fn save(&self) -> Result<()>;
}

/// Port for inbound HTTP requests.
#[async_trait]
pub trait HttpClient: Send + Sync {
    /// Handle a request on behalf of `person`.
    async fn handle(&self, person: &Person) -> Result<()>;
}

/// Port for inbound message delivery.
///
/// Receiving a message is the entry point of the worker cascade.
#[async_trait]
pub trait MessageQueue: Send + Sync {
    async fn receive(&self) -> Result<()>;
}
