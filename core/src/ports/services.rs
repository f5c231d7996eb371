//! Application and domain capability ports.

use async_trait::async_trait;

use crate::domain::User;
use crate::error::Result;

/// Port for the data-access step.
#[async_trait]
pub trait ClientRepository: Send + Sync {
    /// Run the data-access step.
    async fn execute(&self) -> Result<()>;
}

/// Port for the client use case.
///
/// Implementations must finish the repository step before their own.
#[async_trait]
pub trait ClientService: Send + Sync {
    async fn do_action(&self) -> Result<()>;
}

/// Port for authenticating a user record.
#[async_trait]
pub trait Authenticator: Send + Sync {
    /// Validate `user`, failing with `Error::Authentication` on rejection.
    async fn authenticate(&self, user: &User) -> Result<()>;
}

/// Port for processing one delivered message.
///
/// Authenticates first, then persists. Aborts on the first failure.
#[async_trait]
pub trait Worker: Send + Sync {
    async fn process(&self) -> Result<()>;
}
