//! HTTP client adapter.

use std::sync::Arc;

use async_trait::async_trait;
use tracing::info;

use crate::domain::{Person, User};
use crate::error::Result;
use crate::ports::{Authenticator, Console, HttpClient};

/// Transport stand-in: authenticates the caller, then reports the request.
pub struct StubHttpClient {
    auth: Arc<dyn Authenticator>,
    console: Arc<dyn Console>,
}

impl StubHttpClient {
    pub fn new(auth: Arc<dyn Authenticator>, console: Arc<dyn Console>) -> Self {
        Self { auth, console }
    }
}

#[async_trait]
impl HttpClient for StubHttpClient {
    async fn handle(&self, person: &Person) -> Result<()> {
        info!(person = %person, "Handling HTTP request");
        self.auth.authenticate(&User::from(person)).await?;
        self.console.line("Http done!");
        Ok(())
    }
}
