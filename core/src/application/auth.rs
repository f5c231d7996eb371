//! Authentication service.

use std::sync::Arc;
use std::time::Duration;

use async_trait::async_trait;
use tracing::{debug, warn};

use crate::adapters::simulate_latency;
use crate::domain::User;
use crate::error::{Error, Result};
use crate::ports::{Authenticator, Console};

/// Authenticates user records. Has no component dependencies.
///
/// The only rule enforced is a non-empty email; any password is accepted.
pub struct AuthService {
    console: Arc<dyn Console>,
    latency: Duration,
}

impl AuthService {
    pub fn new(console: Arc<dyn Console>, latency: Duration) -> Self {
        Self { console, latency }
    }
}

#[async_trait]
impl Authenticator for AuthService {
    async fn authenticate(&self, user: &User) -> Result<()> {
        simulate_latency(self.latency).await;
        self.console.line("[App] Start auth");

        if user.email.trim().is_empty() {
            warn!("Rejected user with empty email");
            return Err(Error::Authentication("email must not be empty".to_string()));
        }

        debug!(user = %user, "User authenticated");
        Ok(())
    }
}
