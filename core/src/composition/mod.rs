//! Composition roots.
//!
//! Both strategies build the same graph, leaves first, and hand back an
//! [`Application`] holding the top-level capabilities:
//!
//! ```text
//! ClientService ─→ ClientRepository
//! HttpClient    ─→ Authenticator
//! MessageQueue  ─→ Worker ─→ Authenticator, Database
//! (every component also holds the shared Console)
//! ```

pub mod declarative;
pub mod manual;

use std::future::Future;
use std::sync::Arc;

use serde::{Deserialize, Serialize};
use tracing::info;

use crate::config::Settings;
use crate::container::Container;
use crate::domain::Scenario;
use crate::error::{Error, Result};
use crate::ports::{ClientService, Console, HttpClient, MessageQueue};

/// How the graph gets wired.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Default)]
#[serde(rename_all = "camelCase")]
pub enum Strategy {
    /// Explicit constructor calls, leaves first.
    Manual,
    /// Factories in a registry, resolved on demand.
    #[default]
    Container,
}

impl Strategy {
    pub fn name(&self) -> &'static str {
        match self {
            Strategy::Manual => "manual",
            Strategy::Container => "container",
        }
    }
}

impl std::fmt::Display for Strategy {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.name())
    }
}

impl std::str::FromStr for Strategy {
    type Err = String;

    fn from_str(s: &str) -> std::result::Result<Self, Self::Err> {
        match s.to_ascii_lowercase().as_str() {
            "manual" => Ok(Strategy::Manual),
            "container" => Ok(Strategy::Container),
            _ => Err(format!("unknown strategy '{s}'")),
        }
    }
}

/// Compose the graph with the chosen strategy.
///
/// Fails before any domain operation runs if wiring fails.
pub fn compose(
    strategy: Strategy,
    settings: &Settings,
    console: Arc<dyn Console>,
) -> Result<Application> {
    info!(%strategy, "Composing service graph");
    match strategy {
        Strategy::Manual => Ok(manual::compose(settings, console)),
        Strategy::Container => declarative::compose(settings, console),
    }
}

/// The fully wired graph, reachable through its top-level capabilities.
pub struct Application {
    service: Arc<dyn ClientService>,
    http: Arc<dyn HttpClient>,
    queue: Arc<dyn MessageQueue>,
    console: Arc<dyn Console>,
    settings: Settings,
}

impl Application {
    pub fn new(
        service: Arc<dyn ClientService>,
        http: Arc<dyn HttpClient>,
        queue: Arc<dyn MessageQueue>,
        console: Arc<dyn Console>,
        settings: Settings,
    ) -> Self {
        Self {
            service,
            http,
            queue,
            console,
            settings,
        }
    }

    /// Resolve the top-level capabilities from a container.
    pub fn from_container(container: &Container, settings: Settings) -> Result<Self> {
        Ok(Self::new(
            container.resolve::<dyn ClientService>()?,
            container.resolve::<dyn HttpClient>()?,
            container.resolve::<dyn MessageQueue>()?,
            container.resolve::<dyn Console>()?,
            settings,
        ))
    }

    pub fn service(&self) -> &Arc<dyn ClientService> {
        &self.service
    }

    pub fn http(&self) -> &Arc<dyn HttpClient> {
        &self.http
    }

    pub fn queue(&self) -> &Arc<dyn MessageQueue> {
        &self.queue
    }

    /// Run the cascades selected by `scenario`, in order, stopping at the
    /// first failure.
    pub async fn run(&self, scenario: Scenario) -> Result<()> {
        self.console.line("Service start");

        if scenario.includes(Scenario::Client) {
            self.cascade(Scenario::Client, self.service.do_action()).await?;
        }
        if scenario.includes(Scenario::Http) {
            self.cascade(Scenario::Http, self.http.handle(&self.settings.person))
                .await?;
        }
        if scenario.includes(Scenario::Pipeline) {
            self.cascade(Scenario::Pipeline, self.queue.receive()).await?;
        }

        Ok(())
    }

    /// Await one cascade, dropping it when the configured timeout elapses.
    async fn cascade<F>(&self, scenario: Scenario, cascade: F) -> Result<()>
    where
        F: Future<Output = Result<()>>,
    {
        info!(%scenario, "Starting cascade");
        match self.settings.timeout {
            None => cascade.await,
            Some(limit) => tokio::time::timeout(limit, cascade)
                .await
                .map_err(|_| Error::Timeout {
                    operation: format!("{scenario} cascade"),
                    after_ms: limit.as_millis() as u64,
                })?,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::adapters::RecordingConsole;
    use std::time::Duration;

    #[test]
    fn test_strategy_from_str() {
        assert_eq!("Manual".parse::<Strategy>().unwrap(), Strategy::Manual);
        assert_eq!("container".parse::<Strategy>().unwrap(), Strategy::Container);
        assert!("dig".parse::<Strategy>().is_err());
    }

    #[tokio::test(start_paused = true)]
    async fn test_timeout_aborts_rest_of_cascade() {
        let console = Arc::new(RecordingConsole::new());
        let settings = Settings {
            latency: Duration::from_secs(3),
            timeout: Some(Duration::from_secs(4)),
            ..Settings::default()
        };
        let app = compose(Strategy::Manual, &settings, console.clone()).unwrap();

        // queue (3s) + auth (3s) exceeds the 4s budget before the db step.
        let result = app.run(Scenario::Pipeline).await;
        assert!(matches!(result, Err(Error::Timeout { after_ms: 4000, .. })));
        assert!(!console.lines().contains(&"[infra] Save DB!".to_string()));
    }
}
