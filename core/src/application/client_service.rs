//! Client application service.

use std::sync::Arc;

use async_trait::async_trait;
use tracing::debug;

use crate::error::Result;
use crate::ports::{ClientRepository, ClientService, Console};

/// Runs the repository step, then its own.
pub struct ClientServiceImpl {
    repository: Arc<dyn ClientRepository>,
    console: Arc<dyn Console>,
}

impl ClientServiceImpl {
    pub fn new(repository: Arc<dyn ClientRepository>, console: Arc<dyn Console>) -> Self {
        Self {
            repository,
            console,
        }
    }
}

#[async_trait]
impl ClientService for ClientServiceImpl {
    async fn do_action(&self) -> Result<()> {
        self.repository.execute().await?;
        debug!("Service step");
        self.console.line("Service done!");
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::adapters::{RecordingConsole, StubRepository};
    use crate::error::Error;

    struct BrokenRepository;

    #[async_trait]
    impl ClientRepository for BrokenRepository {
        async fn execute(&self) -> Result<()> {
            Err(Error::Storage("connection refused".to_string()))
        }
    }

    #[tokio::test]
    async fn test_repository_runs_before_service() {
        let console = Arc::new(RecordingConsole::new());
        let service =
            ClientServiceImpl::new(Arc::new(StubRepository::new(console.clone())), console.clone());

        for _ in 0..3 {
            service.do_action().await.unwrap();
            assert_eq!(console.take(), vec!["Repository done!", "Service done!"]);
        }
    }

    #[tokio::test]
    async fn test_storage_error_skips_service_step() {
        let console = Arc::new(RecordingConsole::new());
        let service = ClientServiceImpl::new(Arc::new(BrokenRepository), console.clone());

        assert!(matches!(service.do_action().await, Err(Error::Storage(_))));
        assert!(console.is_empty());
    }
}
