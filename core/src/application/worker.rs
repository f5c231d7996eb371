//! Message worker (domain orchestration).

use std::sync::Arc;

use async_trait::async_trait;
use tracing::info;

use crate::domain::User;
use crate::error::Result;
use crate::ports::{Authenticator, Console, Database, Worker};

/// Processes one message: authenticate the user, then persist.
pub struct MessageWorker {
    auth: Arc<dyn Authenticator>,
    db: Arc<dyn Database>,
    console: Arc<dyn Console>,
    user: User,
}

impl MessageWorker {
    /// Worker that authenticates [`User::placeholder`] on every message.
    pub fn new(auth: Arc<dyn Authenticator>, db: Arc<dyn Database>, console: Arc<dyn Console>) -> Self {
        Self::with_user(auth, db, console, User::placeholder())
    }

    pub fn with_user(
        auth: Arc<dyn Authenticator>,
        db: Arc<dyn Database>,
        console: Arc<dyn Console>,
        user: User,
    ) -> Self {
        Self {
            auth,
            db,
            console,
            user,
        }
    }
}

#[async_trait]
impl Worker for MessageWorker {
    async fn process(&self) -> Result<()> {
        info!("Processing message");
        self.console.line("[Domain] Process the message");

        // A fresh record per message; nothing is kept between calls.
        let user = self.user.clone();
        self.auth.authenticate(&user).await?;
        self.db.save().await
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::adapters::{RecordingConsole, StubDatabase};
    use crate::application::AuthService;
    use crate::error::Error;
    use std::sync::atomic::{AtomicUsize, Ordering};
    use std::time::Duration;

    struct CountingDatabase(AtomicUsize);

    #[async_trait]
    impl Database for CountingDatabase {
        async fn save(&self) -> Result<()> {
            self.0.fetch_add(1, Ordering::SeqCst);
            Ok(())
        }
    }

    #[tokio::test]
    async fn test_auth_before_db() {
        let console = Arc::new(RecordingConsole::new());
        let worker = MessageWorker::new(
            Arc::new(AuthService::new(console.clone(), Duration::ZERO)),
            Arc::new(StubDatabase::new(console.clone(), Duration::ZERO)),
            console.clone(),
        );

        worker.process().await.unwrap();
        assert_eq!(
            console.lines(),
            vec!["[Domain] Process the message", "[App] Start auth", "[infra] Save DB!"]
        );
    }

    #[tokio::test]
    async fn test_auth_failure_skips_db() {
        let console = Arc::new(RecordingConsole::new());
        let db = Arc::new(CountingDatabase(AtomicUsize::new(0)));
        let worker = MessageWorker::with_user(
            Arc::new(AuthService::new(console.clone(), Duration::ZERO)),
            db.clone(),
            console,
            User::new("", "123456"),
        );

        assert!(matches!(worker.process().await, Err(Error::Authentication(_))));
        assert_eq!(db.0.load(Ordering::SeqCst), 0);
    }
}
