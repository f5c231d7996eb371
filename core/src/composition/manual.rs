//! Manual composition: explicit constructor calls, leaves first.

use std::sync::Arc;

use tracing::debug;

use super::Application;
use crate::adapters::{SqsQueue, StubDatabase, StubHttpClient, StubRepository};
use crate::application::{AuthService, ClientServiceImpl, MessageWorker};
use crate::config::Settings;
use crate::ports::{
    Authenticator, ClientRepository, ClientService, Console, Database, HttpClient, MessageQueue,
    Worker,
};

/// Build every component once and pass each into its dependents.
pub fn compose(settings: &Settings, console: Arc<dyn Console>) -> Application {
    let repository: Arc<dyn ClientRepository> = Arc::new(StubRepository::new(console.clone()));
    let service: Arc<dyn ClientService> =
        Arc::new(ClientServiceImpl::new(repository, console.clone()));

    let auth: Arc<dyn Authenticator> =
        Arc::new(AuthService::new(console.clone(), settings.latency));
    let http: Arc<dyn HttpClient> = Arc::new(StubHttpClient::new(auth.clone(), console.clone()));

    let db: Arc<dyn Database> = Arc::new(StubDatabase::new(console.clone(), settings.latency));
    let worker: Arc<dyn Worker> = Arc::new(MessageWorker::with_user(
        auth,
        db,
        console.clone(),
        settings.user.clone(),
    ));
    let queue: Arc<dyn MessageQueue> =
        Arc::new(SqsQueue::new(worker, console.clone(), settings.latency));

    debug!("Manual composition complete");
    Application::new(service, http, queue, console, settings.clone())
}
