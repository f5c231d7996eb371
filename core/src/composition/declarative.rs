//! Container composition: register factories, then resolve the roots.

use std::sync::Arc;

use tracing::debug;

use super::Application;
use crate::adapters::{SqsQueue, StubDatabase, StubHttpClient, StubRepository};
use crate::application::{AuthService, ClientServiceImpl, MessageWorker};
use crate::config::Settings;
use crate::container::{CapabilityKey, Container, Registry};
use crate::error::Result;
use crate::ports::{
    Authenticator, ClientRepository, ClientService, Console, Database, HttpClient, MessageQueue,
    Worker,
};

fn key<T: ?Sized + 'static>() -> CapabilityKey {
    CapabilityKey::of::<T>()
}

/// Bind every capability of the service graph.
///
/// | Capability | Implementation | Depends on |
/// |------------|----------------|------------|
/// | `dyn Console` | given instance | - |
/// | `dyn ClientRepository` | `StubRepository` | Console |
/// | `dyn ClientService` | `ClientServiceImpl` | ClientRepository, Console |
/// | `dyn Authenticator` | `AuthService` | Console |
/// | `dyn HttpClient` | `StubHttpClient` | Authenticator, Console |
/// | `dyn Database` | `StubDatabase` | Console |
/// | `dyn Worker` | `MessageWorker` | Authenticator, Database, Console |
/// | `dyn MessageQueue` | `SqsQueue` | Worker, Console |
pub fn register(
    registry: &mut Registry,
    settings: &Settings,
    console: Arc<dyn Console>,
) -> Result<()> {
    let latency = settings.latency;
    let user = settings.user.clone();

    registry.register_instance::<dyn Console>(console)?;

    registry.register::<dyn ClientRepository, _>(&[key::<dyn Console>()], |deps| {
        let repository = StubRepository::new(deps.get::<dyn Console>()?);
        Ok(Arc::new(repository) as Arc<dyn ClientRepository>)
    })?;

    registry.register::<dyn ClientService, _>(
        &[key::<dyn ClientRepository>(), key::<dyn Console>()],
        |deps| {
            let service = ClientServiceImpl::new(
                deps.get::<dyn ClientRepository>()?,
                deps.get::<dyn Console>()?,
            );
            Ok(Arc::new(service) as Arc<dyn ClientService>)
        },
    )?;

    registry.register::<dyn Authenticator, _>(&[key::<dyn Console>()], move |deps| {
        let auth = AuthService::new(deps.get::<dyn Console>()?, latency);
        Ok(Arc::new(auth) as Arc<dyn Authenticator>)
    })?;

    registry.register::<dyn HttpClient, _>(
        &[key::<dyn Authenticator>(), key::<dyn Console>()],
        |deps| {
            let http = StubHttpClient::new(
                deps.get::<dyn Authenticator>()?,
                deps.get::<dyn Console>()?,
            );
            Ok(Arc::new(http) as Arc<dyn HttpClient>)
        },
    )?;

    registry.register::<dyn Database, _>(&[key::<dyn Console>()], move |deps| {
        let db = StubDatabase::new(deps.get::<dyn Console>()?, latency);
        Ok(Arc::new(db) as Arc<dyn Database>)
    })?;

    registry.register::<dyn Worker, _>(
        &[
            key::<dyn Authenticator>(),
            key::<dyn Database>(),
            key::<dyn Console>(),
        ],
        move |deps| {
            let worker = MessageWorker::with_user(
                deps.get::<dyn Authenticator>()?,
                deps.get::<dyn Database>()?,
                deps.get::<dyn Console>()?,
                user.clone(),
            );
            Ok(Arc::new(worker) as Arc<dyn Worker>)
        },
    )?;

    registry.register::<dyn MessageQueue, _>(
        &[key::<dyn Worker>(), key::<dyn Console>()],
        move |deps| {
            let queue = SqsQueue::new(
                deps.get::<dyn Worker>()?,
                deps.get::<dyn Console>()?,
                latency,
            );
            Ok(Arc::new(queue) as Arc<dyn MessageQueue>)
        },
    )?;

    debug!(bindings = registry.len(), "Registered service graph");
    Ok(())
}

/// Register the service graph and seal it into a container.
pub fn build_container(settings: &Settings, console: Arc<dyn Console>) -> Result<Container> {
    let mut registry = Registry::new();
    register(&mut registry, settings, console)?;
    Ok(registry.build())
}

/// Compose the application through the container.
pub fn compose(settings: &Settings, console: Arc<dyn Console>) -> Result<Application> {
    let container = build_container(settings, console)?;
    let app = Application::from_container(&container, settings.clone())?;
    debug!(instances = container.resolved_count(), "Container composition complete");
    Ok(app)
}
