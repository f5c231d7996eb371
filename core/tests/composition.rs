//! End-to-end composition and cascade ordering.

use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::Arc;

use async_trait::async_trait;
use hexwire_core::adapters::{RecordingConsole, SqsQueue, StubDatabase};
use hexwire_core::application::{AuthService, MessageWorker};
use hexwire_core::composition::declarative;
use hexwire_core::ports::{
    Authenticator, ClientRepository, ClientService, Console, Database, MessageQueue, Worker,
};
use hexwire_core::{
    compose, CapabilityKey, Error, Registry, Result, Scenario, Settings, Strategy, User,
};

const PIPELINE: [&str; 4] = [
    "[infra] Message SQS",
    "[Domain] Process the message",
    "[App] Start auth",
    "[infra] Save DB!",
];

struct LoudRepository {
    console: Arc<dyn Console>,
}

#[async_trait]
impl ClientRepository for LoudRepository {
    async fn execute(&self) -> Result<()> {
        self.console.line("Repository done!");
        Ok(())
    }
}

struct LoudService {
    repository: Arc<dyn ClientRepository>,
    console: Arc<dyn Console>,
}

#[async_trait]
impl ClientService for LoudService {
    async fn do_action(&self) -> Result<()> {
        self.repository.execute().await?;
        self.console.line("Service done!");
        Ok(())
    }
}

#[tokio::test]
async fn both_strategies_produce_the_same_cascade() {
    for strategy in [Strategy::Manual, Strategy::Container] {
        let console = Arc::new(RecordingConsole::new());
        let app = compose(strategy, &Settings::instant(), console.clone()).unwrap();

        app.run(Scenario::All).await.unwrap();

        let mut expected = vec![
            "Service start",
            "Repository done!",
            "Service done!",
            "[App] Start auth",
            "Http done!",
        ];
        expected.extend(PIPELINE);
        assert_eq!(console.lines(), expected, "strategy {strategy}");
    }
}

#[tokio::test]
async fn queue_cascade_runs_once_per_receive() {
    let console = Arc::new(RecordingConsole::new());
    let app = compose(Strategy::Container, &Settings::instant(), console.clone()).unwrap();
    console.take();

    for _ in 0..3 {
        app.queue().receive().await.unwrap();
        assert_eq!(console.take(), PIPELINE);
    }
}

#[tokio::test]
async fn service_resolved_twice_builds_repository_once() {
    let repository_calls = Arc::new(AtomicUsize::new(0));
    let console = Arc::new(RecordingConsole::new());

    let mut registry = Registry::new();
    registry
        .register_instance::<dyn Console>(console.clone())
        .unwrap();
    let calls = repository_calls.clone();
    registry
        .register::<dyn ClientRepository, _>(&[CapabilityKey::of::<dyn Console>()], move |deps| {
            calls.fetch_add(1, Ordering::SeqCst);
            Ok(Arc::new(LoudRepository {
                console: deps.get::<dyn Console>()?,
            }) as Arc<dyn ClientRepository>)
        })
        .unwrap();
    registry
        .register::<dyn ClientService, _>(
            &[
                CapabilityKey::of::<dyn ClientRepository>(),
                CapabilityKey::of::<dyn Console>(),
            ],
            |deps| {
                Ok(Arc::new(LoudService {
                    repository: deps.get::<dyn ClientRepository>()?,
                    console: deps.get::<dyn Console>()?,
                }) as Arc<dyn ClientService>)
            },
        )
        .unwrap();
    let container = registry.build();

    let first = container.resolve::<dyn ClientService>().unwrap();
    let second = container.resolve::<dyn ClientService>().unwrap();
    assert!(Arc::ptr_eq(&first, &second));
    assert_eq!(repository_calls.load(Ordering::SeqCst), 1);

    first.do_action().await.unwrap();
    assert_eq!(console.lines(), vec!["Repository done!", "Service done!"]);
}

#[test]
fn cyclic_service_and_repository_fail_silently() {
    let console = Arc::new(RecordingConsole::new());
    let mut registry = Registry::new();

    let sink: Arc<dyn Console> = console.clone();
    let service_sink = sink.clone();
    registry
        .register::<dyn ClientService, _>(
            &[CapabilityKey::of::<dyn ClientRepository>()],
            move |deps| {
                service_sink.line("service factory ran");
                Ok(Arc::new(LoudService {
                    repository: deps.get::<dyn ClientRepository>()?,
                    console: service_sink.clone(),
                }) as Arc<dyn ClientService>)
            },
        )
        .unwrap();
    let repository_sink = sink.clone();
    registry
        .register::<dyn ClientRepository, _>(
            &[CapabilityKey::of::<dyn ClientService>()],
            move |_| {
                repository_sink.line("repository factory ran");
                Ok(Arc::new(LoudRepository {
                    console: repository_sink.clone(),
                }) as Arc<dyn ClientRepository>)
            },
        )
        .unwrap();
    let container = registry.build();

    assert!(matches!(
        container.resolve::<dyn ClientService>(),
        Err(Error::CyclicDependency { .. })
    ));
    assert!(console.is_empty());
}

#[test]
fn missing_database_aborts_before_any_construction() {
    let built = Arc::new(AtomicUsize::new(0));
    let console: Arc<dyn Console> = Arc::new(RecordingConsole::new());
    let mut registry = Registry::new();
    registry.register_instance::<dyn Console>(console).unwrap();

    let counter = built.clone();
    registry
        .register::<dyn Authenticator, _>(&[CapabilityKey::of::<dyn Console>()], move |deps| {
            counter.fetch_add(1, Ordering::SeqCst);
            Ok(Arc::new(AuthService::new(
                deps.get::<dyn Console>()?,
                std::time::Duration::ZERO,
            )) as Arc<dyn Authenticator>)
        })
        .unwrap();
    let counter = built.clone();
    registry
        .register::<dyn Worker, _>(
            &[
                CapabilityKey::of::<dyn Authenticator>(),
                CapabilityKey::of::<dyn Database>(),
                CapabilityKey::of::<dyn Console>(),
            ],
            move |deps| {
                counter.fetch_add(1, Ordering::SeqCst);
                Ok(Arc::new(MessageWorker::new(
                    deps.get::<dyn Authenticator>()?,
                    deps.get::<dyn Database>()?,
                    deps.get::<dyn Console>()?,
                )) as Arc<dyn Worker>)
            },
        )
        .unwrap();
    let container = registry.build();

    let result = container.resolve::<dyn Worker>();
    assert!(matches!(
        result,
        Err(Error::UnboundCapability { ref capability, .. }) if capability == "dyn Database"
    ));
    assert_eq!(built.load(Ordering::SeqCst), 0);
    assert_eq!(container.resolved_count(), 0);
}

#[tokio::test]
async fn manual_wiring_of_hexagonal_graph() {
    let console = Arc::new(RecordingConsole::new());
    let sink: Arc<dyn Console> = console.clone();

    let db: Arc<dyn Database> = Arc::new(StubDatabase::new(sink.clone(), Default::default()));
    let auth: Arc<dyn Authenticator> = Arc::new(AuthService::new(sink.clone(), Default::default()));
    let worker = Arc::new(MessageWorker::with_user(
        auth,
        db,
        sink.clone(),
        User::placeholder(),
    ));
    let queue = SqsQueue::new(worker, sink, Default::default());

    queue.receive().await.unwrap();
    assert_eq!(console.lines(), PIPELINE);
}

#[test]
fn container_graph_validates() {
    let console = Arc::new(RecordingConsole::new());
    let container = declarative::build_container(&Settings::instant(), console).unwrap();
    container.validate().unwrap();
    assert_eq!(container.bindings().len(), 8);
    assert_eq!(container.resolved_count(), 0);
}
