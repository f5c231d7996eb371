//! Hexwire Core Library
//!
//! Layered service composition: capability-bound components wired together
//! by a composition root that supplies each component's dependencies by
//! capability trait rather than concrete type.
//! Provides:
//! - A capability registry and resolver (one instance per capability)
//! - Manual and container-driven composition roots
//! - Stub repository, service, auth, http, db, worker and queue components
//! - JSON configuration and tracing setup
//!
//! # Architecture
//! This library follows hexagonal architecture (ports & adapters):
//! - `domain`: Plain value objects
//! - `ports`: Capability traits (interfaces)
//! - `adapters`: Infrastructure stand-ins
//! - `application`: Use case services
//! - `container`: Registry and resolver
//! - `composition`: Composition roots

// Hexagonal architecture layers
pub mod domain;
pub mod ports;
pub mod adapters;
pub mod application;

pub mod composition;
pub mod config;
pub mod container;
pub mod error;
pub mod logging;

// Re-export domain types (primary API)
pub use domain::{Person, Scenario, User};

// Re-export other commonly used types
pub use composition::{compose, Application, Strategy};
pub use config::{Config, ConfigStore, Settings};
pub use container::{BindingInfo, CapabilityKey, Container, Dependencies, Registry};
pub use error::{Error, Result};
