//! Error types for the hexwire-core library.

use thiserror::Error;

/// Result type alias for hexwire operations.
pub type Result<T> = std::result::Result<T, Error>;

/// Errors raised while composing the service graph or running a cascade.
#[derive(Error, Debug)]
pub enum Error {
    /// A factory is already bound to this capability.
    #[error("Capability {capability} is already bound")]
    DuplicateBinding { capability: String },

    /// No factory is bound to a requested capability.
    #[error("No binding for capability {capability}{}", required_by_suffix(.required_by))]
    UnboundCapability {
        capability: String,
        required_by: Option<String>,
    },

    /// Resolution re-entered a capability that was still being resolved.
    #[error("Cyclic dependency: {cycle}")]
    CyclicDependency { cycle: String },

    /// A factory asked for a capability it did not declare at registration.
    #[error("Factory for {capability} requested undeclared dependency {dependency}")]
    UndeclaredDependency {
        capability: String,
        dependency: String,
    },

    /// A cached instance did not hold the capability its key names.
    #[error("Instance bound to {capability} has an unexpected type")]
    CapabilityMismatch { capability: String },

    /// A data-access or persistence step failed.
    #[error("Storage error: {0}")]
    Storage(String),

    /// A user record was rejected.
    #[error("Authentication failed: {0}")]
    Authentication(String),

    /// A cascade did not finish in time.
    #[error("{operation} timed out after {after_ms}ms")]
    Timeout { operation: String, after_ms: u64 },

    /// Configuration error.
    #[error("Configuration error: {0}")]
    Config(String),

    /// I/O error.
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// JSON serialization/deserialization error.
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),
}

fn required_by_suffix(required_by: &Option<String>) -> String {
    match required_by {
        Some(parent) => format!(" (required by {parent})"),
        None => String::new(),
    }
}

impl Error {
    /// Whether this error came from wiring the graph rather than running it.
    pub fn is_composition(&self) -> bool {
        matches!(
            self,
            Error::DuplicateBinding { .. }
                | Error::UnboundCapability { .. }
                | Error::CyclicDependency { .. }
                | Error::UndeclaredDependency { .. }
                | Error::CapabilityMismatch { .. }
        )
    }
}
