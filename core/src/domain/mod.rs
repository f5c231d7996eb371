//! Domain layer - Plain value objects.
//!
//! These types carry no I/O and are passed by reference between components.

mod scenario;
mod user;

// Re-export all domain types
pub use scenario::Scenario;
pub use user::{Person, User};
