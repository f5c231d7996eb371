//! Ports layer - Capability traits (interfaces).
//!
//! Components depend on these traits only, held as `Arc<dyn Trait>`.
//! Implementations live in `adapters` and `application`.

mod console;
mod infrastructure;
mod services;

pub use console::Console;
pub use infrastructure::{Database, HttpClient, MessageQueue};
pub use services::{Authenticator, ClientRepository, ClientService, Worker};
