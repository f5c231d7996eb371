//! Application layer - Use case services.
//!
//! Services here are thin orchestrators that:
//! - Hold their collaborators as capability traits (`Arc<dyn Port>`)
//! - Run each step in program order
//! - Abort on the first failing step

mod auth;
mod client_service;
mod worker;

pub use auth::AuthService;
pub use client_service::ClientServiceImpl;
pub use worker::MessageWorker;
