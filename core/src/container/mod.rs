//! Capability container - registry and resolver.
//!
//! ```text
//! Registry (mutable)                 Container (sealed)
//! ──────────────────                 ──────────────────
//! register::<dyn Trait>(deps, f)  →  resolve::<dyn Trait>()
//!                                        ↓ plan (depth-first, cycle check)
//!                                        ↓ build leaves first
//!                                        ↓ cache one instance per key
//! ```
//!
//! Dependencies are declared as [`CapabilityKey`] lists at registration time,
//! so the resolver never inspects factory signatures.
//!
//! ## Usage
//!
//! ```rust,ignore
//! let mut registry = Registry::new();
//! registry.register::<dyn Database, _>(&[], |_| Ok(Arc::new(StubDatabase::new(..)) as Arc<dyn Database>))?;
//! let container = registry.build();
//! let db: Arc<dyn Database> = container.resolve()?;
//! ```

mod key;
mod registry;
mod resolver;

pub use key::CapabilityKey;
pub use registry::{BindingInfo, Dependencies, Registry};
pub use resolver::Container;
