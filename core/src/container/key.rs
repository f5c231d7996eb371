//! Capability keys.

use std::any::TypeId;
use std::hash::{Hash, Hasher};

/// Identifies a capability trait, usually `dyn SomeTrait`.
///
/// Equality and hashing use the `TypeId` only; the name is kept for messages.
#[derive(Debug, Clone, Copy)]
pub struct CapabilityKey {
    id: TypeId,
    name: &'static str,
}

impl CapabilityKey {
    /// Key for the capability `T`.
    pub fn of<T: ?Sized + 'static>() -> Self {
        Self {
            id: TypeId::of::<T>(),
            name: std::any::type_name::<T>(),
        }
    }

    /// Fully qualified type name.
    pub fn type_name(&self) -> &'static str {
        self.name
    }

    /// Type name without module paths, e.g. `dyn Database`.
    pub fn short_name(&self) -> String {
        let (prefix, path) = match self.name.strip_prefix("dyn ") {
            Some(rest) => ("dyn ", rest),
            None => ("", self.name),
        };
        // Generic arguments may contain `::` too; only trim the outer path.
        let head = path.split('<').next().unwrap_or(path);
        let start = head.rfind("::").map(|i| i + 2).unwrap_or(0);
        format!("{prefix}{}", &path[start..])
    }
}

impl PartialEq for CapabilityKey {
    fn eq(&self, other: &Self) -> bool {
        self.id == other.id
    }
}

impl Eq for CapabilityKey {}

impl Hash for CapabilityKey {
    fn hash<H: Hasher>(&self, state: &mut H) {
        self.id.hash(state);
    }
}

impl std::fmt::Display for CapabilityKey {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.short_name())
    }
}
