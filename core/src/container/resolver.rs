//! Container - resolves capabilities and caches one instance per key.

use std::collections::{HashMap, HashSet};
use std::sync::Arc;

use parking_lot::Mutex;
use tracing::{debug, trace};

use super::key::CapabilityKey;
use super::registry::{describe, downcast, Binding, BindingInfo, Dependencies, Instance};
use crate::error::{Error, Result};

/// Resolver over a sealed set of bindings.
///
/// Every capability is constructed at most once per container. Resolution
/// first plans the whole subgraph (depth-first over declared keys) and only
/// then invokes factories, leaves first. A missing binding or a cycle is
/// therefore reported before any factory runs.
pub struct Container {
    bindings: HashMap<CapabilityKey, Binding>,
    order: Vec<CapabilityKey>,
    // Held across plan + build so concurrent callers never construct twice.
    cache: Mutex<HashMap<CapabilityKey, Instance>>,
}

impl Container {
    pub(crate) fn new(bindings: HashMap<CapabilityKey, Binding>, order: Vec<CapabilityKey>) -> Self {
        Self {
            bindings,
            order,
            cache: Mutex::new(HashMap::new()),
        }
    }

    /// Resolve capability `T`, constructing it and its dependencies on first use.
    pub fn resolve<T>(&self) -> Result<Arc<T>>
    where
        T: ?Sized + Send + Sync + 'static,
    {
        let key = CapabilityKey::of::<T>();
        let instance = self.resolve_key(key)?;
        downcast::<T>(&instance, key)
    }

    fn resolve_key(&self, key: CapabilityKey) -> Result<Instance> {
        let mut cache = self.cache.lock();
        if let Some(instance) = cache.get(&key) {
            trace!(capability = %key, "Cache hit");
            return Ok(Arc::clone(instance));
        }

        let plan = self.plan(key, &cache)?;
        for step in plan {
            let binding = self.binding(step, None)?;
            let instance = {
                let deps = Dependencies::new(step, &binding.dependencies, &cache);
                (binding.factory)(&deps)?
            };
            debug!(capability = %step, "Constructed instance");
            cache.insert(step, instance);
        }

        cache.get(&key).cloned().ok_or_else(|| Error::UnboundCapability {
            capability: key.to_string(),
            required_by: None,
        })
    }

    /// Order in which `root` and its missing dependencies must be built.
    fn plan(
        &self,
        root: CapabilityKey,
        cache: &HashMap<CapabilityKey, Instance>,
    ) -> Result<Vec<CapabilityKey>> {
        let mut in_progress = Vec::new();
        let mut planned = HashSet::new();
        let mut order = Vec::new();
        self.visit(root, None, cache, &mut in_progress, &mut planned, &mut order)?;
        Ok(order)
    }

    fn visit(
        &self,
        key: CapabilityKey,
        parent: Option<CapabilityKey>,
        cache: &HashMap<CapabilityKey, Instance>,
        in_progress: &mut Vec<CapabilityKey>,
        planned: &mut HashSet<CapabilityKey>,
        order: &mut Vec<CapabilityKey>,
    ) -> Result<()> {
        if cache.contains_key(&key) || planned.contains(&key) {
            return Ok(());
        }

        if let Some(start) = in_progress.iter().position(|k| *k == key) {
            let cycle = in_progress[start..]
                .iter()
                .chain(std::iter::once(&key))
                .map(|k| k.to_string())
                .collect::<Vec<_>>()
                .join(" -> ");
            return Err(Error::CyclicDependency { cycle });
        }

        let binding = self.binding(key, parent)?;

        in_progress.push(key);
        for dependency in &binding.dependencies {
            self.visit(*dependency, Some(key), cache, in_progress, planned, order)?;
        }
        in_progress.pop();

        planned.insert(key);
        order.push(key);
        Ok(())
    }

    fn binding(&self, key: CapabilityKey, parent: Option<CapabilityKey>) -> Result<&Binding> {
        self.bindings.get(&key).ok_or_else(|| Error::UnboundCapability {
            capability: key.to_string(),
            required_by: parent.map(|p| p.to_string()),
        })
    }

    /// Check every binding for missing or cyclic dependencies without
    /// invoking any factory.
    pub fn validate(&self) -> Result<()> {
        let cache = self.cache.lock();
        for key in &self.order {
            self.plan(*key, &cache)?;
        }
        Ok(())
    }

    /// Whether `T` has already been constructed.
    pub fn is_resolved<T: ?Sized + 'static>(&self) -> bool {
        self.cache.lock().contains_key(&CapabilityKey::of::<T>())
    }

    /// Number of instances constructed so far.
    pub fn resolved_count(&self) -> usize {
        self.cache.lock().len()
    }

    /// Describe every binding, in registration order.
    pub fn bindings(&self) -> Vec<BindingInfo> {
        describe(&self.bindings, &self.order)
    }
}
