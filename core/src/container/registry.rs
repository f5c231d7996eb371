//! Registry - binds capability keys to factories.

use std::any::Any;
use std::collections::HashMap;
use std::sync::Arc;

use serde::Serialize;
use tracing::debug;

use super::key::CapabilityKey;
use super::Container;
use crate::error::{Error, Result};

/// Type-erased capability handle. Always holds an `Arc<T>` for the key's `T`.
pub(crate) type Instance = Arc<dyn Any + Send + Sync>;

type ErasedFactory = Box<dyn Fn(&Dependencies<'_>) -> Result<Instance> + Send + Sync>;

/// A factory together with the capabilities it needs.
pub(crate) struct Binding {
    pub(crate) dependencies: Vec<CapabilityKey>,
    pub(crate) factory: ErasedFactory,
}

/// Serializable description of one binding.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct BindingInfo {
    pub capability: String,
    pub dependencies: Vec<String>,
}

/// Collects factory bindings before any resolution happens.
///
/// Registration order does not matter; resolution follows the declared
/// dependency keys. Call [`Registry::build`] to obtain a [`Container`].
///
/// # Duplicate policy
/// Binding a key twice fails with [`Error::DuplicateBinding`] and leaves the
/// first binding in place.
#[derive(Default)]
pub struct Registry {
    bindings: HashMap<CapabilityKey, Binding>,
    order: Vec<CapabilityKey>,
}

impl Registry {
    pub fn new() -> Self {
        Self::default()
    }

    /// Bind a factory producing capability `T` from the given dependencies.
    ///
    /// The factory may only ask [`Dependencies`] for keys listed in
    /// `dependencies`.
    pub fn register<T, F>(&mut self, dependencies: &[CapabilityKey], factory: F) -> Result<()>
    where
        T: ?Sized + Send + Sync + 'static,
        F: Fn(&Dependencies<'_>) -> Result<Arc<T>> + Send + Sync + 'static,
    {
        let key = CapabilityKey::of::<T>();
        if self.bindings.contains_key(&key) {
            return Err(Error::DuplicateBinding {
                capability: key.to_string(),
            });
        }

        let factory: ErasedFactory = Box::new(move |deps| {
            let instance = factory(deps)?;
            Ok(Arc::new(instance) as Instance)
        });

        debug!(capability = %key, dependencies = dependencies.len(), "Registered binding");
        self.bindings.insert(
            key,
            Binding {
                dependencies: dependencies.to_vec(),
                factory,
            },
        );
        self.order.push(key);
        Ok(())
    }

    /// Bind an already constructed instance as capability `T`.
    pub fn register_instance<T>(&mut self, instance: Arc<T>) -> Result<()>
    where
        T: ?Sized + Send + Sync + 'static,
    {
        self.register::<T, _>(&[], move |_| Ok(Arc::clone(&instance)))
    }

    /// Check whether a factory is bound for `T`.
    pub fn is_bound<T: ?Sized + 'static>(&self) -> bool {
        self.bindings.contains_key(&CapabilityKey::of::<T>())
    }

    pub fn len(&self) -> usize {
        self.bindings.len()
    }

    pub fn is_empty(&self) -> bool {
        self.bindings.is_empty()
    }

    /// Describe every binding, in registration order.
    pub fn bindings(&self) -> Vec<BindingInfo> {
        describe(&self.bindings, &self.order)
    }

    /// Seal the registry and create the resolver with an empty instance cache.
    pub fn build(self) -> Container {
        Container::new(self.bindings, self.order)
    }
}

pub(crate) fn describe(
    bindings: &HashMap<CapabilityKey, Binding>,
    order: &[CapabilityKey],
) -> Vec<BindingInfo> {
    order
        .iter()
        .filter_map(|key| {
            bindings.get(key).map(|binding| BindingInfo {
                capability: key.to_string(),
                dependencies: binding.dependencies.iter().map(|d| d.to_string()).collect(),
            })
        })
        .collect()
}

/// Resolved dependencies handed to a factory.
pub struct Dependencies<'a> {
    owner: CapabilityKey,
    declared: &'a [CapabilityKey],
    resolved: &'a HashMap<CapabilityKey, Instance>,
}

impl<'a> Dependencies<'a> {
    pub(crate) fn new(
        owner: CapabilityKey,
        declared: &'a [CapabilityKey],
        resolved: &'a HashMap<CapabilityKey, Instance>,
    ) -> Self {
        Self {
            owner,
            declared,
            resolved,
        }
    }

    /// Get the resolved instance of a declared dependency.
    pub fn get<T>(&self) -> Result<Arc<T>>
    where
        T: ?Sized + Send + Sync + 'static,
    {
        let key = CapabilityKey::of::<T>();
        if !self.declared.contains(&key) {
            return Err(Error::UndeclaredDependency {
                capability: self.owner.to_string(),
                dependency: key.to_string(),
            });
        }

        let instance = self
            .resolved
            .get(&key)
            .ok_or_else(|| Error::UnboundCapability {
                capability: key.to_string(),
                required_by: Some(self.owner.to_string()),
            })?;
        downcast::<T>(instance, key)
    }
}

pub(crate) fn downcast<T>(instance: &Instance, key: CapabilityKey) -> Result<Arc<T>>
where
    T: ?Sized + Send + Sync + 'static,
{
    instance
        .downcast_ref::<Arc<T>>()
        .cloned()
        .ok_or_else(|| Error::CapabilityMismatch {
            capability: key.to_string(),
        })
}

#[cfg(test)]
mod tests {
    use super::*;

    trait Greeter: Send + Sync {
        fn greet(&self) -> String;
    }

    struct English;

    impl Greeter for English {
        fn greet(&self) -> String {
            "hello".to_string()
        }
    }

    #[test]
    fn test_register_and_describe() {
        let mut registry = Registry::new();
        assert!(registry.is_empty());

        registry
            .register::<dyn Greeter, _>(&[], |_| Ok(Arc::new(English) as Arc<dyn Greeter>))
            .unwrap();

        assert!(registry.is_bound::<dyn Greeter>());
        assert!(!registry.is_bound::<String>());
        assert_eq!(registry.len(), 1);

        let info = registry.bindings();
        assert_eq!(info[0].capability, "dyn Greeter");
        assert!(info[0].dependencies.is_empty());
    }

    #[test]
    fn test_duplicate_binding_keeps_first() {
        let mut registry = Registry::new();
        registry
            .register_instance::<dyn Greeter>(Arc::new(English))
            .unwrap();

        let result = registry.register::<dyn Greeter, _>(&[], |_| {
            panic!("second factory must never be stored")
        });
        assert!(matches!(result, Err(Error::DuplicateBinding { .. })));
        assert_eq!(registry.len(), 1);

        let container = registry.build();
        assert_eq!(container.resolve::<dyn Greeter>().unwrap().greet(), "hello");
    }

    #[test]
    fn test_undeclared_dependency() {
        let mut registry = Registry::new();
        registry
            .register_instance::<dyn Greeter>(Arc::new(English))
            .unwrap();
        registry
            .register::<String, _>(&[], |deps| {
                let greeter = deps.get::<dyn Greeter>()?;
                Ok(Arc::new(greeter.greet()))
            })
            .unwrap();

        let container = registry.build();
        let err = container.resolve::<String>().unwrap_err();
        assert!(matches!(err, Error::UndeclaredDependency { .. }));
    }
}
