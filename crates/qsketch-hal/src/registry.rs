//! Executor registry.
//!
//! The [`ExecutorRegistry`] maps executor names to constructors so callers
//! can go from a profile to a running executor without naming concrete
//! types.

use rustc_hash::FxHashMap;
use tracing::debug;

use crate::config::{ExecutorConfig, ExecutorProfiles};
use crate::error::{HalError, HalResult};
use crate::executor::{Executor, ExecutorFactory};
use crate::replay::ReplayExecutor;

type Factory = Box<dyn Fn(ExecutorConfig) -> HalResult<Box<dyn Executor>> + Send + Sync>;

/// Central registry for executors.
pub struct ExecutorRegistry {
    factories: FxHashMap<String, Factory>,
}

impl ExecutorRegistry {
    /// Create a new empty registry.
    pub fn new() -> Self {
        Self {
            factories: FxHashMap::default(),
        }
    }

    /// A registry with the executors shipped in this crate (`replay`).
    pub fn with_defaults() -> Self {
        let mut registry = Self::new();
        registry.register::<ReplayExecutor>("replay");
        registry
    }

    /// Register an executor type.
    pub fn register<E>(&mut self, name: impl Into<String>)
    where
        E: ExecutorFactory + Executor + 'static,
    {
        let name = name.into();
        debug!("Registering executor: {}", name);
        self.factories.insert(
            name,
            Box::new(|config| {
                let executor = E::from_config(config)?;
                Ok(Box::new(executor))
            }),
        );
    }

    /// Register an executor with a custom constructor.
    pub fn register_factory(
        &mut self,
        name: impl Into<String>,
        factory: impl Fn(ExecutorConfig) -> HalResult<Box<dyn Executor>> + Send + Sync + 'static,
    ) {
        let name = name.into();
        debug!("Registering executor factory: {}", name);
        self.factories.insert(name, Box::new(factory));
    }

    /// Create an executor by name.
    pub fn create(&self, name: &str, config: ExecutorConfig) -> HalResult<Box<dyn Executor>> {
        let factory = self
            .factories
            .get(name)
            .ok_or_else(|| HalError::UnknownExecutor(name.to_string()))?;
        factory(config)
    }

    /// Create the executor a profile asks for.
    ///
    /// The profile's `backend` selects the registered executor; profiles
    /// without one use the profile name.
    pub fn create_from_profile(
        &self,
        profiles: &ExecutorProfiles,
        profile: &str,
    ) -> HalResult<Box<dyn Executor>> {
        let config = profiles.get(profile)?.clone();
        let name = config.backend.clone().unwrap_or_else(|| config.name.clone());
        self.create(&name, config)
    }

    /// List all registered executor names.
    pub fn available_executors(&self) -> Vec<String> {
        let mut names: Vec<_> = self.factories.keys().cloned().collect();
        names.sort();
        names
    }

    /// Check if an executor is registered under `name`.
    pub fn has_executor(&self, name: &str) -> bool {
        self.factories.contains_key(name)
    }
}

impl Default for ExecutorRegistry {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_empty_registry() {
        let registry = ExecutorRegistry::new();
        assert!(registry.available_executors().is_empty());
        assert!(!registry.has_executor("replay"));
    }

    #[test]
    fn test_register_factory() {
        let mut registry = ExecutorRegistry::new();
        registry.register_factory("test", |_config| {
            Err(HalError::ExecutorUnavailable("test only".into()))
        });

        assert!(registry.has_executor("test"));
        assert_eq!(registry.available_executors(), vec!["test"]);
        assert!(matches!(
            registry.create("test", ExecutorConfig::new("test")),
            Err(HalError::ExecutorUnavailable(_))
        ));
    }

    #[test]
    fn test_unknown_executor() {
        let registry = ExecutorRegistry::with_defaults();
        assert!(matches!(
            registry.create("ibmqx4", ExecutorConfig::new("qx")),
            Err(HalError::UnknownExecutor(name)) if name == "ibmqx4"
        ));
    }

    #[test]
    fn test_profile_selects_backend() {
        let mut profiles = ExecutorProfiles::default();
        profiles.insert(ExecutorConfig::new("offline").with_backend("replay"));
        let registry = ExecutorRegistry::with_defaults();
        let executor = registry.create_from_profile(&profiles, "offline").unwrap();
        assert_eq!(executor.name(), "offline");
    }
}
