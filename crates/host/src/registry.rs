//! Module registry
//!
//! Modules are preloaded as loaders and instantiated on first `require`.
//! Later requires of the same name return the same instance.

use crate::error::CallError;
use crate::module::{HostModule, JsonModule};
use parking_lot::Mutex;
use std::collections::HashMap;
use std::sync::Arc;
use tablejson_core::CodecLimits;
use tracing::trace;

/// Constructor for a host module
pub type ModuleLoader = Box<dyn Fn() -> Arc<dyn HostModule> + Send + Sync>;

#[derive(Default)]
struct RegistryState {
    loaders: HashMap<String, ModuleLoader>,
    loaded: HashMap<String, Arc<dyn HostModule>>,
}

/// Registry of preloadable host modules
#[derive(Default)]
pub struct ModuleRegistry {
    state: Mutex<RegistryState>,
}

impl ModuleRegistry {
    /// Create an empty registry
    pub fn new() -> Self {
        Self::default()
    }

    /// Create a registry with the `json` module preloaded
    pub fn with_json() -> Self {
        Self::with_json_limits(CodecLimits::default())
    }

    /// Create a registry with the `json` module preloaded using `limits`
    pub fn with_json_limits(limits: CodecLimits) -> Self {
        let registry = Self::new();
        registry.preload(
            JsonModule::NAME,
            Box::new(move || Arc::new(JsonModule::with_limits(limits)) as Arc<dyn HostModule>),
        );
        registry
    }

    /// Register a loader under `name`
    ///
    /// Replaces any earlier loader and forgets an already loaded instance.
    pub fn preload(&self, name: &str, loader: ModuleLoader) {
        let mut state = self.state.lock();
        state.loaded.remove(name);
        state.loaders.insert(name.to_string(), loader);
    }

    /// Load (once) and return the module registered under `name`
    pub fn require(&self, name: &str) -> Result<Arc<dyn HostModule>, CallError> {
        let mut state = self.state.lock();
        if let Some(module) = state.loaded.get(name) {
            return Ok(Arc::clone(module));
        }

        let loader = state
            .loaders
            .get(name)
            .ok_or_else(|| CallError::ModuleNotFound(name.to_string()))?;
        let module = loader();
        trace!(module = name, "module loaded");
        state.loaded.insert(name.to_string(), Arc::clone(&module));
        Ok(module)
    }

    /// Check whether a loader is registered under `name`
    pub fn is_preloaded(&self, name: &str) -> bool {
        self.state.lock().loaders.contains_key(name)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::sync::atomic::{AtomicUsize, Ordering};

    #[test]
    fn test_require_json() {
        let registry = ModuleRegistry::with_json();
        let module = registry.require("json").unwrap();
        assert_eq!(module.name(), "json");
        assert!(module.exports().contains(&"encode"));
        assert!(module.exports().contains(&"decode"));
    }

    #[test]
    fn test_require_unknown_module() {
        let registry = ModuleRegistry::new();
        let err = registry.require("json").err().unwrap();
        assert_eq!(err, CallError::ModuleNotFound("json".to_string()));
    }

    #[test]
    fn test_require_loads_once() {
        static LOADS: AtomicUsize = AtomicUsize::new(0);

        let registry = ModuleRegistry::new();
        registry.preload(
            "json",
            Box::new(|| {
                LOADS.fetch_add(1, Ordering::SeqCst);
                Arc::new(JsonModule::new()) as Arc<dyn HostModule>
            }),
        );
        let first = registry.require("json").unwrap();
        let second = registry.require("json").unwrap();
        assert!(Arc::ptr_eq(&first, &second));
        assert_eq!(LOADS.load(Ordering::SeqCst), 1);
    }

    #[test]
    fn test_preload_replaces_loaded_instance() {
        let registry = ModuleRegistry::with_json();
        let first = registry.require("json").unwrap();
        registry.preload(
            "json",
            Box::new(|| Arc::new(JsonModule::new()) as Arc<dyn HostModule>),
        );
        let second = registry.require("json").unwrap();
        assert!(!Arc::ptr_eq(&first, &second));
        assert!(registry.is_preloaded("json"));
    }
}
