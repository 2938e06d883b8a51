use std::collections::BTreeMap;

use super::gate::Gate;
use crate::errors::RegistryError;

pub const HANDLER_SUFFIX: &str = "Handler";

/// Maps `<name>Handler` identifiers to gate variants.
#[derive(Clone, Debug, Default)]
pub struct HandlerRegistry {
    handlers: BTreeMap<String, Gate>,
}

impl HandlerRegistry {
    pub fn new() -> Self {
        Self::default()
    }

    /// Registry holding every built-in gate.
    pub fn with_defaults() -> Self {
        let mut registry = Self::new();
        for gate in Gate::ALL {
            registry.register(gate);
        }
        registry
    }

    pub fn register(&mut self, gate: Gate) {
        self.handlers.insert(gate.handler_name(), gate);
    }

    pub fn resolve(&self, name: &str) -> Result<Gate, RegistryError> {
        self.handlers
            .get(&format!("{name}{HANDLER_SUFFIX}"))
            .copied()
            .ok_or_else(|| RegistryError::UnknownHandler(name.to_string()))
    }

    /// Provider names, without the handler suffix.
    pub fn names(&self) -> Vec<&'static str> {
        self.handlers.values().map(|gate| gate.name()).collect()
    }
}
