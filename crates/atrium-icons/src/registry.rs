//! Process-wide icon registry.
//!
//! The registry maps icon names to their static definitions. It is
//! populated once, on first access, and read-only afterwards, so any
//! number of concurrent render passes can look icons up without
//! synchronization.

use std::collections::HashMap;
use std::sync::OnceLock;

use tracing::debug;

use crate::catalog::BUILTIN;
use crate::error::{IconError, IconResult};
use crate::types::IconData;

static REGISTRY: OnceLock<IconRegistry> = OnceLock::new();

/// Name-indexed collection of icon definitions.
#[derive(Debug, Clone)]
pub struct IconRegistry {
    icons: HashMap<&'static str, &'static IconData>,
}

impl IconRegistry {
    /// Build a registry over the built-in catalog.
    fn builtin() -> Self {
        let mut icons = HashMap::with_capacity(BUILTIN.len());
        for icon in BUILTIN {
            icons.insert(icon.name, *icon);
        }
        debug!(count = icons.len(), "icon registry populated");
        Self { icons }
    }

    /// Get a definition by name.
    pub fn get(&self, name: &str) -> Option<&'static IconData> {
        self.icons.get(name).copied()
    }

    /// Get a definition by name, failing fast on an unknown name.
    ///
    /// A name that is not registered is an integration error in the
    /// calling screen, so this surfaces [`IconError::UnknownIcon`]
    /// instead of silently rendering nothing.
    pub fn lookup(&self, name: &str) -> IconResult<&'static IconData> {
        self.get(name).ok_or_else(|| IconError::UnknownIcon {
            name: name.to_string(),
        })
    }

    /// Check if a name is registered.
    pub fn contains(&self, name: &str) -> bool {
        self.icons.contains_key(name)
    }

    /// Iterate over all registered names.
    pub fn names(&self) -> impl Iterator<Item = &'static str> + '_ {
        self.icons.keys().copied()
    }

    /// Iterate over all registered definitions.
    pub fn icons(&self) -> impl Iterator<Item = &'static IconData> + '_ {
        self.icons.values().copied()
    }

    /// Number of registered icons.
    pub fn len(&self) -> usize {
        self.icons.len()
    }

    /// Check if the registry is empty.
    pub fn is_empty(&self) -> bool {
        self.icons.is_empty()
    }
}

/// The process-wide registry, populated on first access.
pub fn registry() -> &'static IconRegistry {
    REGISTRY.get_or_init(IconRegistry::builtin)
}
