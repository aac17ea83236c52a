//! Name-indexed registry of skin APIs for runtime provider lookup.

use std::collections::HashMap;

use super::api::SkinApi;

/// Registry of skin APIs sharing a key type, indexed by name.
pub struct SkinApiRegistry<V> {
    apis: HashMap<String, SkinApi<V>>,
}

impl<V: Send + Sync + 'static> SkinApiRegistry<V> {
    pub fn new() -> Self {
        Self {
            apis: HashMap::new(),
        }
    }

    /// Register an API under its own name, replacing any previous entry.
    pub fn register(&mut self, api: SkinApi<V>) {
        self.apis.insert(api.name().to_string(), api);
    }

    pub fn get(&self, name: &str) -> Option<&SkinApi<V>> {
        self.apis.get(name)
    }

    /// Registered names, sorted.
    pub fn list_names(&self) -> Vec<&str> {
        let mut names: Vec<&str> = self.apis.keys().map(|s| s.as_str()).collect();
        names.sort_unstable();
        names
    }
}

impl<V: Send + Sync + 'static> Default for SkinApiRegistry<V> {
    fn default() -> Self {
        Self::new()
    }
}
