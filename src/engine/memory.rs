//! MemoryEngine implementation
//!
//! HashMap-based engine with RwLock for concurrency.

use std::collections::HashMap;

use parking_lot::RwLock;

use super::Engine;
use crate::context::Context;

/// In-memory engine holding the whole keyspace
pub struct MemoryEngine {
    data: RwLock<HashMap<String, String>>,
}

impl MemoryEngine {
    /// Create a new empty engine
    pub fn new() -> Self {
        Self {
            data: RwLock::new(HashMap::new()),
        }
    }

    /// Number of stored keys (read lock)
    pub fn len(&self) -> usize {
        self.data.read().len()
    }

    /// Check if no keys are stored (read lock)
    pub fn is_empty(&self) -> bool {
        self.data.read().is_empty()
    }
}

impl Default for MemoryEngine {
    fn default() -> Self {
        Self::new()
    }
}

impl Engine for MemoryEngine {
    /// Insert or overwrite (write lock)
    fn set(&self, _ctx: &Context, key: &str, value: &str) {
        if key.is_empty() {
            return;
        }

        self.data.write().insert(key.to_string(), value.to_string());
    }

    /// Point lookup (read lock)
    fn get(&self, _ctx: &Context, key: &str) -> Option<String> {
        self.data.read().get(key).cloned()
    }

    /// Remove if present (write lock)
    fn delete(&self, _ctx: &Context, key: &str) {
        self.data.write().remove(key);
    }
}
