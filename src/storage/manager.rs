//! Storage Manager
//!
//! Wraps an `Engine` and applies key validation and error translation.

use std::sync::Arc;

use super::Storage;
use crate::context::Context;
use crate::engine::Engine;
use crate::error::{KvError, Result};

/// Default `Storage` implementation over any engine
///
/// Holds no state of its own beyond the shared engine handle.
pub struct StorageManager<E: Engine> {
    engine: Arc<E>,
}

impl<E: Engine> StorageManager<E> {
    /// Create a storage layer over `engine`
    pub fn new(engine: Arc<E>) -> Self {
        Self { engine }
    }

    /// Get the underlying engine
    pub fn engine(&self) -> &Arc<E> {
        &self.engine
    }

    fn ensure_key(key: &str) -> Result<()> {
        if key.is_empty() {
            return Err(KvError::EmptyKey);
        }
        Ok(())
    }
}

impl<E: Engine> Storage for StorageManager<E> {
    fn set(&self, ctx: &Context, key: &str, value: &str) -> Result<()> {
        tracing::debug!(key, value, "storage set");
        Self::ensure_key(key)?;

        self.engine.set(ctx, key, value);
        Ok(())
    }

    fn get(&self, ctx: &Context, key: &str) -> Result<String> {
        tracing::debug!(key, "storage get");
        Self::ensure_key(key)?;

        self.engine.get(ctx, key).ok_or(KvError::KeyNotFound)
    }

    fn delete(&self, ctx: &Context, key: &str) -> Result<()> {
        tracing::debug!(key, "storage delete");
        Self::ensure_key(key)?;

        self.engine.delete(ctx, key);
        Ok(())
    }
}
