//! Engine Module
//!
//! Raw in-memory custody of key/value pairs.
//!
//! ## Responsibilities
//! - Insert, overwrite, read and remove string pairs
//! - Multi-reader/single-writer access pattern
//! - No validation and no error vocabulary: absence is reported as `None`
//!
//! ## Data Structure Choice
//! Using HashMap wrapped in RwLock:
//! - No ordering requirement (nothing is scanned or flushed)
//! - Simple and correct first; a sharded engine can be dropped in behind
//!   the `Engine` trait without touching the layers above

mod memory;

pub use memory::MemoryEngine;

use crate::context::Context;

/// Primitive storage operations over string pairs
///
/// Implementations must be safe to share across threads without external
/// locking. None of the operations can fail.
pub trait Engine: Send + Sync {
    /// Insert or overwrite `key`. Empty keys are silently ignored.
    fn set(&self, ctx: &Context, key: &str, value: &str);

    /// Current value for `key`, or `None` if absent
    fn get(&self, ctx: &Context, key: &str) -> Option<String>;

    /// Remove `key` if present
    fn delete(&self, ctx: &Context, key: &str);
}
