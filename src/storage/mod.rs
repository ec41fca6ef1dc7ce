//! Storage Module
//!
//! Validation layer between the database and the engine.
//!
//! ## Responsibilities
//! - Reject empty keys before they reach the engine
//! - Translate engine-level absence into `KeyNotFound`
//! - Be the only path the rest of the crate uses to reach an `Engine`
//!
//! ## Error Mapping
//! ```text
//! ┌────────┬──────────────┬──────────────┬──────────────────┐
//! │ Op     │ key == ""    │ key absent   │ key present      │
//! ├────────┼──────────────┼──────────────┼──────────────────┤
//! │ set    │ EmptyKey     │ Ok (insert)  │ Ok (overwrite)   │
//! │ get    │ EmptyKey     │ KeyNotFound  │ Ok(value)        │
//! │ delete │ EmptyKey     │ Ok (no-op)   │ Ok (removed)     │
//! └────────┴──────────────┴──────────────┴──────────────────┘
//! ```

mod manager;

pub use manager::StorageManager;

use crate::context::Context;
use crate::error::Result;

/// Validated key/value operations used by the database
pub trait Storage: Send + Sync {
    /// Store `value` under `key`
    fn set(&self, ctx: &Context, key: &str, value: &str) -> Result<()>;

    /// Fetch the value stored under `key`
    fn get(&self, ctx: &Context, key: &str) -> Result<String>;

    /// Remove `key`; removing an absent key succeeds
    fn delete(&self, ctx: &Context, key: &str) -> Result<()>;
}
