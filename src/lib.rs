//! # linekv
//!
//! An in-memory key-value store driven by a line-oriented command protocol:
//! - `SET <key> <value>`, `GET <key>`, `DEL <key>`
//! - Typed errors for grammar, arity and lookup failures
//! - Multi-reader/single-writer concurrency inside the engine
//! - Interactive REPL over any line-based reader/writer pair
//!
//! ## Architecture Overview
//!
//! ```text
//! ┌─────────────────────────────────────────────────────────────┐
//! │                        REPL Session                         │
//! │               (read line → handle → print)                  │
//! └─────────────────────┬───────────────────────────────────────┘
//!                       │
//! ┌─────────────────────▼───────────────────────────────────────┐
//! │                        Database                             │
//! │              (routes Command → Storage op)                  │
//! └──────────┬───────────────────────────────────┬──────────────┘
//!            │                                   │
//!            ▼                                   ▼
//!   ┌─────────────────┐                 ┌─────────────────┐
//!   │     Parser      │                 │  StorageManager │
//!   │ (grammar check) │                 │ (key validation)│
//!   └─────────────────┘                 └────────┬────────┘
//!                                                │
//!                                                ▼
//!                                       ┌─────────────────┐
//!                                       │  MemoryEngine   │
//!                                       │    (RwLock)     │
//!                                       └─────────────────┘
//! ```

// =============================================================================
// Module Declarations
// =============================================================================

pub mod error;
pub mod config;
pub mod context;

pub mod engine;
pub mod storage;
pub mod protocol;
pub mod database;
pub mod repl;

// =============================================================================
// Public API Re-exports
// =============================================================================

pub use error::{KvError, Result};
pub use config::Config;
pub use context::Context;
pub use database::Database;

// =============================================================================
// Version Info
// =============================================================================

/// Current version of linekv
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
