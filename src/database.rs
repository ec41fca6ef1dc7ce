//! Database Module
//!
//! The dispatcher that ties parsing to storage.
//!
//! ## Responsibilities
//! - Parse a query through the `Compute` layer
//! - Route each command type to the matching `Storage` operation
//! - Return the command, with the looked-up value filled in for GET
//!
//! Errors from either layer are returned unchanged.

use std::sync::Arc;

use crate::context::Context;
use crate::engine::MemoryEngine;
use crate::error::Result;
use crate::protocol::{Command, CommandType, Compute, Parser};
use crate::storage::{Storage, StorageManager};

/// The query entry point
///
/// ## Concurrency Model
///
/// `Database` holds no mutable state of its own. It is `Send + Sync` and may
/// be shared behind an `Arc` by any number of request-handling threads; all
/// synchronisation lives in the engine below the storage layer.
pub struct Database {
    /// Parses raw query text
    compute: Arc<dyn Compute>,

    /// Validated access to the engine
    storage: Arc<dyn Storage>,
}

impl Database {
    /// Create a database from its two collaborators
    pub fn new(compute: Arc<dyn Compute>, storage: Arc<dyn Storage>) -> Self {
        Self { compute, storage }
    }

    /// Wire a `Parser` over a fresh `MemoryEngine` (convenience method)
    pub fn in_memory() -> Self {
        let engine = Arc::new(MemoryEngine::new());
        let storage = Arc::new(StorageManager::new(engine));
        Self::new(Arc::new(Parser::new()), storage)
    }

    /// Parse and execute one query
    pub fn handle_query(&self, ctx: &Context, query: &str) -> Result<Command> {
        tracing::debug!(query, "processing query");

        let command = match self.compute.process_command(ctx, query) {
            Ok(cmd) => cmd,
            Err(e) => {
                tracing::warn!(query, error = %e, "failed to process command");
                return Err(e);
            }
        };

        self.execute(ctx, command)
    }

    /// Execute an already parsed command
    ///
    /// Routes commands to the storage layer
    pub fn execute(&self, ctx: &Context, mut command: Command) -> Result<Command> {
        let result = match command.kind {
            CommandType::Set => {
                let value = command.value.as_deref().unwrap_or_default();
                self.storage.set(ctx, &command.key, value)
            }
            CommandType::Get => self.storage.get(ctx, &command.key).map(|value| {
                command.value = Some(value);
            }),
            CommandType::Del => self.storage.delete(ctx, &command.key),
        };

        match result {
            Ok(()) => {
                tracing::debug!(%command, "command executed successfully");
                Ok(command)
            }
            Err(e) => {
                tracing::warn!(
                    command = %command.kind,
                    key = %command.key,
                    error = %e,
                    "failed to execute command"
                );
                Err(e)
            }
        }
    }
}
