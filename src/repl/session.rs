//! Session Handler
//!
//! Drives one interactive client over a line reader and a writer.

use std::io::{BufRead, Write};
use std::sync::Arc;

use crate::config::Config;
use crate::context::Context;
use crate::database::Database;
use crate::error::{KvError, Result};
use crate::protocol::Response;

/// Handles a single interactive client
pub struct Session<R, W> {
    /// Line source (stdin in the CLI)
    reader: R,

    /// Output sink (stdout in the CLI)
    writer: W,

    /// Reference to the database
    database: Arc<Database>,

    /// Prompt, exit word and banner settings
    config: Config,
}

impl<R: BufRead, W: Write> Session<R, W> {
    /// Create a new session
    pub fn new(reader: R, writer: W, database: Arc<Database>, config: Config) -> Self {
        Self {
            reader,
            writer,
            database,
            config,
        }
    }

    /// Run the session (blocking until exit or end of input)
    ///
    /// Query failures are printed and the loop continues. Only I/O errors
    /// end the session early.
    pub fn run(&mut self, ctx: &Context) -> Result<()> {
        tracing::debug!("session started");

        if self.config.show_banner {
            self.write_banner()?;
        }

        let mut line = String::new();
        loop {
            write!(self.writer, "{}", self.config.prompt)?;
            self.writer.flush()?;

            line.clear();
            let read = match self.reader.read_line(&mut line) {
                Ok(n) => n,
                Err(e) if e.kind() == std::io::ErrorKind::InvalidData => {
                    // Not UTF-8; report and keep reading
                    tracing::warn!(error = %e, "failed to read input");
                    writeln!(self.writer, "Error: {}", KvError::InvalidCommand)?;
                    continue;
                }
                Err(e) => return Err(e.into()),
            };

            if read == 0 {
                tracing::debug!("end of input");
                writeln!(self.writer)?;
                return Ok(());
            }

            let query = line.trim();
            if query == self.config.exit_command {
                tracing::info!("exiting session");
                writeln!(self.writer, "Goodbye!")?;
                self.writer.flush()?;
                return Ok(());
            }

            let response = self.execute_query(ctx, query);
            writeln!(self.writer, "{}", response)?;
        }
    }

    /// Handle a query and turn the outcome into a response
    fn execute_query(&self, ctx: &Context, query: &str) -> Response {
        let outcome = self.database.handle_query(ctx, query);
        if let Ok(command) = &outcome {
            tracing::info!(command = %command.kind, key = %command.key, "query processed");
        }
        Response::from_outcome(&outcome)
    }

    fn write_banner(&mut self) -> Result<()> {
        writeln!(self.writer, "Welcome to linekv")?;
        writeln!(self.writer, "Type '{}' to quit", self.config.exit_command)?;
        writeln!(self.writer, "Available commands:")?;
        writeln!(self.writer, "  SET <key> <value>")?;
        writeln!(self.writer, "  GET <key>")?;
        writeln!(self.writer, "  DEL <key>")?;
        Ok(())
    }

    /// Consume the session, returning the writer
    pub fn into_writer(self) -> W {
        self.writer
    }
}
