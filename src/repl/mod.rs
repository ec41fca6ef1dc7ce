//! REPL Module
//!
//! Interactive read-eval-print loop over the database.
//!
//! ## Architecture
//! - One session per client, reading a line at a time
//! - Each line handed to `Database::handle_query`
//! - Outcome rendered through `protocol::Response`

mod session;

pub use session::Session;
