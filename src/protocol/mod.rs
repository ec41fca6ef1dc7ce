//! Protocol Module
//!
//! Defines the line protocol spoken by clients.
//!
//! ## Request Format
//! One command per line, tokens separated by whitespace:
//! ```text
//! SET <key> <value>
//! GET <key>
//! DEL <key>
//! ```
//!
//! Keys and values are non-empty and contain only Unicode letters, Unicode
//! digits and the punctuation `* / _ . -`. Command names are case-sensitive.
//!
//! ## Response Rendering
//! - GET success:      the stored value
//! - SET/DEL success:  `OK`
//! - any failure:      `Error: <message>`

mod command;
mod parser;
mod response;
pub mod tokenize;

pub use command::{Command, CommandType};
pub use parser::{is_valid_argument, Compute, Parser};
pub use response::{Response, Status};
