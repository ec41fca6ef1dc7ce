//! Command parser
//!
//! Turns one raw request line into a validated `Command`.
//!
//! ## Grammar
//!
//! ```text
//! command  = set | get | del
//! set      = "SET" ws key ws value
//! get      = "GET" ws key
//! del      = "DEL" ws key
//! key      = argument
//! value    = argument
//! argument = 1*( letter | digit | "*" | "/" | "_" | "." | "-" )
//! ```
//!
//! ## Failure Order
//! 1. No tokens                        → `InvalidCommand`
//! 2. Unknown or miscased command name → `InvalidCommand`
//! 3. Wrong token count for the name   → `InvalidSyntax`
//! 4. Disallowed argument character    → `InvalidSyntax`

use unicode_general_category::{get_general_category, GeneralCategory};

use super::{Command, CommandType};
use crate::context::Context;
use crate::error::{KvError, Result};

/// Punctuation accepted inside keys and values
const ARGUMENT_PUNCTUATION: [char; 5] = ['*', '/', '_', '.', '-'];

/// Converts query text into commands
pub trait Compute: Send + Sync {
    /// Parse and validate `query`
    fn process_command(&self, ctx: &Context, query: &str) -> Result<Command>;
}

/// The primary whitespace-token parser
#[derive(Debug, Clone, Copy, Default)]
pub struct Parser;

impl Parser {
    /// Create a new parser
    pub fn new() -> Self {
        Self
    }

    /// Parse a single request line
    pub fn parse(&self, input: &str) -> Result<Command> {
        let words: Vec<&str> = input.split_whitespace().collect();

        let Some(name) = words.first() else {
            tracing::debug!("empty query received");
            return Err(KvError::InvalidCommand);
        };

        let kind = name.parse::<CommandType>().inspect_err(|_| {
            tracing::debug!(command = %name, "unknown command type");
        })?;

        if words.len() != kind.arity() {
            tracing::debug!(
                command = %kind,
                words_count = words.len(),
                "invalid command syntax"
            );
            return Err(KvError::InvalidSyntax);
        }

        let command = Command {
            kind,
            key: words[1].to_string(),
            value: match kind {
                CommandType::Set => Some(words[2].to_string()),
                CommandType::Get | CommandType::Del => None,
            },
        };

        let value_ok = command.value.as_deref().map_or(true, is_valid_argument);
        if !is_valid_argument(&command.key) || !value_ok {
            tracing::debug!(%command, "invalid argument format");
            return Err(KvError::InvalidSyntax);
        }

        tracing::debug!(%command, "command parsed successfully");
        Ok(command)
    }
}

impl Compute for Parser {
    fn process_command(&self, _ctx: &Context, query: &str) -> Result<Command> {
        tracing::trace!(query, "parsing command");
        self.parse(query)
    }
}

/// Check an argument against the key/value character class
pub fn is_valid_argument(arg: &str) -> bool {
    !arg.is_empty() && arg.chars().all(is_valid_char)
}

/// Letters (L*), decimal digits (Nd) and the argument punctuation
fn is_valid_char(c: char) -> bool {
    matches!(
        get_general_category(c),
        GeneralCategory::UppercaseLetter
            | GeneralCategory::LowercaseLetter
            | GeneralCategory::TitlecaseLetter
            | GeneralCategory::ModifierLetter
            | GeneralCategory::OtherLetter
            | GeneralCategory::DecimalNumber
    ) || ARGUMENT_PUNCTUATION.contains(&c)
}
