//! Command definitions
//!
//! Represents one parsed request line.

use std::fmt;
use std::str::FromStr;

use crate::error::KvError;

/// Command types
///
/// Names are matched case-sensitively: only `SET`, `GET` and `DEL` are valid.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum CommandType {
    Set,
    Get,
    Del,
}

impl CommandType {
    /// The literal command name as it appears on the wire
    pub fn as_str(&self) -> &'static str {
        match self {
            CommandType::Set => "SET",
            CommandType::Get => "GET",
            CommandType::Del => "DEL",
        }
    }

    /// Total token count (name included) a well-formed command carries
    pub fn arity(&self) -> usize {
        match self {
            CommandType::Set => 3,
            CommandType::Get | CommandType::Del => 2,
        }
    }
}

impl FromStr for CommandType {
    type Err = KvError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "SET" => Ok(CommandType::Set),
            "GET" => Ok(CommandType::Get),
            "DEL" => Ok(CommandType::Del),
            _ => Err(KvError::InvalidCommand),
        }
    }
}

impl fmt::Display for CommandType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// A parsed command
///
/// `value` is only set for `SET` requests, and for `GET` results once the
/// database has filled in the retrieved value.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Command {
    pub kind: CommandType,
    pub key: String,
    pub value: Option<String>,
}

impl Command {
    /// Build a `SET key value` command
    pub fn set(key: impl Into<String>, value: impl Into<String>) -> Self {
        Self {
            kind: CommandType::Set,
            key: key.into(),
            value: Some(value.into()),
        }
    }

    /// Build a `GET key` command
    pub fn get(key: impl Into<String>) -> Self {
        Self {
            kind: CommandType::Get,
            key: key.into(),
            value: None,
        }
    }

    /// Build a `DEL key` command
    pub fn del(key: impl Into<String>) -> Self {
        Self {
            kind: CommandType::Del,
            key: key.into(),
            value: None,
        }
    }
}

impl fmt::Display for Command {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} {}", self.kind, self.key)?;
        if let Some(value) = &self.value {
            write!(f, " {}", value)?;
        }
        Ok(())
    }
}
