//! Response definitions
//!
//! Represents the outcome of a query as shown to the user.

use std::fmt;

use super::{Command, CommandType};
use crate::error::{KvError, Result};

/// Response status codes
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Status {
    Ok,
    NotFound,
    Error,
}

/// A response to print for one query
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Response {
    /// Status code
    pub status: Status,

    /// Optional payload (value for GET, error message for ERROR)
    pub payload: Option<String>,
}

impl Response {
    /// Create an OK response with optional payload
    pub fn ok(payload: Option<String>) -> Self {
        Self {
            status: Status::Ok,
            payload,
        }
    }

    /// Create a NOT_FOUND response
    pub fn not_found() -> Self {
        Self {
            status: Status::NotFound,
            payload: None,
        }
    }

    /// Create an ERROR response
    pub fn error(message: &str) -> Self {
        Self {
            status: Status::Error,
            payload: Some(message.to_string()),
        }
    }

    /// Build a response from a handled query
    pub fn from_outcome(outcome: &Result<Command>) -> Self {
        match outcome {
            Ok(command) => match command.kind {
                CommandType::Get => Response::ok(command.value.clone()),
                CommandType::Set | CommandType::Del => Response::ok(None),
            },
            Err(KvError::KeyNotFound) => Response::not_found(),
            Err(e) => Response::error(&e.to_string()),
        }
    }
}

impl fmt::Display for Response {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match (self.status, &self.payload) {
            (Status::Ok, Some(value)) => f.write_str(value),
            (Status::Ok, None) => f.write_str("OK"),
            (Status::NotFound, _) => write!(f, "Error: {}", KvError::KeyNotFound),
            (Status::Error, Some(message)) => write!(f, "Error: {}", message),
            (Status::Error, None) => f.write_str("Error"),
        }
    }
}
