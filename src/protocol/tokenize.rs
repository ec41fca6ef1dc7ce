//! Quote-aware tokenizer
//!
//! A lightweight helper for sniffing the command type of a line without
//! running the full parser. Not used by the request pipeline, whose grammar
//! has no quoting.

use super::CommandType;

/// Split `input` on ASCII spaces, keeping spaces inside double quotes
///
/// Quote characters toggle quoted mode and are dropped from the output.
/// Empty words are never emitted, so `""` on its own produces nothing.
pub fn split_words(input: &str) -> Vec<String> {
    let mut words = Vec::new();
    let mut current = String::new();
    let mut in_quotes = false;

    for c in input.chars() {
        match c {
            '"' => in_quotes = !in_quotes,
            ' ' if !in_quotes => {
                if !current.is_empty() {
                    words.push(std::mem::take(&mut current));
                }
            }
            _ => current.push(c),
        }
    }

    if !current.is_empty() {
        words.push(current);
    }

    words
}

/// Command type named by the first word of `input`, if it is one
pub fn parse_command_type(input: &str) -> Option<CommandType> {
    split_words(input).first()?.parse().ok()
}
