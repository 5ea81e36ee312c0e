//! Textual form of integer sequences.
//!
//! Accepted input is a list of integers separated by commas and/or
//! whitespace, optionally wrapped in one pair of square brackets:
//! `[1, 2, 2]`, `1,2,2` and `1 2 2` all parse to the same sequence.

use super::errors::{Error, Result};
use std::fmt::Display;

/// Parse a sequence of `i64` values.
pub fn parse_sequence(text: &str) -> Result<Vec<i64>> {
    let body = strip_brackets(text.trim())?;

    split_tokens(body)?
        .into_iter()
        .enumerate()
        .map(|(index, token)| {
            token
                .parse::<i64>()
                .map_err(|_| Error::invalid_element(index + 1, token))
        })
        .collect()
}

/// Render a sequence as `[a, b, c]`.
pub fn format_sequence<T: Display>(values: &[T]) -> String {
    let joined = values
        .iter()
        .map(|value| value.to_string())
        .collect::<Vec<_>>()
        .join(", ");
    format!("[{}]", joined)
}

fn strip_brackets(text: &str) -> Result<&str> {
    match (text.starts_with('['), text.ends_with(']')) {
        (true, true) if text.len() >= 2 => Ok(&text[1..text.len() - 1]),
        (true, _) => Err(Error::InvalidSequence("missing closing ']'".to_string())),
        (false, true) => Err(Error::InvalidSequence("missing opening '['".to_string())),
        (false, false) => Ok(text),
    }
}

// Commas separate elements; whitespace around them is insignificant. An
// empty slot between two commas is rejected rather than silently skipped.
fn split_tokens(body: &str) -> Result<Vec<&str>> {
    if body.trim().is_empty() {
        return Ok(Vec::new());
    }

    let mut tokens = Vec::new();
    let mut fields = body.split(',').peekable();
    while let Some(field) = fields.next() {
        let field = field.trim();
        let is_trailing = fields.peek().is_none();
        if field.is_empty() {
            if is_trailing && !tokens.is_empty() {
                break;
            }
            return Err(Error::InvalidSequence(
                "empty element between separators".to_string(),
            ));
        }
        tokens.extend(field.split_whitespace());
    }
    Ok(tokens)
}
