//! Parsing and range validation for numbered menu input.

use thiserror::Error;

/// Why a menu entry could not be accepted.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum SelectionError {
    #[error("\"{0}\" is not a number")]
    NotANumber(String),
    #[error("{index} is not an option on this menu")]
    OutOfRange { index: i64, len: usize },
}

/// Parse a whole number, ignoring surrounding whitespace.
pub fn parse_number(input: &str) -> Result<i64, SelectionError> {
    let trimmed = input.trim();
    trimmed
        .parse::<i64>()
        .map_err(|_| SelectionError::NotANumber(trimmed.to_string()))
}

/// Parse a 0-based menu index and check it falls within `[0, len)`.
pub fn parse_selection(input: &str, len: usize) -> Result<usize, SelectionError> {
    let index = parse_number(input)?;
    match usize::try_from(index) {
        Ok(i) if i < len => Ok(i),
        _ => Err(SelectionError::OutOfRange { index, len }),
    }
}
