//! Query sanitizer: validates raw user input before it reaches the table.

use crate::error::QueryError;

/// Accepts a non-empty string of ASCII letters and returns it lower-cased.
///
/// Surrounding whitespace (including a trailing newline from a console
/// read) is trimmed first; anything else outside `[A-Za-z]` is rejected
/// with its character position.
pub fn sanitize(raw: &str) -> Result<String, QueryError> {
    let trimmed = raw.trim();
    if trimmed.is_empty() {
        return Err(QueryError::Empty);
    }
    if let Some((position, ch)) = trimmed
        .chars()
        .enumerate()
        .find(|(_, c)| !c.is_ascii_alphabetic())
    {
        return Err(QueryError::InvalidChar { ch, position });
    }
    Ok(trimmed.to_ascii_lowercase())
}
