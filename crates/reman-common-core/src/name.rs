//! Validation of author and document names.
//!
//! Both names end up inside a filename (`<author>_<document>.tex`), so
//! they are restricted to ASCII letters and digits.

use std::sync::OnceLock;

use regex::Regex;
use thiserror::Error;

/// Maximum number of characters in an author name.
pub const AUTHOR_NAME_LIMIT: usize = 19;

/// Why a name was rejected.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum NameError {
    #[error("must have a name")]
    Empty,

    #[error("name has a max length of {limit}")]
    TooLong { limit: usize },

    #[error("use of special characters or spaces not allowed")]
    InvalidCharacters,
}

fn name_pattern() -> &'static Regex {
    static PATTERN: OnceLock<Regex> = OnceLock::new();
    PATTERN.get_or_init(|| Regex::new(r"^[a-zA-Z0-9]+$").expect("name pattern is valid"))
}

/// Check that `name` is made only of ASCII letters and digits.
pub fn validate_name_chars(name: &str) -> Result<(), NameError> {
    if name_pattern().is_match(name) {
        Ok(())
    } else {
        Err(NameError::InvalidCharacters)
    }
}

/// Validate an author name: non-empty, at most [`AUTHOR_NAME_LIMIT`]
/// characters, alphanumeric only. Length is checked before characters.
pub fn validate_author_name(name: &str) -> Result<(), NameError> {
    if name.is_empty() {
        return Err(NameError::Empty);
    }
    if name.chars().count() > AUTHOR_NAME_LIMIT {
        return Err(NameError::TooLong {
            limit: AUTHOR_NAME_LIMIT,
        });
    }
    validate_name_chars(name)
}

/// Validate a document name: non-empty and alphanumeric only.
pub fn validate_document_name(name: &str) -> Result<(), NameError> {
    if name.is_empty() {
        return Err(NameError::Empty);
    }
    validate_name_chars(name)
}
