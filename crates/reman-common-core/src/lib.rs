//! reman common core types and utilities.

pub mod error;
pub mod name;

pub use error::{Error, ErrorCategory, ErrorCode, Result};
pub use name::{validate_author_name, validate_document_name, NameError, AUTHOR_NAME_LIMIT};
