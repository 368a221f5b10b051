//! Command workflows.
//!
//! Each workflow takes a store root and a [`Prompter`](crate::prompts::Prompter)
//! and returns a report that the command layer prints. Nothing here reads
//! the process environment, so workflows can run against any directory.

pub mod author;
pub mod document;
pub mod init;

pub use author::{configure_author, set_value, show_config, AuthorReport, ConfigKey, ConfigReport};
pub use document::{new_document, DocumentReport};
pub use init::{init_store, ConfigOutcome, InitReport};
