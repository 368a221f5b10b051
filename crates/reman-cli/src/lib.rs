//! reman CLI library
//!
//! Workflows behind the `reman` binary: initializing a resume store,
//! creating documents from templates and editing the store config.

pub mod cli;
pub mod commands;
pub mod error;
pub mod output;
pub mod prompts;
pub mod workflow;

pub use error::CliError;
