//! Interactive prompts for CLI user input.
//!
//! Workflows only talk to the [`Prompter`] trait. The terminal uses
//! [`LinePrompter`]; tests use [`ScriptedPrompter`].

mod line;
mod scripted;

pub use line::LinePrompter;
pub use scripted::{Answer, ScriptedPrompter};

use std::io::{self, IsTerminal};

/// Check if we're in interactive mode
pub fn is_interactive() -> bool {
    io::stdin().is_terminal() && io::stderr().is_terminal()
}

/// Result type for prompts
pub type PromptResult<T> = Result<T, PromptError>;

/// Errors that can occur during prompts
#[derive(Debug, thiserror::Error)]
pub enum PromptError {
    #[error("Input cancelled by user")]
    Cancelled,

    #[error("No answer left for prompt: {0}")]
    Exhausted(String),

    #[error("IO error: {0}")]
    Io(#[from] io::Error),
}

/// Asks the user questions.
pub trait Prompter {
    /// Yes/no question. Defaults to no.
    fn confirm(&mut self, question: &str) -> PromptResult<bool>;

    /// Free text. An empty answer yields `default`, or an empty string.
    fn input(&mut self, question: &str, default: Option<&str>) -> PromptResult<String>;

    /// Pick one of `options`, returning the chosen option.
    fn select(&mut self, question: &str, options: &[String]) -> PromptResult<String>;

    /// Show a section heading before a group of questions.
    fn heading(&mut self, _title: &str) -> PromptResult<()> {
        Ok(())
    }
}
