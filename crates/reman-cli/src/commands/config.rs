//! Config command implementation.

use std::path::PathBuf;

use clap::{Parser, Subcommand, ValueHint};
use reman_common_log::spans::{record_error, store_span};

use super::resolve_root;
use crate::cli::CommandContext;
use crate::error::CliError;
use crate::output::print_output;
use crate::prompts::Prompter;
use crate::workflow::{configure_author, set_value, show_config};

/// Configure the CLI
///
/// Without a subcommand, asks for each setting interactively.
#[derive(Debug, Parser)]
pub struct ConfigCommand {
    #[command(subcommand)]
    pub action: Option<ConfigAction>,

    /// Store root (defaults to the current directory)
    #[arg(short, long, global = true, value_hint = ValueHint::DirPath)]
    pub dir: Option<PathBuf>,
}

#[derive(Debug, Clone, Subcommand)]
pub enum ConfigAction {
    /// Print the store config
    Show,

    /// Set a config value
    Set {
        /// Key to set (author.name)
        key: String,
        value: String,
    },
}

impl ConfigCommand {
    pub fn execute(&self, ctx: &CommandContext, prompter: &mut dyn Prompter) -> Result<(), CliError> {
        let root = resolve_root(self.dir.as_deref())?;
        let _span = store_span("config", &root).entered();

        let result = match &self.action {
            None => configure_author(&root, prompter).and_then(|r| print_output(ctx, &r)),
            Some(ConfigAction::Show) => show_config(&root).and_then(|r| print_output(ctx, &r)),
            Some(ConfigAction::Set { key, value }) => {
                set_value(&root, key, value).and_then(|r| print_output(ctx, &r))
            }
        };
        result.map_err(|e| {
            record_error(&e);
            e
        })
    }
}
