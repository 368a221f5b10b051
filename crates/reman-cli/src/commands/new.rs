//! New command implementation.

use clap::Parser;
use reman_common_log::spans::{record_error, store_span};
use reman_common_log::timed;

use super::StoreDir;
use crate::cli::CommandContext;
use crate::error::CliError;
use crate::output::print_output;
use crate::prompts::Prompter;
use crate::workflow::new_document;

/// Create a new resume
#[derive(Debug, Parser)]
#[command(long_about = "\
Creates a new resume as a LaTeX file named <author>_<name>.tex
in the src folder. Optionally start from a template.

Templates are LaTeX files in src/templates. Copy any file you
want to reuse there and it becomes available to this command.

Support files (.cls, .sty) belong in src/custom and are imported
as 'custom/<name>' from your document.")]
pub struct NewCommand {
    #[command(flatten)]
    pub store: StoreDir,
}

impl NewCommand {
    pub fn execute(&self, ctx: &CommandContext, prompter: &mut dyn Prompter) -> Result<(), CliError> {
        let root = self.store.resolve()?;
        let _span = store_span("new", &root).entered();

        let report = timed!("new", new_document(&root, prompter)).map_err(|e| {
            record_error(&e);
            e
        })?;

        print_output(ctx, &report)
    }
}
