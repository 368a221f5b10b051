//! Init command implementation.

use clap::Parser;
use reman_common_log::spans::{record_error, store_span};
use reman_common_log::timed;

use super::StoreDir;
use crate::cli::CommandContext;
use crate::error::CliError;
use crate::output::print_output;
use crate::prompts::Prompter;
use crate::workflow::init_store;

/// Initialize a resume store
#[derive(Debug, Parser)]
#[command(long_about = "\
Initializes a resume store in the current directory, or in the
directory given with --dir. The directory must already exist.

The store is laid out as:

  .
  ├── .reman
  ├── src
  │   ├── custom
  │   ├── outputs
  │   └── templates
  ├── preview
  └── Resume

Running init again keeps existing directories and asks before
replacing the config file.")]
pub struct InitCommand {
    #[command(flatten)]
    pub store: StoreDir,
}

impl InitCommand {
    pub fn execute(&self, ctx: &CommandContext, prompter: &mut dyn Prompter) -> Result<(), CliError> {
        let root = self.store.resolve()?;
        let _span = store_span("init", &root).entered();

        let report = timed!("init", init_store(&root, prompter)).map_err(|e| {
            record_error(&e);
            e
        })?;

        print_output(ctx, &report)
    }
}
